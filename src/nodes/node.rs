//! Node kinds and the render/export contract.

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry, find_media, find_step};
use crate::segment::{RefKind, Segment, export};
use serde::Serialize;
use std::fmt;

/// Capability contract shared by all editable nodes.
pub trait MentionNode {
    /// What the editor displays for this node.
    fn render(&self) -> Rendered;

    /// Canonical text for this node.
    fn export_text(&self) -> String;
}

/// Pill color category. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PillCategory {
    Step,
    Media,
}

impl From<RefKind> for PillCategory {
    fn from(kind: RefKind) -> Self {
        match kind {
            RefKind::Step => PillCategory::Step,
            RefKind::Media => PillCategory::Media,
        }
    }
}

/// A non-editable inline mention unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pill {
    pub category: PillCategory,
    pub label: String,
    /// The referenced entity is absent from the live catalog.
    pub missing: bool,
}

impl fmt::Display for Pill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing {
            write!(f, "[@{}?]", self.label)
        } else {
            write!(f, "[@{}]", self.label)
        }
    }
}

/// Render output of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rendered {
    Text { text: String },
    Pill(Pill),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text { text } => f.write_str(text),
            Rendered::Pill(pill) => fmt::Display::fmt(pill, f),
        }
    }
}

/// Plain editable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
}

impl MentionNode for TextNode {
    fn render(&self) -> Rendered {
        Rendered::Text {
            text: self.text.clone(),
        }
    }

    fn export_text(&self) -> String {
        self.text.clone()
    }
}

/// Mention of a workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMention {
    pub step_name: String,
    pub missing: bool,
}

impl StepMention {
    /// Build a step mention, flagging it missing when a step catalog is
    /// given and does not contain the step.
    pub fn resolve(step_name: impl Into<String>, steps: Option<&[StepCatalogEntry]>) -> Self {
        let step_name = step_name.into();
        let missing = steps.is_some_and(|steps| find_step(steps, &step_name).is_none());
        Self { step_name, missing }
    }
}

impl MentionNode for StepMention {
    fn render(&self) -> Rendered {
        Rendered::Pill(Pill {
            category: PillCategory::Step,
            label: self.step_name.clone(),
            missing: self.missing,
        })
    }

    fn export_text(&self) -> String {
        export(&Segment::step(self.step_name.as_str()))
    }
}

/// Mention of a media catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMention {
    pub media_id: String,
    /// Label cached from the catalog at creation. Never exported.
    pub display_name: Option<String>,
    pub missing: bool,
}

impl MediaMention {
    /// Build a media mention, caching its label from the live catalog.
    pub fn resolve(media_id: impl Into<String>, catalog: &[MediaCatalogEntry]) -> Self {
        let media_id = media_id.into();
        match find_media(catalog, &media_id) {
            Some(entry) => Self {
                display_name: Some(entry.effective_display_name()),
                media_id,
                missing: false,
            },
            None => Self {
                media_id,
                display_name: None,
                missing: true,
            },
        }
    }
}

impl MentionNode for MediaMention {
    fn render(&self) -> Rendered {
        Rendered::Pill(Pill {
            category: PillCategory::Media,
            label: self
                .display_name
                .clone()
                .unwrap_or_else(|| self.media_id.clone()),
            missing: self.missing,
        })
    }

    fn export_text(&self) -> String {
        export(&Segment::media(self.media_id.as_str()))
    }
}

/// Any node in a [`super::NodeTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Step(StepMention),
    Media(MediaMention),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode { text: text.into() })
    }

    /// Build the node for a segment against live catalogs.
    pub fn from_segment(
        segment: &Segment,
        steps: Option<&[StepCatalogEntry]>,
        media: &[MediaCatalogEntry],
    ) -> Self {
        match segment {
            Segment::Literal { text } => Node::text(text.as_str()),
            Segment::StepRef { step_name } => Node::Step(StepMention::resolve(step_name.as_str(), steps)),
            Segment::MediaRef { media_id } => Node::Media(MediaMention::resolve(media_id.as_str(), media)),
        }
    }

    /// The segment this node stands for.
    pub fn to_segment(&self) -> Segment {
        match self {
            Node::Text(node) => Segment::literal(node.text.as_str()),
            Node::Step(node) => Segment::step(node.step_name.as_str()),
            Node::Media(node) => Segment::media(node.media_id.as_str()),
        }
    }

    /// Whether this node is a mention whose target is absent.
    pub fn is_missing(&self) -> bool {
        match self {
            Node::Text(_) => false,
            Node::Step(node) => node.missing,
            Node::Media(node) => node.missing,
        }
    }
}

impl MentionNode for Node {
    fn render(&self) -> Rendered {
        match self {
            Node::Text(node) => node.render(),
            Node::Step(node) => node.render(),
            Node::Media(node) => node.render(),
        }
    }

    fn export_text(&self) -> String {
        match self {
            Node::Text(node) => node.export_text(),
            Node::Step(node) => node.export_text(),
            Node::Media(node) => node.export_text(),
        }
    }
}
