//! Segment values produced by the parser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of entity a token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    /// A prior workflow step (`@{step:...}`).
    Step,
    /// An entry in the template's media catalog (`@{ref:...}`).
    Media,
}

impl RefKind {
    /// The keyword used inside the token braces.
    pub fn token_keyword(self) -> &'static str {
        match self {
            RefKind::Step => "step",
            RefKind::Media => "ref",
        }
    }

    /// Map a token keyword back to a kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "step" => Some(RefKind::Step),
            "ref" => Some(RefKind::Media),
            _ => None,
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Step => write!(f, "step"),
            RefKind::Media => write!(f, "media"),
        }
    }
}

/// One parsed piece of a canonical template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Raw characters, kept verbatim.
    Literal { text: String },
    /// Reference to a prior workflow step's answer.
    StepRef { step_name: String },
    /// Reference to a media catalog entry.
    MediaRef { media_id: String },
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal { text: text.into() }
    }

    pub fn step(step_name: impl Into<String>) -> Self {
        Segment::StepRef {
            step_name: step_name.into(),
        }
    }

    pub fn media(media_id: impl Into<String>) -> Self {
        Segment::MediaRef {
            media_id: media_id.into(),
        }
    }

    /// Build a reference segment of the given kind.
    pub fn reference(kind: RefKind, identifier: impl Into<String>) -> Self {
        match kind {
            RefKind::Step => Segment::step(identifier),
            RefKind::Media => Segment::media(identifier),
        }
    }

    /// The reference kind, or `None` for literal text.
    pub fn kind(&self) -> Option<RefKind> {
        match self {
            Segment::Literal { .. } => None,
            Segment::StepRef { .. } => Some(RefKind::Step),
            Segment::MediaRef { .. } => Some(RefKind::Media),
        }
    }

    /// The referenced identifier, or `None` for literal text.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Segment::Literal { .. } => None,
            Segment::StepRef { step_name } => Some(step_name),
            Segment::MediaRef { media_id } => Some(media_id),
        }
    }
}

/// Iterate over the reference segments as `(segment_index, kind, identifier)`.
///
/// Indices are positions in the full segment slice, literals included, so
/// they line up with what an editor displays.
pub fn references(segments: &[Segment]) -> impl Iterator<Item = (usize, RefKind, &str)> {
    segments.iter().enumerate().filter_map(|(index, segment)| {
        match (segment.kind(), segment.identifier()) {
            (Some(kind), Some(identifier)) => Some((index, kind, identifier)),
            _ => None,
        }
    })
}
