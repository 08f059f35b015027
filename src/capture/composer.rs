//! Editing session coupling the capture machine with a node tree.

use super::candidates::{Candidate, find_candidates};
use super::state::{CaptureMachine, Insertion, Key, Transition};
use crate::catalog::{MediaCatalogEntry, StepCatalogEntry};
use crate::nodes::{
    MediaMention, Node, NodeTree, StepMention, deserialize_to_nodes, node_tree_to_canonical_text,
};
use crate::segment::{RefKind, is_identifier};

/// Tunables for an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Append one space after an inserted mention.
    pub insert_trailing_space: bool,
    /// Cap on the candidate list length.
    pub max_candidates: Option<usize>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            insert_trailing_space: true,
            max_candidates: None,
        }
    }
}

/// One author's editing session over a template.
///
/// Typing appends at the end of the document. Every keystroke is typed into
/// the tree as literal text and fed to the capture machine; selecting a
/// candidate swaps the typed `@query` for a mention node.
#[derive(Debug, Clone)]
pub struct Composer {
    tree: NodeTree,
    machine: CaptureMachine,
    steps: Vec<StepCatalogEntry>,
    media: Vec<MediaCatalogEntry>,
    options: CaptureOptions,
}

impl Composer {
    /// Start an empty session.
    pub fn new(
        steps: Vec<StepCatalogEntry>,
        media: Vec<MediaCatalogEntry>,
        options: CaptureOptions,
    ) -> Self {
        Self {
            tree: NodeTree::new(),
            machine: CaptureMachine::new(),
            steps,
            media,
            options,
        }
    }

    /// Start a session on existing canonical text.
    pub fn from_canonical(
        canonical_text: &str,
        steps: Vec<StepCatalogEntry>,
        media: Vec<MediaCatalogEntry>,
        options: CaptureOptions,
    ) -> Self {
        let tree = deserialize_to_nodes(canonical_text, Some(steps.as_slice()), &media);
        Self {
            tree,
            machine: CaptureMachine::new(),
            steps,
            media,
            options,
        }
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn machine(&self) -> &CaptureMachine {
        &self.machine
    }

    /// Canonical text for the storage layer.
    pub fn canonical_text(&self) -> String {
        node_tree_to_canonical_text(&self.tree)
    }

    /// Swap in fresh catalog snapshots and re-derive pill labels.
    pub fn set_catalogs(&mut self, steps: Vec<StepCatalogEntry>, media: Vec<MediaCatalogEntry>) {
        self.steps = steps;
        self.media = media;
        self.tree.refresh(Some(self.steps.as_slice()), &self.media);
    }

    /// Apply one keystroke to the document and the capture machine.
    pub fn type_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Char(c) => {
                let mut buf = [0u8; 4];
                self.tree.push_text(c.encode_utf8(&mut buf));
            }
            Key::Backspace => {
                if self.tree.pop_char().is_none() && !self.machine.is_composing() {
                    // Pills are deleted as a unit.
                    self.tree.pop_node();
                }
            }
            Key::Escape => {}
        }

        let transition = self.machine.handle(key);
        tracing::trace!(?key, ?transition, "capture keystroke");
        transition
    }

    /// Type a run of characters.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.type_key(Key::Char(c));
        }
    }

    /// Candidates for the current query; empty when idle.
    pub fn candidates(&self) -> Vec<Candidate> {
        match self.machine.query() {
            Some(query) => {
                find_candidates(query, &self.steps, &self.media, self.options.max_candidates)
            }
            None => Vec::new(),
        }
    }

    /// Complete the capture with `candidate`.
    ///
    /// Replaces the typed `@query` with the mention node and, when
    /// configured, appends one space. Returns `None` when idle, or when the
    /// candidate's identifier is outside the token charset.
    pub fn select(&mut self, candidate: &Candidate) -> Option<Insertion> {
        if !is_identifier(&candidate.identifier) {
            tracing::warn!(
                identifier = %candidate.identifier,
                "candidate identifier cannot be written as a token"
            );
            return None;
        }

        let insertion = self.machine.select(candidate)?;

        if !self.tree.strip_text_suffix(&insertion.replaced) {
            tracing::warn!(
                replaced = %insertion.replaced,
                "typed capture span not found at the end of the document"
            );
        }

        let node = match insertion.kind {
            RefKind::Step => Node::Step(StepMention::resolve(
                insertion.identifier.as_str(),
                Some(self.steps.as_slice()),
            )),
            RefKind::Media => {
                Node::Media(MediaMention::resolve(insertion.identifier.as_str(), &self.media))
            }
        };
        self.tree.push(node);

        if self.options.insert_trailing_space {
            self.tree.push_text(" ");
        }

        tracing::debug!(kind = %insertion.kind, identifier = %insertion.identifier, "inserted mention");
        Some(insertion)
    }

    /// Select the `index`-th current candidate.
    pub fn select_index(&mut self, index: usize) -> Option<Insertion> {
        let candidate = self.candidates().into_iter().nth(index)?;
        self.select(&candidate)
    }
}
