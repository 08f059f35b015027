//! Node sequences and their conversion to and from canonical text.

use super::node::{MentionNode, Node, Rendered};
use crate::catalog::{MediaCatalogEntry, StepCatalogEntry};
use crate::segment::{Segment, parse};

/// Ordered sequence of editable nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node. Text is merged into a trailing text node.
    pub fn push(&mut self, node: Node) {
        match node {
            Node::Text(text) => self.push_text(&text.text),
            other => self.nodes.push(other),
        }
    }

    /// Append text, merging into a trailing text node.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.nodes.last_mut() {
            Some(Node::Text(last)) => last.text.push_str(text),
            _ => self.nodes.push(Node::text(text)),
        }
    }

    /// Remove the last character of a trailing text node.
    ///
    /// Returns the removed character. A trailing mention is never removed
    /// here; the editor deletes pills as whole units via [`Self::pop_node`].
    pub fn pop_char(&mut self) -> Option<char> {
        let Some(Node::Text(last)) = self.nodes.last_mut() else {
            return None;
        };
        let removed = last.text.pop();
        if last.text.is_empty() {
            self.nodes.pop();
        }
        removed
    }

    /// Remove the trailing node, whatever its kind.
    pub fn pop_node(&mut self) -> Option<Node> {
        self.nodes.pop()
    }

    /// Remove `suffix` from the end of the trailing text node.
    ///
    /// Returns `false` and leaves the tree untouched if the trailing node is
    /// not text or does not end with `suffix`.
    pub fn strip_text_suffix(&mut self, suffix: &str) -> bool {
        let Some(Node::Text(last)) = self.nodes.last_mut() else {
            return false;
        };
        if !last.text.ends_with(suffix) {
            return false;
        }
        let keep = last.text.len() - suffix.len();
        last.text.truncate(keep);
        if last.text.is_empty() {
            self.nodes.pop();
        }
        true
    }

    /// The segment sequence represented by this tree.
    pub fn segments(&self) -> Vec<Segment> {
        self.nodes.iter().map(Node::to_segment).collect()
    }

    /// Render every node in order.
    pub fn render(&self) -> Vec<Rendered> {
        self.nodes.iter().map(MentionNode::render).collect()
    }

    /// Render the tree as a single display line (`Hello [@name]`).
    pub fn render_line(&self) -> String {
        self.render().iter().map(ToString::to_string).collect()
    }

    /// Nodes whose mention target is absent, with their positions.
    pub fn missing(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_missing())
    }

    /// Re-derive labels and missing flags from fresh catalog snapshots.
    pub fn refresh(&mut self, steps: Option<&[StepCatalogEntry]>, media: &[MediaCatalogEntry]) {
        for node in &mut self.nodes {
            if !matches!(node, Node::Text(_)) {
                *node = Node::from_segment(&node.to_segment(), steps, media);
            }
        }
    }
}

/// Build the editable tree for canonical text against live catalogs.
///
/// Never fails: references absent from the catalogs become nodes flagged as
/// missing. Step mentions are only checked when `steps` is supplied.
pub fn deserialize_to_nodes(
    canonical_text: &str,
    steps: Option<&[StepCatalogEntry]>,
    media: &[MediaCatalogEntry],
) -> NodeTree {
    let nodes: Vec<Node> = parse(canonical_text)
        .iter()
        .map(|segment| Node::from_segment(segment, steps, media))
        .collect();

    let missing = nodes.iter().filter(|node| node.is_missing()).count();
    if missing > 0 {
        tracing::debug!(missing, "deserialized template with dangling mentions");
    }

    NodeTree { nodes }
}

/// Export a tree back to canonical text.
pub fn node_tree_to_canonical_text(tree: &NodeTree) -> String {
    tree.nodes.iter().map(MentionNode::export_text).collect()
}
