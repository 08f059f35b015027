//! Editable node model for the rich-text prompt surface.
//!
//! Each segment kind maps to one node kind. Every node implements
//! [`MentionNode`]:
//!
//! - `render()` produces what the editor shows: plain text, or a
//!   non-editable inline pill for mentions
//! - `export_text()` produces the canonical text for the node, identical to
//!   [`crate::segment::export`] for the matching segment
//!
//! Media mentions cache a display name so pills render without a catalog
//! lookup. The cached name is a render hint only: export always emits the
//! media id, and labels are re-derived from the live catalog whenever a tree
//! is deserialized or refreshed.

mod node;
mod tree;


// Re-export public API
pub use node::{MediaMention, MentionNode, Node, Pill, PillCategory, Rendered, StepMention, TextNode};
pub use tree::{NodeTree, deserialize_to_nodes, node_tree_to_canonical_text};
