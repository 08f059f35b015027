//! The template document: canonical text plus its attached media.
//!
//! The canonical text is the only persisted form of a prompt. The editable
//! node tree is always derived from it (see [`crate::nodes`]) and converted
//! back on every change.
//!
//! Media attachment enforces two rules among the *currently attached*
//! entries: media ids are unique, and effective display names are unique.
//! Detaching an entry frees its name for reuse.

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry, find_media};
use crate::error::{PromptError, Result};
use crate::nodes::{NodeTree, deserialize_to_nodes, node_tree_to_canonical_text};
use crate::segment::{Segment, is_identifier, parse};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A prompt template as stored by the template storage collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Canonical text with `@{step:..}` / `@{ref:..}` tokens.
    pub canonical_text: String,
    /// Reference images attached to this template.
    pub media_catalog: Vec<MediaCatalogEntry>,
}

impl Template {
    pub fn new(canonical_text: impl Into<String>) -> Self {
        Self {
            canonical_text: canonical_text.into(),
            media_catalog: Vec::new(),
        }
    }

    /// Parse the canonical text into segments.
    pub fn segments(&self) -> Vec<Segment> {
        parse(&self.canonical_text)
    }

    /// Attach a media entry.
    ///
    /// Fails if the id is not a valid token identifier, is already attached,
    /// or if the entry's effective display name is taken by another
    /// attached entry.
    pub fn attach_media(&mut self, entry: MediaCatalogEntry) -> Result<()> {
        if !is_identifier(&entry.media_id) {
            return Err(PromptError::UserError(format!(
                "media id '{}' is not a valid identifier (allowed: A-Z a-z 0-9 _ -)",
                entry.media_id
            )));
        }

        if find_media(&self.media_catalog, &entry.media_id).is_some() {
            return Err(PromptError::UserError(format!(
                "media '{}' is already attached to this template",
                entry.media_id
            )));
        }

        let name = entry.effective_display_name();
        if let Some(existing) = self
            .media_catalog
            .iter()
            .find(|attached| attached.effective_display_name() == name)
        {
            return Err(PromptError::UserError(format!(
                "display name '{}' is already used by media '{}'. Rename one of them before attaching.",
                name, existing.media_id
            )));
        }

        tracing::debug!(media_id = %entry.media_id, display_name = %name, "attached media");
        self.media_catalog.push(entry);
        Ok(())
    }

    /// Detach a media entry by id, returning it if it was attached.
    ///
    /// Tokens referencing the id are left in the text; they become dangling
    /// references that validation reports.
    pub fn detach_media(&mut self, media_id: &str) -> Option<MediaCatalogEntry> {
        let index = self
            .media_catalog
            .iter()
            .position(|entry| entry.media_id == media_id)?;
        tracing::debug!(media_id, "detached media");
        Some(self.media_catalog.remove(index))
    }

    /// Build the editable node tree against live catalogs.
    pub fn to_nodes(&self, steps: Option<&[StepCatalogEntry]>) -> NodeTree {
        deserialize_to_nodes(&self.canonical_text, steps, &self.media_catalog)
    }

    /// Replace the canonical text with the export of an edited node tree.
    pub fn update_from_nodes(&mut self, tree: &NodeTree) {
        self.canonical_text = node_tree_to_canonical_text(tree);
    }

    /// Load a template from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a template from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse template YAML: {}", e)))
    }

    /// Serialize the template to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize template to YAML: {}", e))
        })
    }
}
