//! Media catalog entries.

use super::display_name::derive_display_name;
use serde::{Deserialize, Serialize};

/// A reference image attached to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCatalogEntry {
    /// Identifier used in `@{ref:<media_id>}` tokens. Unique within a template.
    pub media_id: String,
    /// Public URL handed to the generation model.
    pub url: String,
    /// Storage path of the uploaded object.
    #[serde(default)]
    pub storage_path: String,
    /// Human label; derived from `storage_path` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl MediaCatalogEntry {
    /// Create an entry without an explicit display name.
    pub fn new(
        media_id: impl Into<String>,
        url: impl Into<String>,
        storage_path: impl Into<String>,
    ) -> Self {
        Self {
            media_id: media_id.into(),
            url: url.into(),
            storage_path: storage_path.into(),
            display_name: None,
        }
    }

    /// Set an explicit display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The name shown to authors.
    ///
    /// An explicit, non-blank `display_name` wins. Otherwise the name is
    /// derived from `storage_path`, and if that yields nothing the media id
    /// is used.
    pub fn effective_display_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref()
            && !name.trim().is_empty()
        {
            return name.trim().to_string();
        }

        let derived = derive_display_name(&self.storage_path);
        if derived.is_empty() {
            self.media_id.clone()
        } else {
            derived
        }
    }
}

/// Look up a media entry by id.
pub fn find_media<'a>(catalog: &'a [MediaCatalogEntry], media_id: &str) -> Option<&'a MediaCatalogEntry> {
    catalog.iter().find(|entry| entry.media_id == media_id)
}
