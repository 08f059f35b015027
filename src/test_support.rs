//! Shared fixtures for unit tests.

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry, StepOption, StepType};

/// A media entry with a CDN url derived from its id.
pub(crate) fn media_entry(media_id: &str, storage_path: &str) -> MediaCatalogEntry {
    MediaCatalogEntry::new(media_id, format!("https://cdn.test/{media_id}"), storage_path)
}

/// Multi-select `pet` step with fragments for `cat` and `dog`.
pub(crate) fn pet_step() -> StepCatalogEntry {
    StepCatalogEntry::new("pet", StepType::MultiSelect)
        .with_option(StepOption::new("cat").with_fragment("a cat"))
        .with_option(StepOption::new("dog").with_fragment("a dog"))
}

/// Free-text `name` step.
pub(crate) fn name_step() -> StepCatalogEntry {
    StepCatalogEntry::new("name", StepType::FreeText)
}
