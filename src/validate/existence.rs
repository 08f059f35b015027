//! Reference existence against live catalogs.

use super::types::DanglingReference;
use crate::catalog::{MediaCatalogEntry, StepCatalogEntry, find_media, find_step};
use crate::segment::{RefKind, Segment, references};

/// Report every reference segment whose identifier is not in its catalog.
pub fn check_existence(
    segments: &[Segment],
    steps: &[StepCatalogEntry],
    media: &[MediaCatalogEntry],
) -> Vec<DanglingReference> {
    references(segments)
        .filter(|&(_, kind, identifier)| match kind {
            RefKind::Step => find_step(steps, identifier).is_none(),
            RefKind::Media => find_media(media, identifier).is_none(),
        })
        .map(|(index, kind, identifier)| DanglingReference::new(index, kind, identifier))
        .collect()
}
