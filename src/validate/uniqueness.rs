//! Display-name uniqueness among attached media.

use super::types::UniquenessViolation;
use crate::catalog::MediaCatalogEntry;
use std::collections::HashMap;

/// Report every display name used by more than one attached entry.
///
/// Names are compared after defaulting (see
/// [`MediaCatalogEntry::effective_display_name`]) and exactly, without case
/// folding. Violations are ordered by the name's first appearance.
pub fn check_uniqueness(media: &[MediaCatalogEntry]) -> Vec<UniquenessViolation> {
    let mut groups: Vec<UniquenessViolation> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for entry in media {
        let name = entry.effective_display_name();
        match by_name.get(&name) {
            Some(&index) => groups[index].media_ids.push(entry.media_id.clone()),
            None => {
                by_name.insert(name.clone(), groups.len());
                groups.push(UniquenessViolation {
                    display_name: name,
                    media_ids: vec![entry.media_id.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.media_ids.len() > 1);
    groups
}
