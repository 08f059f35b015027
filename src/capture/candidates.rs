//! Candidate search for a capture query.

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry};
use crate::segment::{RefKind, is_identifier};
use serde::Serialize;

/// Something the author can mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub kind: RefKind,
    /// Step name or media id; what the token will contain.
    pub identifier: String,
    /// Step name or media display name; what the author sees and matches on.
    pub label: String,
}

/// Find candidates whose label contains `query`, case-insensitively.
///
/// Steps come before media; within each group catalog order is kept. An
/// empty query matches everything. `limit` caps the result length.
///
/// Entries whose identifier cannot be written as a token are never offered.
pub fn find_candidates(
    query: &str,
    steps: &[StepCatalogEntry],
    media: &[MediaCatalogEntry],
    limit: Option<usize>,
) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    let matches = |label: &str| label.to_lowercase().contains(&needle);

    let step_candidates = steps
        .iter()
        .filter(|step| is_identifier(&step.step_name) && matches(&step.step_name))
        .map(|step| Candidate {
            kind: RefKind::Step,
            identifier: step.step_name.clone(),
            label: step.step_name.clone(),
        });

    let media_candidates = media.iter().filter_map(|entry| {
        if !is_identifier(&entry.media_id) {
            return None;
        }
        let label = entry.effective_display_name();
        matches(&label).then(|| Candidate {
            kind: RefKind::Media,
            identifier: entry.media_id.clone(),
            label,
        })
    });

    step_candidates
        .chain(media_candidates)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
