//! Inverse of the parser: segments back to canonical text.

use super::types::{RefKind, Segment};

/// Export a single segment in canonical form.
///
/// Pure function of the segment value; catalogs are never consulted.
pub fn export(segment: &Segment) -> String {
    match segment {
        Segment::Literal { text } => text.clone(),
        Segment::StepRef { step_name } => token(RefKind::Step, step_name),
        Segment::MediaRef { media_id } => token(RefKind::Media, media_id),
    }
}

/// Serialize a segment sequence to canonical text.
///
/// For any string `s`, `serialize(&parse(s)) == s`.
pub fn serialize(segments: &[Segment]) -> String {
    segments.iter().map(export).collect()
}

pub(crate) fn token(kind: RefKind, identifier: &str) -> String {
    format!("@{{{}:{}}}", kind.token_keyword(), identifier)
}
