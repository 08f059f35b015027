//! Reference validation for prompt templates.
//!
//! Two independent checks, both pure functions of their inputs:
//!
//! - **Uniqueness**: no two attached media entries share an effective
//!   display name. Every implicated entry is reported.
//! - **Existence**: every step/media reference resolves to an entry in the
//!   live catalogs. Every dangling reference is reported with its segment
//!   index.
//!
//! Validation is advisory while editing and blocking before publish or
//! resolution; the CLI maps a non-clean report to exit code 2.

mod existence;
mod types;
mod uniqueness;

#[cfg(test)]
mod tests;

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry};
use crate::segment::{RefKind, Segment};
use crate::template::Template;

// Re-export public API
pub use existence::check_existence;
pub use types::{DanglingReference, UniquenessViolation, ValidationReport};
pub use uniqueness::check_uniqueness;

/// Run both checks and collect every finding.
///
/// # Example
///
/// ```
/// use promptref::catalog::MediaCatalogEntry;
/// use promptref::segment::parse;
/// use promptref::validate::validate;
///
/// let media = vec![
///     MediaCatalogEntry::new("a", "https://cdn/a", "refs/overlay-1.png"),
///     MediaCatalogEntry::new("b", "https://cdn/b", "refs/overlay-2.png"),
/// ];
/// let report = validate(&parse("@{ref:a} @{step:gone}"), &[], &media);
/// assert_eq!(report.uniqueness_violations.len(), 1);
/// assert_eq!(report.dangling_references.len(), 1);
/// ```
pub fn validate(
    segments: &[Segment],
    steps: &[StepCatalogEntry],
    media: &[MediaCatalogEntry],
) -> ValidationReport {
    let report = ValidationReport {
        uniqueness_violations: check_uniqueness(media),
        dangling_references: check_existence(segments, steps, media),
    };

    tracing::debug!(
        uniqueness = report.uniqueness_violations.len(),
        dangling = report.dangling_references.len(),
        "validated template"
    );
    report
}

/// Validate a template against a step catalog and its own media catalog.
pub fn validate_template(template: &Template, steps: &[StepCatalogEntry]) -> ValidationReport {
    validate(&template.segments(), steps, &template.media_catalog)
}

/// Check a template before it is resolved for a run.
///
/// Step references are only checked when a step catalog is supplied, the
/// same rule the node tree uses to flag missing step mentions. Media
/// references and display names are always checked against the template's
/// own catalog.
pub fn validate_for_run(
    template: &Template,
    steps: Option<&[StepCatalogEntry]>,
) -> ValidationReport {
    let mut report = validate(
        &template.segments(),
        steps.unwrap_or_default(),
        &template.media_catalog,
    );
    if steps.is_none() {
        report
            .dangling_references
            .retain(|dangling| dangling.kind != RefKind::Step);
    }
    report
}
