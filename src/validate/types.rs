//! Validation findings.

use crate::segment::RefKind;
use serde::Serialize;

/// Several attached media entries share one display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniquenessViolation {
    pub display_name: String,
    /// Every entry using the name, in catalog order.
    pub media_ids: Vec<String>,
}

/// A reference whose identifier is absent from the live catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub segment_index: usize,
    pub kind: RefKind,
    pub identifier: String,
}

impl DanglingReference {
    pub fn new(segment_index: usize, kind: RefKind, identifier: impl Into<String>) -> Self {
        Self {
            segment_index,
            kind,
            identifier: identifier.into(),
        }
    }
}

/// Result of validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub uniqueness_violations: Vec<UniquenessViolation>,
    pub dangling_references: Vec<DanglingReference>,
}

impl ValidationReport {
    /// No findings of either kind.
    pub fn is_clean(&self) -> bool {
        self.uniqueness_violations.is_empty() && self.dangling_references.is_empty()
    }

    /// Format the findings as a user-facing punch-list.
    ///
    /// ```text
    /// Duplicate display names
    ///   overlay: a, b
    ///
    /// Dangling references
    ///   segment 3: step 'pet'
    /// ```
    pub fn format_error(&self) -> String {
        if self.is_clean() {
            return String::new();
        }

        let mut msg = String::new();

        if !self.uniqueness_violations.is_empty() {
            msg.push_str("Duplicate display names\n");
            for violation in &self.uniqueness_violations {
                msg.push_str(&format!(
                    "  {}: {}\n",
                    violation.display_name,
                    violation.media_ids.join(", ")
                ));
            }
        }

        if !self.dangling_references.is_empty() {
            if !msg.is_empty() {
                msg.push('\n');
            }
            msg.push_str("Dangling references\n");
            for dangling in &self.dangling_references {
                msg.push_str(&format!(
                    "  segment {}: {} '{}'\n",
                    dangling.segment_index, dangling.kind, dangling.identifier
                ));
            }
        }

        msg
    }
}
