//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for promptref.
///
/// This struct represents the contents of `promptref.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Resolution settings
    // =========================================================================
    /// Join string between the pieces of a multi-select answer.
    #[serde(default = "default_multi_select_separator")]
    pub multi_select_separator: String,

    // =========================================================================
    // Editor settings
    // =========================================================================
    /// Whether a completed mention insertion appends one space.
    #[serde(default = "default_true")]
    pub insert_trailing_space: bool,

    /// Optional cap on the candidate list length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<usize>,

    // =========================================================================
    // Audit settings
    // =========================================================================
    /// Path of the NDJSON event log. Unset disables event logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            multi_select_separator: default_multi_select_separator(),
            insert_trailing_space: default_true(),
            max_candidates: None,
            events_log: None,
        }
    }
}
