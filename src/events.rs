//! Audit log of template runs.
//!
//! When an events log is configured, every `validate`, `resolve` and
//! `compose` CLI run appends one event in NDJSON format (one JSON object per
//! line).
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (validate, resolve, compose)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `template`: Optional template path or id
//! - `outcome`: `ok` or `failed`
//! - `details`: Freeform object with action-specific details
//!
//! ```no_run
//! use promptref::events::{Event, EventAction, Outcome, append_event};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Resolve, Outcome::Ok)
//!     .with_template("prompts/hero.yaml")
//!     .with_details(json!({"attached_media": 2}));
//! append_event("events.ndjson", &event)?;
//! # Ok::<(), promptref::error::PromptError>(())
//! ```

use crate::error::{PromptError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Template checked against live catalogs
    Validate,
    /// Template resolved into a final prompt
    Resolve,
    /// Template text produced by an editing session
    Compose,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Validate => write!(f, "validate"),
            EventAction::Resolve => write!(f, "resolve"),
            EventAction::Compose => write!(f, "compose"),
        }
    }
}

/// Whether the logged run succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok,
    Failed,
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Template path or id, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    pub outcome: Outcome,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction, outcome: Outcome) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            template: None,
            outcome,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the template this event is about.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line with a trailing newline and syncs the file.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptError::Io(format!(
                "failed to create events directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PromptError::Io(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptError::Io(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        PromptError::Io(format!(
            "failed to sync events file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
