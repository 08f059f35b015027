//! Run-time inputs to resolution.

use crate::catalog::{MediaCatalogEntry, StepCatalogEntry};
use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The value(s) selected for one step in a run.
///
/// Deserializes from either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl StepAnswer {
    /// Selected values in selection order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            StepAnswer::Single(value) => vec![value.as_str()],
            StepAnswer::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for StepAnswer {
    fn from(value: &str) -> Self {
        StepAnswer::Single(value.to_string())
    }
}

impl From<Vec<&str>> for StepAnswer {
    fn from(values: Vec<&str>) -> Self {
        StepAnswer::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Everything resolution needs from the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    /// Answers keyed by step name.
    pub step_answers: BTreeMap<String, StepAnswer>,
    /// Step definitions; option fragments and option media live here.
    pub steps: Vec<StepCatalogEntry>,
    /// Media the template may reference.
    pub media_catalog: Vec<MediaCatalogEntry>,
}

impl RunContext {
    pub fn new(media_catalog: Vec<MediaCatalogEntry>) -> Self {
        Self {
            media_catalog,
            ..Self::default()
        }
    }

    pub fn with_steps(mut self, steps: Vec<StepCatalogEntry>) -> Self {
        self.steps = steps;
        self
    }

    /// Record an answer for a step, replacing any previous one.
    pub fn answer(mut self, step_name: impl Into<String>, answer: impl Into<StepAnswer>) -> Self {
        self.step_answers.insert(step_name.into(), answer.into());
        self
    }
}

/// Answers document for one run, as read by the CLI.
///
/// ```yaml
/// answers:
///   name: Ava
///   pet: [cat, dog]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunAnswers {
    pub answers: BTreeMap<String, StepAnswer>,
}

impl RunAnswers {
    /// Load answers from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read answers file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse answers from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse answers YAML: {}", e)))
    }
}
