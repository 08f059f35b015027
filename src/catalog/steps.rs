//! Step catalog entries supplied by the workflow editor.

use super::media::MediaCatalogEntry;
use crate::error::{PromptError, Result};
use crate::segment::is_identifier;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a step collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Exactly one option is chosen.
    #[default]
    SingleSelect,
    /// Any number of options may be chosen, in order.
    MultiSelect,
    /// Free text; the answer is used as-is.
    FreeText,
}

impl StepType {
    /// Whether more than one value may be selected.
    pub fn allows_multiple(self) -> bool {
        matches!(self, StepType::MultiSelect)
    }
}

/// One selectable option of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOption {
    /// The answer value recorded when this option is selected.
    pub value: String,
    /// Text substituted for the step token when this option is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_fragment: Option<String>,
    /// Reference image attached to the output when this option is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_media: Option<MediaCatalogEntry>,
}

impl StepOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            prompt_fragment: None,
            prompt_media: None,
        }
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.prompt_fragment = Some(fragment.into());
        self
    }

    pub fn with_media(mut self, media: MediaCatalogEntry) -> Self {
        self.prompt_media = Some(media);
        self
    }

    /// The fragment to substitute, treating an empty string as unset.
    pub fn fragment(&self) -> Option<&str> {
        self.prompt_fragment.as_deref().filter(|f| !f.is_empty())
    }
}

/// A workflow step that templates may reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCatalogEntry {
    /// Unique name within the workflow; used in `@{step:<step_name>}` tokens.
    pub step_name: String,
    #[serde(default)]
    pub step_type: StepType,
    #[serde(default)]
    pub options: Vec<StepOption>,
}

impl StepCatalogEntry {
    pub fn new(step_name: impl Into<String>, step_type: StepType) -> Self {
        Self {
            step_name: step_name.into(),
            step_type,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: StepOption) -> Self {
        self.options.push(option);
        self
    }

    /// Find the option definition for a selected value.
    pub fn option(&self, value: &str) -> Option<&StepOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Look up a step by name.
pub fn find_step<'a>(steps: &'a [StepCatalogEntry], step_name: &str) -> Option<&'a StepCatalogEntry> {
    steps.iter().find(|step| step.step_name == step_name)
}

/// A workflow document: the step catalog as the workflow editor exports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub steps: Vec<StepCatalogEntry>,
}

impl Workflow {
    /// Load a workflow from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read workflow file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a workflow from a YAML string.
    ///
    /// Step names must be valid token identifiers, otherwise mentions of
    /// them could not be written back as canonical text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let workflow: Workflow = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse workflow YAML: {}", e)))?;

        workflow.validate()?;
        Ok(workflow)
    }

    /// Reject step names outside the identifier charset.
    pub fn validate(&self) -> Result<()> {
        if let Some(step) = self
            .steps
            .iter()
            .find(|step| !is_identifier(&step.step_name))
        {
            return Err(PromptError::UserError(format!(
                "workflow step name '{}' is not a valid identifier (allowed: A-Z a-z 0-9 _ -)",
                step.step_name
            )));
        }
        Ok(())
    }
}
