//! Resolution outputs and failures.

use crate::catalog::MediaCatalogEntry;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The final prompt handed to the generation client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPrompt {
    pub text: String,
    /// Attached reference media, first-occurrence order, no duplicate ids.
    pub attached_media: Vec<MediaCatalogEntry>,
}

/// A single segment that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ResolutionError {
    /// The referenced step has not been answered in this run.
    #[error("segment {segment_index}: step '{step_name}' has no answer in this run")]
    MissingAnswer {
        segment_index: usize,
        step_name: String,
    },
    /// The referenced media id is not in the run's media catalog.
    #[error("segment {segment_index}: media '{media_id}' is not in the media catalog")]
    DanglingMediaReference {
        segment_index: usize,
        media_id: String,
    },
}

impl ResolutionError {
    pub fn segment_index(&self) -> usize {
        match self {
            ResolutionError::MissingAnswer { segment_index, .. }
            | ResolutionError::DanglingMediaReference { segment_index, .. } => *segment_index,
        }
    }
}

/// Every failure of one resolution attempt, in segment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolutionErrors(Vec<ResolutionError>);

impl ResolutionErrors {
    pub fn new(errors: Vec<ResolutionError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ResolutionError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResolutionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolutionErrors {}

impl IntoIterator for ResolutionErrors {
    type Item = ResolutionError;
    type IntoIter = std::vec::IntoIter<ResolutionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
