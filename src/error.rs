//! Error types for promptref.
//!
//! Uses thiserror for derive macros. Parsing and serialization never fail;
//! everything that can go wrong at the crate boundary funnels into
//! [`PromptError`], which also knows the CLI exit code for each case.

use crate::exit_codes;
use crate::resolve::ResolutionErrors;
use thiserror::Error;

/// Main error type for promptref operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Invalid arguments, config, or input documents.
    #[error("{0}")]
    UserError(String),

    /// The validation report contained uniqueness violations or dangling references.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Resolution aborted; carries every failing segment.
    #[error("Resolution failed:\n{0}")]
    ResolutionError(#[from] ResolutionErrors),

    /// Writing an output or the event log failed.
    #[error("I/O failed: {0}")]
    Io(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::ResolutionError(_) => exit_codes::RESOLUTION_FAILURE,
            PromptError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptref operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolutionError;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = PromptError::ValidationError("duplicate display name".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn resolution_error_converts_and_keeps_exit_code() {
        let errors = ResolutionErrors::new(vec![ResolutionError::MissingAnswer {
            segment_index: 1,
            step_name: "name".to_string(),
        }]);
        let err: PromptError = errors.into();
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert!(err.to_string().contains("step 'name'"));
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PromptError::Io("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert_eq!(err.to_string(), "I/O failed: disk full");
    }
}
