//! Exit code constants for the promptref CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed input documents)
//! - 2: Validation failure (uniqueness violations or dangling references)
//! - 3: Resolution failure (missing answers or dangling media)
//! - 4: I/O failure (writing outputs or the event log)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or malformed input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the validation report is not clean.
pub const VALIDATION_FAILURE: i32 = 2;

/// Resolution failure: the template could not be resolved for this run.
pub const RESOLUTION_FAILURE: i32 = 3;

/// I/O failure: an output file or the event log could not be written.
pub const IO_FAILURE: i32 = 4;
