//! Error types for jobguard.
//!
//! Uses thiserror for derive macros. Only configuration and CLI-level failures
//! are errors; lock contention and best-effort I/O are reported through return
//! values and the job log instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for jobguard operations.
#[derive(Error, Debug)]
pub enum JobError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Settings are missing or unusable; the manager cannot start.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The job lock could not be acquired.
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    /// The guarded job exited unsuccessfully.
    #[error("Job '{job}' failed: {reason}")]
    JobFailed { job: String, reason: String },
}

impl JobError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            JobError::UserError(_) => exit_codes::USER_ERROR,
            JobError::ConfigError(_) => exit_codes::USER_ERROR,
            JobError::LockError(_) => exit_codes::LOCK_FAILURE,
            JobError::JobFailed { .. } => exit_codes::JOB_FAILURE,
        }
    }
}

/// Result type alias for jobguard operations.
pub type Result<T> = std::result::Result<T, JobError>;
