//! Exit code constants for the jobguard CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing or invalid configuration)
//! - 3: The guarded job ran but exited unsuccessfully
//! - 4: Lock acquisition failure (another instance holds the job lock)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unusable configuration.
pub const USER_ERROR: i32 = 1;

/// The guarded job failed or could not be started.
pub const JOB_FAILURE: i32 = 3;

/// Lock acquisition failure: the job lock is held or could not be created.
pub const LOCK_FAILURE: i32 = 4;
