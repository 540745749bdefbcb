//! Jobguard: single-instance lock and log manager for batch jobs.
//!
//! A job takes an exclusive lock file named after itself before doing any
//! work, so at most one instance runs per host. Only the process that created
//! a lock ever removes it, and every lock decision is appended to the job's
//! log file.
//!
//! The entry point is [`ProcessManager`], built once at program start from
//! [`Settings`] and a [`JobIdentity`].

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod identity;
pub mod joblog;
pub mod locks;
pub mod manager;
pub mod timer;

#[cfg(test)]
mod test_support;

pub use config::{ProcessSettings, Settings};
pub use error::{JobError, Result};
pub use identity::JobIdentity;
pub use joblog::JobLogger;
pub use locks::{Acquisition, JobLock, LockHolder, LockStore};
pub use manager::ProcessManager;
pub use timer::RunTimer;
