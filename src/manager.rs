//! Process lifecycle manager.
//!
//! [`ProcessManager`] is the public face of jobguard: it resolves a job's lock
//! and log paths once, then serves lock, unlock, status, and log calls against
//! the [`LockStore`] and [`JobLogger`].
//!
//! Construct it explicitly at program start and keep it alive for the life of
//! the job. When it is dropped, any lock it still owns is released, so a job
//! that returns normally without calling [`ProcessManager::unlock`] leaves no
//! lock behind. Abrupt termination (a kill signal, `std::process::exit`,
//! power loss) skips that cleanup and leaves an orphaned lock for an operator
//! to clear.
//!
//! ```no_run
//! use jobguard::{JobIdentity, ProcessManager, Settings};
//!
//! let settings = Settings::discover()?;
//! let manager = ProcessManager::from_settings(&settings, JobIdentity::current())?;
//! let Some(_lock) = manager.acquire() else {
//!     return Ok(());
//! };
//! manager.log("exporting");
//! # Ok::<(), jobguard::JobError>(())
//! ```

use crate::config::{ProcessSettings, Settings};
use crate::error::Result;
use crate::identity::JobIdentity;
use crate::joblog::JobLogger;
use crate::locks::{Acquisition, JobLock, LockHolder, LockStore};
use std::fmt::Display;
use std::path::Path;

/// Logged when the job lock is already held.
pub const MSG_LOCKED: &str = "Process is locked";

/// Logged when this process obtains the job lock.
pub const MSG_OBTAINED: &str = "Lock obtained";

/// Logged when the lock file could not be created.
pub const MSG_FAILED: &str = "Failed to obtain file lock";

/// Lock, log, and release orchestration for one job.
#[derive(Debug)]
pub struct ProcessManager {
    identity: JobIdentity,
    store: LockStore,
    logger: JobLogger,
}

impl ProcessManager {
    /// Create a manager for `identity` using the given lock and log directories.
    pub fn new(process: &ProcessSettings, identity: JobIdentity) -> Self {
        let store = LockStore::new(process.lockpath.join(identity.lock_file_name()));
        let logger = JobLogger::new(process.logpath.join(identity.log_file_name()));

        Self {
            identity,
            store,
            logger,
        }
    }

    /// Create a manager from loaded settings, honouring their `verbose` flag.
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessManager)` - Paths resolved
    /// * `Err(JobError::ConfigError)` - The `process` section is missing
    pub fn from_settings(settings: &Settings, identity: JobIdentity) -> Result<Self> {
        let manager = Self::new(settings.process()?, identity).with_verbose(settings.verbose);
        Ok(manager)
    }

    /// Echo log entries to stdout.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.logger.set_verbose(verbose);
        self
    }

    /// The job this manager guards.
    pub fn identity(&self) -> &JobIdentity {
        &self.identity
    }

    /// Path to the job's lock file.
    pub fn lock_path(&self) -> &Path {
        self.store.path()
    }

    /// Path to the job's log file.
    pub fn log_path(&self) -> &Path {
        self.logger.path()
    }

    /// Try to take the job lock, logging the outcome.
    ///
    /// Returns `true` only if this call created the lock file. The lock stays
    /// held until [`ProcessManager::unlock`] or until the manager is dropped.
    pub fn lock(&self) -> bool {
        self.acquire_logged()
    }

    /// Try to take the job lock as a scoped guard.
    ///
    /// The returned [`JobLock`] releases the lock when it goes out of scope,
    /// including on early return and unwinding.
    pub fn acquire(&self) -> Option<JobLock<'_>> {
        self.acquire_logged().then(|| JobLock::new(&self.store))
    }

    fn acquire_logged(&self) -> bool {
        match self.store.acquire() {
            Acquisition::Obtained => {
                self.log(MSG_OBTAINED);
                true
            }
            Acquisition::AlreadyHeld => {
                self.log(MSG_LOCKED);
                false
            }
            Acquisition::Failed(_) => {
                self.log(MSG_FAILED);
                false
            }
        }
    }

    /// Release the job lock if this process owns it.
    pub fn unlock(&self) {
        self.store.release();
    }

    /// Identifier stored in the job's lock file, if any.
    pub fn who_locked(&self) -> Option<LockHolder> {
        self.store.current_holder()
    }

    /// Remove the job's lock file regardless of owner, logging the intervention.
    pub fn clear(&self) -> Result<Option<LockHolder>> {
        let cleared = self.store.force_clear()?;
        if let Some(holder) = &cleared {
            self.log(format_args!("Lock cleared by operator (held by {})", holder));
        }
        Ok(cleared)
    }

    /// Append a message to the job log.
    pub fn log(&self, message: impl Display) {
        self.logger.write(message);
    }
}

impl Drop for ProcessManager {
    fn drop(&mut self) {
        self.store.release();
    }
}
