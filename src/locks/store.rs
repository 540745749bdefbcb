//! Lock file creation, ownership-checked release, and introspection.

use super::types::{Acquisition, LockHolder};
use crate::error::{JobError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Manages the lock token file of a single job.
///
/// The store acts on behalf of one owner PID, normally the current process.
/// No other component reads, writes, or deletes the lock path.
#[derive(Debug, Clone)]
pub struct LockStore {
    /// Path to the lock file.
    path: PathBuf,

    /// PID written on acquire and required on release.
    owner: u32,
}

impl LockStore {
    /// Create a store for the given lock path, owned by the current process.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_owner(path, std::process::id())
    }

    /// Create a store acting on behalf of an explicit owner PID.
    pub fn with_owner(path: impl Into<PathBuf>, owner: u32) -> Self {
        Self {
            path: path.into(),
            owner,
        }
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PID this store acquires and releases as.
    pub fn owner(&self) -> u32 {
        self.owner
    }

    /// Attempt to create the lock file exclusively and write the owner PID.
    ///
    /// The create is a single `create_new` open; an existing file, whatever
    /// its content, means the lock is held. If writing the PID fails after the
    /// file was created, the partial file is removed again.
    pub fn acquire(&self) -> Acquisition {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Acquisition::AlreadyHeld,
            Err(e) => return Acquisition::Failed(e),
        };

        let written = file
            .write_all(self.owner.to_string().as_bytes())
            .and_then(|()| file.sync_all());

        if let Err(e) = written {
            // We created it, so we may remove it
            let _ = fs::remove_file(&self.path);
            return Acquisition::Failed(e);
        }

        Acquisition::Obtained
    }

    /// Attempt to acquire the lock, reporting only whether this call won.
    pub fn try_acquire(&self) -> bool {
        self.acquire().is_obtained()
    }

    /// Remove the lock file if, and only if, it is owned by this store's PID.
    ///
    /// Absent or foreign locks are left alone. Deletion failures are
    /// swallowed. Returns whether the file was removed by this call.
    pub fn release(&self) -> bool {
        match self.current_holder() {
            Some(holder) if holder.is_pid(self.owner) => fs::remove_file(&self.path).is_ok(),
            _ => false,
        }
    }

    /// Read the identifier stored in the lock file without modifying it.
    ///
    /// Returns `None` when there is no readable lock file.
    pub fn current_holder(&self) -> Option<LockHolder> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|content| LockHolder::from_content(&content))
    }

    /// Whether the lock file currently names this store's PID.
    pub fn is_held_by_owner(&self) -> bool {
        self.current_holder()
            .is_some_and(|holder| holder.is_pid(self.owner))
    }

    /// Remove the lock file regardless of its owner.
    ///
    /// This is operator intervention for locks orphaned by a crashed process;
    /// nothing in the normal lifecycle calls it.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(holder))` - The lock was removed; `holder` is who held it
    /// * `Ok(None)` - There was no lock to remove
    /// * `Err(JobError::UserError)` - The lock file exists but could not be removed
    pub fn force_clear(&self) -> Result<Option<LockHolder>> {
        let holder = self.current_holder();

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(Some(holder.unwrap_or_else(|| LockHolder::from_content("")))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JobError::UserError(format!(
                "failed to clear lock '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }
}
