//! RAII lock guard implementation.

use super::store::LockStore;
use std::path::Path;

/// RAII guard for an acquired job lock.
///
/// When dropped, the lock is released through the store's ownership check.
/// If the lock file is still ours after the release attempt, a warning is
/// printed but no panic occurs.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct JobLock<'a> {
    /// Store that acquired the lock.
    store: &'a LockStore,

    /// Whether the lock has been released manually.
    released: bool,
}

impl<'a> JobLock<'a> {
    /// Wrap a lock the store has just obtained.
    pub(crate) fn new(store: &'a LockStore) -> Self {
        Self {
            store,
            released: false,
        }
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// PID recorded as the lock owner.
    pub fn owner(&self) -> u32 {
        self.store.owner()
    }

    /// Manually release the lock before the guard goes out of scope.
    ///
    /// Returns whether the lock file was removed.
    pub fn release(mut self) -> bool {
        self.released = true;
        self.store.release()
    }
}

impl Drop for JobLock<'_> {
    fn drop(&mut self) {
        if !self.released && !self.store.release() && self.store.is_held_by_owner() {
            eprintln!(
                "Warning: failed to release lock '{}'",
                self.store.path().display()
            );
        }
    }
}
