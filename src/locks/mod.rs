//! Lock store for single-instance jobs.
//!
//! Each job owns at most one lock token file, `<lockpath>/<job>.lock`, whose
//! existence *is* the lock and whose content is the decimal PID of the owner.
//!
//! # Acquisition
//!
//! Lock files are created with **create_new** semantics (exclusive create), so
//! of any number of racing processes exactly one succeeds. There is no
//! separate existence check before the create.
//!
//! # Release
//!
//! A lock is only ever deleted by its owner: release reads the stored PID and
//! removes the file only when it matches. Releasing an absent or foreign lock
//! is a silent no-op. Orphaned locks left by crashed processes never expire;
//! they are removed by operator intervention through [`LockStore::force_clear`].
//!
//! # RAII Guards
//!
//! [`JobLock`] releases its lock when dropped, on every exit path including
//! unwinding. If deletion fails during drop, a warning is printed but the
//! program does not crash.

mod guard;
mod store;
mod types;


// Re-export public API
pub use guard::JobLock;
pub use store::LockStore;
pub use types::{Acquisition, LockHolder};
