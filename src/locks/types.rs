//! Lock outcome and holder types.

use serde::Serialize;
use std::fmt;
use std::io;

/// Outcome of a single exclusive-create attempt.
#[derive(Debug)]
pub enum Acquisition {
    /// This call created the lock file and wrote the owner PID.
    Obtained,
    /// A lock file already exists for the job.
    AlreadyHeld,
    /// The lock file could not be created or written.
    Failed(io::Error),
}

impl Acquisition {
    /// Whether the lock was obtained.
    pub fn is_obtained(&self) -> bool {
        matches!(self, Acquisition::Obtained)
    }
}

/// Identifier stored in a lock file.
///
/// Normally a decimal PID, but kept verbatim (trimmed) so a corrupt or
/// foreign lock file can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LockHolder(String);

impl LockHolder {
    /// Wrap raw lock file content, trimming surrounding whitespace.
    pub fn from_content(content: &str) -> Self {
        Self(content.trim().to_string())
    }

    /// The stored identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The stored identifier parsed as a PID, if it is one.
    pub fn pid(&self) -> Option<u32> {
        self.0.parse().ok()
    }

    /// Whether the lock is held by the given PID.
    pub fn is_pid(&self, pid: u32) -> bool {
        self.pid() == Some(pid)
    }
}

impl fmt::Display for LockHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
