//! Job identity resolution.
//!
//! A job is named after the script or executable that runs it: directory
//! components are dropped, a known script extension is stripped, and the rest
//! is lower-cased. The name namespaces both the lock file and the log file, so
//! distinct jobs sharing a lock directory never collide.

use std::fmt;

/// Script and executable extensions stripped from invocation paths.
pub const KNOWN_EXTENSIONS: &[&str] = &["php", "sh", "bash", "py", "pl", "rb", "exe"];

/// Name used when an invocation path normalizes to nothing.
pub const FALLBACK_JOB_NAME: &str = "job";

/// Normalized name of a recurring batch job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobIdentity(String);

impl JobIdentity {
    /// Resolve the identity of the running process from its invocation path.
    pub fn current() -> Self {
        let invoked = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_invocation(&invoked)
    }

    /// Derive a job identity from an invocation path.
    ///
    /// Never fails: degenerate input yields a best-effort name.
    pub fn from_invocation(path: &str) -> Self {
        let base = path
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or("");

        let stem = match base.rsplit_once('.') {
            Some((stem, ext))
                if !stem.is_empty()
                    && KNOWN_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext)) =>
            {
                stem
            }
            _ => base,
        };

        let name = stem.trim().to_lowercase();
        if name.is_empty() {
            Self(FALLBACK_JOB_NAME.to_string())
        } else {
            Self(name)
        }
    }

    /// The normalized job name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this job's lock token.
    pub fn lock_file_name(&self) -> String {
        format!("{}.lock", self.0)
    }

    /// File name of this job's log.
    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.0)
    }
}

impl fmt::Display for JobIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
