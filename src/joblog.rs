//! Job log side-channel.
//!
//! Every job appends to its own plain-text log, `<logpath>/<job>.log`, one
//! entry per line:
//!
//! ```text
//! 2026-10-18 02:00:01[48213]: Lock obtained
//! ```
//!
//! Entries are formatted and written immediately; nothing is buffered in
//! memory. Writing is best-effort: a missing directory or full disk never
//! reaches the caller, since logging is secondary to the job itself.
//!
//! Concurrent processes of the same job share the file. Each entry is emitted
//! with a single append write, so interleaving is left to the platform's
//! append semantics.

use chrono::{DateTime, Local};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Timestamp layout of log entries (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a single log entry, including the trailing newline.
pub fn format_entry(ts: &DateTime<Local>, pid: u32, message: impl Display) -> String {
    format!("{}[{}]: {}\n", ts.format(TIMESTAMP_FORMAT), pid, message)
}

/// Appends PID-tagged entries to a job log file.
#[derive(Debug, Clone)]
pub struct JobLogger {
    /// Path to the log file.
    path: PathBuf,

    /// PID tagged on every entry.
    pid: u32,

    /// Whether entries are also echoed to stdout.
    verbose: bool,
}

impl JobLogger {
    /// Create a logger for the given log path, tagging entries with the current PID.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pid: std::process::id(),
            verbose: false,
        }
    }

    /// Echo entries to stdout as well as the log file.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the stdout echo flag in place.
    pub(crate) fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether entries are echoed to stdout.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Append a message to the log, stamped with the current local time.
    pub fn write(&self, message: impl Display) {
        let entry = format_entry(&Local::now(), self.pid, message);

        // Best-effort; failures are intentionally dropped
        let _ = self.append(&entry);

        // A closed or broken stdout must not panic the job
        if self.verbose {
            let _ = io::stdout().lock().write_all(entry.as_bytes());
        }
    }

    /// Alias of [`JobLogger::write`] so the logger works with [`job_log!`].
    pub fn log(&self, message: impl Display) {
        self.write(message);
    }

    fn append(&self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

/// Log a formatted message to a job log.
///
/// Takes a [`ProcessManager`](crate::manager::ProcessManager) or a
/// [`JobLogger`], then a format template and its arguments:
///
/// ```no_run
/// # use jobguard::{job_log, ProcessManager};
/// # fn demo(manager: &ProcessManager, rows: usize) {
/// job_log!(manager, "exported {} rows", rows);
/// # }
/// ```
#[macro_export]
macro_rules! job_log {
    ($target:expr, $($arg:tt)+) => {
        $target.log(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_format_entry_layout() {
        let ts = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap();
        let entry = format_entry(&ts, 4321, "Lock obtained");
        assert_eq!(entry, "2026-03-07 09:05:02[4321]: Lock obtained\n");
    }

    #[test]
    fn test_write_appends_tagged_lines_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nightly-export.log");
        let logger = JobLogger::new(&log_path);

        for i in 0..5 {
            logger.write(format!("step {}", i));
        }

        let lines = read_lines(&log_path);
        assert_eq!(lines.len(), 5);
        let tag = format!("[{}]: ", std::process::id());
        for (i, line) in lines.iter().enumerate() {
            assert!(line.contains(&tag), "missing pid tag: {}", line);
            assert!(line.ends_with(&format!("step {}", i)));
        }
    }

    #[test]
    fn test_write_appends_to_existing_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("job.log");
        std::fs::write(&log_path, "earlier entry\n").unwrap();

        JobLogger::new(&log_path).write("later entry");

        let lines = read_lines(&log_path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "earlier entry");
        assert!(lines[1].ends_with("later entry"));
    }

    #[test]
    fn test_write_to_missing_directory_is_swallowed() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("missing").join("job.log");

        JobLogger::new(&log_path).with_verbose(true).write("nobody hears this");

        assert!(!log_path.exists());
    }

    #[test]
    fn test_job_log_macro_formats_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("job.log");
        let logger = JobLogger::new(&log_path);

        crate::job_log!(logger, "exported {} rows to {}", 42, "s3");

        let lines = read_lines(&log_path);
        assert!(lines[0].ends_with("]: exported 42 rows to s3"));
    }

    #[test]
    fn test_verbose_flag() {
        let logger = JobLogger::new("job.log");
        assert!(!logger.is_verbose());
        assert!(logger.with_verbose(true).is_verbose());
    }

    #[test]
    fn test_set_verbose_in_place() {
        let mut logger = JobLogger::new("job.log");
        logger.set_verbose(true);
        assert!(logger.is_verbose());
        logger.set_verbose(false);
        assert!(!logger.is_verbose());
    }

    #[test]
    fn test_verbose_write_still_appends() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("job.log");

        JobLogger::new(&log_path).with_verbose(true).write("echoed");

        assert!(read_lines(&log_path)[0].ends_with("]: echoed"));
    }
}
