//! Implementation of the `jobguard run` command.
//!
//! Runs a program as the single instance of its job: the job lock is taken
//! before the program starts and released when it exits, whatever the
//! outcome. If another instance holds the lock the program is not started.

use crate::cli::RunArgs;
use jobguard::{JobError, JobIdentity, ProcessManager, Result, RunTimer, Settings, job_log};
use std::process::Command;

/// Execute the `jobguard run` command.
pub fn cmd_run(settings: &Settings, verbose: bool, args: RunArgs) -> Result<()> {
    let (program, program_args) = args
        .command
        .split_first()
        .ok_or_else(|| JobError::UserError("no program given to run".to_string()))?;

    let identity = JobIdentity::from_invocation(args.job.as_deref().unwrap_or(program));
    let manager = ProcessManager::from_settings(settings, identity)?.with_verbose(verbose);

    let Some(lock) = manager.acquire() else {
        return Err(lock_refused(&manager));
    };

    let timer = RunTimer::start();
    job_log!(manager, "Running: {}", shell_words::join(&args.command));

    let outcome = match Command::new(program).args(program_args).status() {
        Ok(status) if status.success() => {
            job_log!(manager, "Job finished: {}", status);
            Ok(())
        }
        Ok(status) => {
            job_log!(manager, "Job failed: {}", status);
            Err(JobError::JobFailed {
                job: manager.identity().to_string(),
                reason: status.to_string(),
            })
        }
        Err(e) => {
            job_log!(manager, "Failed to start '{}': {}", program, e);
            Err(JobError::JobFailed {
                job: manager.identity().to_string(),
                reason: format!("failed to start '{}': {}", program, e),
            })
        }
    };

    manager.log(timer.report());
    lock.release();

    outcome
}

/// Describe why the lock was not obtained.
fn lock_refused(manager: &ProcessManager) -> JobError {
    match manager.who_locked() {
        Some(holder) => JobError::LockError(format!(
            "job '{}' is already running (held by {})",
            manager.identity(),
            holder
        )),
        None => JobError::LockError(format!(
            "could not create lock file '{}'",
            manager.lock_path().display()
        )),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_settings;
    use jobguard::exit_codes;

    fn run_args(job: &str, command: &[&str]) -> RunArgs {
        RunArgs {
            job: Some(job.to_string()),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn log_of(settings: &Settings, job: &str) -> String {
        std::fs::read_to_string(settings.process().unwrap().logpath.join(format!("{}.log", job)))
            .unwrap()
    }

    #[test]
    fn successful_program_releases_lock() {
        let (_temp_dir, settings) = temp_settings();

        cmd_run(&settings, false, run_args("sync", &["true"])).unwrap();

        assert!(!settings.process().unwrap().lockpath.join("sync.lock").exists());
        let log = log_of(&settings, "sync");
        assert!(log.contains("]: Lock obtained"));
        assert!(log.contains("]: Running: true"));
        assert!(log.contains("]: Completed in "));
    }

    #[test]
    fn failing_program_is_reported_and_lock_released() {
        let (_temp_dir, settings) = temp_settings();

        let err = cmd_run(&settings, false, run_args("sync", &["false"])).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::JOB_FAILURE);
        assert!(!settings.process().unwrap().lockpath.join("sync.lock").exists());
        assert!(log_of(&settings, "sync").contains("]: Job failed: "));
    }

    #[test]
    fn missing_program_is_reported() {
        let (_temp_dir, settings) = temp_settings();

        let err = cmd_run(
            &settings,
            false,
            run_args("sync", &["/nonexistent/jobguard-test-program"]),
        )
        .unwrap_err();

        assert!(err.to_string().contains("failed to start"));
        assert!(!settings.process().unwrap().lockpath.join("sync.lock").exists());
    }

    #[test]
    fn held_lock_prevents_start() {
        let (temp_dir, settings) = temp_settings();
        let lock_path = settings.process().unwrap().lockpath.join("sync.lock");
        std::fs::write(&lock_path, "1").unwrap();
        let marker = temp_dir.path().join("ran");

        let err = cmd_run(
            &settings,
            false,
            run_args("sync", &["touch", marker.to_str().unwrap()]),
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::LOCK_FAILURE);
        assert!(err.to_string().contains("held by 1"));
        assert!(!marker.exists());
        assert_eq!(std::fs::read_to_string(&lock_path).unwrap(), "1");
        assert!(log_of(&settings, "sync").contains("]: Process is locked"));
    }

    #[test]
    fn job_name_defaults_to_program_identity() {
        let (_temp_dir, settings) = temp_settings();
        let args = RunArgs {
            job: None,
            command: vec!["true".to_string()],
        };

        cmd_run(&settings, false, args).unwrap();

        assert!(log_of(&settings, "true").contains("]: Lock obtained"));
    }
}
