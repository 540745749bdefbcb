//! Implementation of the `jobguard status` command.
//!
//! Reports which process, if any, holds a job lock. Purely diagnostic: the
//! lock file is read, never modified.

use crate::cli::StatusArgs;
use jobguard::{JobError, LockHolder, Result, Settings};
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable lock status.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub job: String,
    pub lock_path: PathBuf,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<LockHolder>,
}

/// Execute the `jobguard status` command.
pub fn cmd_status(settings: &Settings, args: StatusArgs) -> Result<()> {
    let report = build_report(settings, &args.job)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            JobError::UserError(format!("failed to serialize status to JSON: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    match &report.holder {
        Some(holder) => println!("{}: locked by {}", report.job, holder),
        None => println!("{}: unlocked", report.job),
    }
    println!("Lock file: {}", report.lock_path.display());

    Ok(())
}

fn build_report(settings: &Settings, job: &str) -> Result<StatusReport> {
    let manager = super::manager_for(settings, job, false)?;
    let holder = manager.who_locked();

    Ok(StatusReport {
        job: manager.identity().to_string(),
        lock_path: manager.lock_path().to_path_buf(),
        locked: holder.is_some(),
        holder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_settings;

    #[test]
    fn report_for_unlocked_job() {
        let (_temp_dir, settings) = temp_settings();

        let report = build_report(&settings, "sync").unwrap();

        assert_eq!(report.job, "sync");
        assert!(!report.locked);
        assert!(report.holder.is_none());
    }

    #[test]
    fn report_names_holder_without_touching_lock() {
        let (_temp_dir, settings) = temp_settings();
        let lock_path = settings.process().unwrap().lockpath.join("sync.lock");
        std::fs::write(&lock_path, "5150\n").unwrap();

        let report = build_report(&settings, "sync").unwrap();

        assert!(report.locked);
        assert_eq!(report.holder.as_ref().and_then(|h| h.pid()), Some(5150));
        assert_eq!(std::fs::read_to_string(&lock_path).unwrap(), "5150\n");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["holder"], "5150");
        assert_eq!(json["locked"], true);
    }
}
