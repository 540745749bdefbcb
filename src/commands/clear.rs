//! Implementation of the `jobguard clear` command.
//!
//! Orphaned locks (left by a killed or crashed job) never expire; this is the
//! operator's way to remove one.

use crate::cli::ClearArgs;
use jobguard::{JobError, LockHolder, Result, Settings};

/// Execute the `jobguard clear` command.
pub fn cmd_clear(settings: &Settings, verbose: bool, args: ClearArgs) -> Result<()> {
    match clear_lock(settings, verbose, &args)? {
        Some(holder) => println!("Cleared lock for '{}' (held by {})", args.job, holder),
        None => println!("No lock held for '{}'", args.job),
    }
    Ok(())
}

fn clear_lock(settings: &Settings, verbose: bool, args: &ClearArgs) -> Result<Option<LockHolder>> {
    let manager = super::manager_for(settings, &args.job, verbose)?;

    if !args.force {
        return Err(JobError::UserError(format!(
            "refusing to clear lock '{}' without --force",
            manager.lock_path().display()
        )));
    }

    manager.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_settings;

    fn args(force: bool) -> ClearArgs {
        ClearArgs {
            job: "sync".to_string(),
            force,
        }
    }

    #[test]
    fn refuses_without_force() {
        let (_temp_dir, settings) = temp_settings();
        let lock_path = settings.process().unwrap().lockpath.join("sync.lock");
        std::fs::write(&lock_path, "77").unwrap();

        let err = clear_lock(&settings, false, &args(false)).unwrap_err();

        assert!(err.to_string().contains("--force"));
        assert!(lock_path.exists());
    }

    #[test]
    fn clears_orphaned_lock_with_force() {
        let (_temp_dir, settings) = temp_settings();
        let lock_path = settings.process().unwrap().lockpath.join("sync.lock");
        std::fs::write(&lock_path, "77").unwrap();

        let holder = clear_lock(&settings, false, &args(true)).unwrap();

        assert_eq!(holder.and_then(|h| h.pid()), Some(77));
        assert!(!lock_path.exists());
    }

    #[test]
    fn nothing_to_clear() {
        let (_temp_dir, settings) = temp_settings();
        assert_eq!(clear_lock(&settings, false, &args(true)).unwrap(), None);
    }
}
