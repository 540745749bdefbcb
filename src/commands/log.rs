//! Implementation of the `jobguard log` command.
//!
//! Lets shell-script jobs write to the same log the lock decisions go to.

use crate::cli::LogArgs;
use jobguard::{Result, Settings};

/// Execute the `jobguard log` command.
pub fn cmd_log(settings: &Settings, verbose: bool, args: LogArgs) -> Result<()> {
    let manager = super::manager_for(settings, &args.job, verbose)?;
    manager.log(args.message.join(" "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_settings;

    #[test]
    fn appends_joined_message() {
        let (_temp_dir, settings) = temp_settings();
        let args = LogArgs {
            job: "sync".to_string(),
            message: vec!["disk".to_string(), "nearly".to_string(), "full".to_string()],
        };

        cmd_log(&settings, false, args).unwrap();

        let log = std::fs::read_to_string(settings.process().unwrap().logpath.join("sync.log"))
            .unwrap();
        assert!(log.trim_end().ends_with("]: disk nearly full"));
    }
}
