//! Command implementations for jobguard.
//!
//! This module provides the dispatcher that loads settings once and routes
//! CLI commands to their implementations.

mod clear;
mod log;
mod run;
mod status;

use crate::cli::{Cli, Command};
use jobguard::{JobIdentity, ProcessManager, Result, Settings};
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Settings are loaded exactly once here; a missing or invalid settings file
/// aborts before any lock or log file is touched.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let verbose = settings.verbose || cli.verbose;

    match cli.command {
        Command::Run(args) => run::cmd_run(&settings, verbose, args),
        Command::Status(args) => status::cmd_status(&settings, args),
        Command::Log(args) => log::cmd_log(&settings, verbose, args),
        Command::Clear(args) => clear::cmd_clear(&settings, verbose, args),
    }
}

/// Load settings from an explicit path, or discover them in the working directory.
fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path),
        None => Settings::discover(),
    }
}

/// Build the lifecycle manager for a job named on the command line.
fn manager_for(settings: &Settings, job: &str, verbose: bool) -> Result<ProcessManager> {
    let identity = JobIdentity::from_invocation(job);
    Ok(ProcessManager::from_settings(settings, identity)?.with_verbose(verbose))
}
