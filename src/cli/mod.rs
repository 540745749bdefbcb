//! CLI argument parsing for jobguard.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jobguard: run batch jobs as single instances.
///
/// Each job is guarded by a lock file named after it:
/// - Only one process per job name can hold the lock at a time
/// - A lock is only released by the process that created it
/// - Every lock decision is appended to the job's log file
#[derive(Parser, Debug)]
#[command(name = "jobguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (default: ./jobguard.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Echo job log entries to stdout.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for jobguard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a program while holding its job lock.
    ///
    /// Fails fast (exit code 4) if another instance holds the lock.
    /// The lock is released when the program exits.
    Run(RunArgs),

    /// Show which process holds a job lock.
    Status(StatusArgs),

    /// Append a message to a job log.
    Log(LogArgs),

    /// Remove an orphaned job lock.
    ///
    /// Locks left by crashed processes never expire on their own.
    /// Requires --force to prevent accidental clearing.
    Clear(ClearArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Job name (default: derived from the program path).
    #[arg(long)]
    pub job: Option<String>,

    /// Program to run, followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Job name or script path.
    pub job: String,

    /// Print the status as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log` command.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Job name or script path.
    pub job: String,

    /// Message to append.
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Arguments for the `clear` command.
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Job name or script path.
    pub job: String,

    /// Force clearing the lock (required for safety).
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
