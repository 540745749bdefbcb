//! Settings for jobguard.
//!
//! This module defines the Settings struct that represents `jobguard.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored)
//! and validation of the `process` section the lifecycle manager requires.

mod model;
mod operations;


// Re-export public API
pub use model::{DEFAULT_SETTINGS_FILE, ProcessSettings, Settings};
