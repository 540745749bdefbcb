//! Settings struct definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "jobguard.yaml";

/// Settings loaded once at program start.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lock and log locations. Required; see [`Settings::validate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessSettings>,

    /// Echo job log entries to stdout.
    pub verbose: bool,
}

/// Directories used by the process lifecycle manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSettings {
    /// Directory holding `<job>.lock` files.
    pub lockpath: PathBuf,

    /// Directory holding `<job>.log` files.
    pub logpath: PathBuf,
}
