//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::relocate::DONE_PREFIX_DEFAULT;

use super::{paths, MANIFEST_KEY_DEFAULT, PREFIX_DEFAULT, STORE_ROOT_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one load-and-relocate run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the filesystem-backed store
    pub store_root: PathBuf,
    /// Container holding the staged source objects
    pub container: String,
    /// Key prefix to enumerate
    pub prefix: String,
    /// Container the manifest is published into (source container if unset)
    pub manifest_container: Option<String>,
    /// Destination key for the published manifest
    pub manifest_key: String,
    /// Key prefix relocated objects are moved under
    pub done_prefix: String,
    /// Mark every manifest entry mandatory
    pub mandatory: bool,
    /// Public key identifier copied onto every entry
    pub public_key: Option<String>,
    /// Username copied onto every entry
    pub username: Option<String>,
    /// Per-object command template ({key} and {size} placeholders)
    pub command_template: Option<String>,
    /// Bulk-load command ({manifest} placeholder); required unless dry-run
    pub load_command: Option<String>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, build and report but do not publish, load or relocate
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(STORE_ROOT_DEFAULT),
            container: String::new(),
            prefix: PREFIX_DEFAULT.to_string(),
            manifest_container: None,
            manifest_key: MANIFEST_KEY_DEFAULT.to_string(),
            done_prefix: DONE_PREFIX_DEFAULT.to_string(),
            mandatory: false,
            public_key: None,
            username: None,
            command_template: None,
            load_command: None,
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Container the manifest is published into.
    pub fn effective_manifest_container(&self) -> &str {
        self.manifest_container.as_deref().unwrap_or(&self.container)
    }
}
