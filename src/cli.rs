//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! CLI flags override config values (which are loaded from XML if
//! present). `--debug` is a shorthand for `--log-level debug`.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Build and publish a bulk-load manifest for staged objects, run the load, then relocate the sources"
)]
pub struct Args {
    /// Container holding the staged source objects.
    #[arg(long, help = "Container holding the staged source objects")]
    pub container: Option<String>,

    /// Key prefix to enumerate.
    #[arg(long, help = "Key prefix to enumerate (must not overlap the done prefix)")]
    pub prefix: Option<String>,

    /// Root directory of the filesystem-backed store.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Root directory of the filesystem-backed store")]
    pub store_root: Option<PathBuf>,

    /// Container the manifest is published into (defaults to --container).
    #[arg(long, help = "Container the manifest is published into (defaults to --container)")]
    pub manifest_container: Option<String>,

    /// Destination key for the published manifest.
    #[arg(long, help = "Destination key for the published manifest")]
    pub manifest_key: Option<String>,

    /// Key prefix relocated objects are moved under.
    #[arg(long, help = "Key prefix relocated objects are moved under")]
    pub done_prefix: Option<String>,

    /// Mark every manifest entry mandatory.
    #[arg(long, help = "Mark every manifest entry mandatory")]
    pub mandatory: bool,

    /// Public key identifier copied onto every entry.
    #[arg(long = "publickey", help = "Public key identifier copied onto every entry")]
    pub public_key: Option<String>,

    /// Username copied onto every entry.
    #[arg(long, help = "Username copied onto every entry")]
    pub username: Option<String>,

    /// Per-object ingest command template; {key} and {size} are substituted.
    #[arg(long, help = "Per-object ingest command template ({key} and {size} substituted)")]
    pub command_template: Option<String>,

    /// Bulk-load command; {manifest} is replaced with the manifest URL.
    #[arg(long, help = "Bulk-load command ({manifest} replaced with the manifest URL)")]
    pub load_command: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where manifest_move will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by manifest_move and exit")]
    pub print_config: bool,

    /// Dry-run: build and report the manifest, but publish/load/relocate nothing.
    #[arg(long, help = "Show what would be done, but do not publish, load or relocate")]
    pub dry_run: bool,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset
    /// flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(container) = &self.container {
            cfg.container = container.clone();
        }
        if let Some(prefix) = &self.prefix {
            cfg.prefix = prefix.clone();
        }
        if let Some(root) = &self.store_root {
            cfg.store_root = root.clone();
        }
        if let Some(mc) = &self.manifest_container {
            cfg.manifest_container = Some(mc.clone());
        }
        if let Some(key) = &self.manifest_key {
            cfg.manifest_key = key.clone();
        }
        if let Some(done) = &self.done_prefix {
            cfg.done_prefix = done.clone();
        }
        if self.mandatory {
            cfg.mandatory = true;
        }
        if let Some(pk) = &self.public_key {
            cfg.public_key = Some(pk.clone());
        }
        if let Some(user) = &self.username {
            cfg.username = Some(user.clone());
        }
        if let Some(tpl) = &self.command_template {
            cfg.command_template = Some(tpl.clone());
        }
        if let Some(cmd) = &self.load_command {
            cfg.load_command = Some(cmd.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
