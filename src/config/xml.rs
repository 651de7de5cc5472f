//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless MANIFEST_MOVE_CONFIG
//!   is set).
//!
//! Notes:
//! - This module only reads/writes the config file; semantic validation
//!   happens in `validate`.
//! - Unknown XML fields fail the load (serde deny_unknown_fields) so
//!   misconfigurations surface early instead of being silently ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{CONFIG_ENV, MANIFEST_KEY_DEFAULT, PREFIX_DEFAULT, STORE_ROOT_DEFAULT};
use crate::relocate::DONE_PREFIX_DEFAULT;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    store_root: Option<String>,
    container: Option<String>,
    prefix: Option<String>,
    manifest_container: Option<String>,
    manifest_key: Option<String>,
    done_prefix: Option<String>,
    mandatory: Option<bool>,
    publickey: Option<String>,
    username: Option<String>,
    command_template: Option<String>,
    load_command: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// Map XmlConfig onto defaults; unset fields keep their default values.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(root) = trimmed(parsed.store_root) {
        cfg.store_root = PathBuf::from(root);
    }
    if let Some(container) = trimmed(parsed.container) {
        cfg.container = container;
    }
    if let Some(prefix) = trimmed(parsed.prefix) {
        cfg.prefix = prefix;
    }
    cfg.manifest_container = trimmed(parsed.manifest_container);
    if let Some(key) = trimmed(parsed.manifest_key) {
        cfg.manifest_key = key;
    }
    if let Some(done) = trimmed(parsed.done_prefix) {
        cfg.done_prefix = done;
    }
    if let Some(mandatory) = parsed.mandatory {
        cfg.mandatory = mandatory;
    }
    cfg.public_key = trimmed(parsed.publickey);
    cfg.username = trimmed(parsed.username);
    cfg.command_template = trimmed(parsed.command_template);
    cfg.load_command = trimmed(parsed.load_command);
    if let Some(level) = trimmed(parsed.log_level).and_then(|s| LogLevel::parse(&s)) {
        cfg.log_level = level;
    }
    if let Some(file) = trimmed(parsed.log_file) {
        cfg.log_file = Some(PathBuf::from(file));
    }

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the config from `$MANIFEST_MOVE_CONFIG` or the default location.
/// Returns Ok(None) when no config file exists yet; a file that exists but
/// fails to parse is an error, not a silent fallback to defaults.
pub fn load_config() -> Result<Option<Config>> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}

/// Create the template config file and parent directory.
/// Refuses when an ancestor of the target is a symlink.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/manifest_move.log".into());

    let content = format!(
        "<!--\n  manifest_move configuration (XML)\n\n  Fields:\n    store_root         -> root directory of the filesystem-backed object store\n    container          -> container (directory under store_root) holding staged objects\n    prefix             -> key prefix to enumerate; must not overlap done_prefix\n    manifest_container -> container the manifest is published into (defaults to container)\n    manifest_key       -> destination key for the published manifest\n    done_prefix        -> prefix relocated objects are moved under\n    mandatory          -> true/false; mark every manifest entry mandatory\n    publickey          -> public key identifier copied onto every entry (optional)\n    username           -> username copied onto every entry (optional)\n    command_template   -> per-object ingest command; {{key}} and {{size}} are substituted\n    load_command       -> bulk-load command; {{manifest}} is replaced with the manifest URL\n    log_level          -> quiet | normal | info | debug\n    log_file           -> path to log file (optional; stdout/stderr still used)\n\n  Notes:\n    - CLI flags override XML values.\n-->\n<config>\n  <store_root>{}</store_root>\n  <container>staging-bucket</container>\n  <prefix>{}</prefix>\n  <manifest_key>{}</manifest_key>\n  <done_prefix>{}</done_prefix>\n  <mandatory>false</mandatory>\n  <load_command>load-engine copy --manifest {{manifest}}</load_command>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n</config>\n",
        STORE_ROOT_DEFAULT,
        PREFIX_DEFAULT,
        MANIFEST_KEY_DEFAULT,
        DONE_PREFIX_DEFAULT,
        suggested_log
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if MANIFEST_MOVE_CONFIG is not set and none
/// exists; returns the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path().ok()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}
