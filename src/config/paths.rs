//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked
//! ancestors for safety.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::{config_dir, data_dir};

use super::CONFIG_ENV;

/// Config path to use: `$MANIFEST_MOVE_CONFIG` if set, otherwise the
/// OS-appropriate location under the user's config directory.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(explicit));
    }
    let base = config_dir().context("no user config directory available")?;
    Ok(base.join("manifest_move").join("config.xml"))
}

/// OS-appropriate default log file path (data dir); creates the directory
/// best-effort so first-run logging works.
pub fn default_log_path() -> Result<PathBuf> {
    let mut base = data_dir().context("no user data directory available")?;
    base.push("manifest_move");
    let _ = fs::create_dir_all(&base);
    base.push("manifest_move.log");
    Ok(base)
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
