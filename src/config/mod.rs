//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MANIFEST_MOVE_CONFIG";

/// Defaults shared across submodules.
pub const STORE_ROOT_DEFAULT: &str = "/var/lib/manifest_move/store";
pub const PREFIX_DEFAULT: &str = "staging/";
pub const MANIFEST_KEY_DEFAULT: &str = "manifests/load.json";
