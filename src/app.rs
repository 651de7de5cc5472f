//! Application orchestrator.
//! Loads/merges config, initializes logging, installs signal handlers,
//! validates the configuration, wires the store and executor, and runs the
//! load-and-relocate workflow.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::config::{self, Config};
use crate::errors::ManifestMoveError;
use crate::exec::ShellLoadExecutor;
use crate::logging::init_tracing;
use crate::manifest::{build_manifest, CommandGenerator, ListingRequest, ManifestTemplate};
use crate::output as out;
use crate::relocate::{run_load_and_relocate, LoadPlan};
use crate::shutdown;
use crate::store::{FsStore, ObjectInfo, ObjectLocator};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(config::CONFIG_ENV) {
            out::print_info(&format!(
                "Using {} (explicit):\n  {}\n",
                config::CONFIG_ENV,
                cfg_env
            ));
            out::print_info(&format!(
                "To override, unset {} or set it to another file.",
                config::CONFIG_ENV
            ));
            return Ok(());
        }
        match config::default_config_path() {
            Ok(p) => {
                out::print_info(&format!(
                    "Default manifest_move config path:\n  {}\n",
                    p.display()
                ));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init)
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template manifest_move config was written to: {}",
            path.display()
        ));
        out::print_info(
            "Edit the file to set `store_root`, `container`, `prefix`, `manifest_key` and `load_command`, then re-run this command.",
        );
        out::print_info(&format!(
            "To use a different location set {}.",
            config::CONFIG_ENV
        ));
        return Ok(());
    }

    // Build config (may read XML). CLI args override config values.
    let mut cfg = config::load_config()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; shutting down gracefully...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    if shutdown::is_requested() {
        return Ok(());
    }

    debug!("Starting manifest_move: {:?}", args);

    let result = run_with_config(&cfg);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn run_with_config(cfg: &Config) -> Result<()> {
    cfg.validate()?;

    let store = FsStore::new(&cfg.store_root);
    let listing = ListingRequest::new(cfg.container.as_str(), cfg.prefix.as_str());
    let template = ManifestTemplate {
        mandatory: cfg.mandatory,
        public_key: cfg.public_key.clone(),
        username: cfg.username.clone(),
    };
    let destination =
        ObjectLocator::new(cfg.effective_manifest_container(), cfg.manifest_key.as_str());

    let generator = cfg
        .command_template
        .clone()
        .map(|tpl| move |object: &ObjectInfo| render_command(&tpl, object));
    let command_generator = generator.as_ref().map(|g| g as &CommandGenerator<'_>);

    if cfg.dry_run {
        let manifest = match build_manifest(&store, &listing, &template, command_generator) {
            Ok(m) => m,
            Err(e) => {
                log_workflow_error(&e);
                return Err(e.into());
            }
        };
        out::print_info(&format!(
            "Dry-run: would publish {} entr{} to '{}/{}'",
            manifest.len(),
            if manifest.len() == 1 { "y" } else { "ies" },
            cfg.effective_manifest_container(),
            cfg.manifest_key
        ));
        for entry in manifest.iter() {
            out::print_user(&entry.url);
        }
        if let Some(cmd) = &cfg.load_command {
            out::print_info(&format!("Dry-run: would then run '{}' and relocate sources under '{}'", cmd, cfg.done_prefix));
        }
        return Ok(());
    }

    let load_command = match cfg.load_command.clone() {
        Some(cmd) => cmd,
        None => bail!("load_command is not set"),
    };
    let executor = ShellLoadExecutor::new(load_command);

    let plan = LoadPlan {
        listing,
        template,
        command_generator,
        destination,
        done_prefix: cfg.done_prefix.clone(),
    };

    match run_load_and_relocate(&store, &executor, &plan) {
        Ok(manifest) => {
            info!(entries = manifest.len(), "Load and relocation completed");
            out::print_success(&format!(
                "Loaded and relocated {} object(s); manifest at '{}/{}'",
                manifest.len(),
                cfg.effective_manifest_container(),
                cfg.manifest_key
            ));
            Ok(())
        }
        Err(e) => {
            log_workflow_error(&e);
            Err(e.into())
        }
    }
}

/// Map every workflow failure variant onto a structured error event.
fn log_workflow_error(e: &ManifestMoveError) {
    let code = e.code();
    match e {
        ManifestMoveError::Listing { container, .. } => {
            error!(code, kind = "listing", container = %container, error = %e, "Workflow failed")
        }
        ManifestMoveError::Serialization { destination, .. } => {
            error!(code, kind = "serialization", destination = %destination, error = %e, "Workflow failed")
        }
        ManifestMoveError::StorageWrite { destination, .. } => {
            error!(code, kind = "storage_write", destination = %destination, error = %e, "Workflow failed")
        }
        ManifestMoveError::LoadExecution { manifest, .. } => {
            error!(code, kind = "load_execution", manifest = %manifest, error = %e, "Workflow failed")
        }
        ManifestMoveError::Relocation { locator, phase, .. } => {
            error!(code, kind = "relocation", locator = %locator, phase = %phase, error = %e, "Workflow failed")
        }
        ManifestMoveError::Interrupted => {
            error!(code, kind = "interrupted", "Workflow aborted by user")
        }
    }
}

fn render_command(template: &str, object: &ObjectInfo) -> String {
    template
        .replace("{key}", &object.key)
        .replace("{size}", &object.size.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_command_substitutes_key_and_size() {
        let object = ObjectInfo {
            key: "staging/a.csv".into(),
            size: 42,
        };
        assert_eq!(
            render_command("ingest {key} --bytes {size}", &object),
            "ingest staging/a.csv --bytes 42"
        );
    }
}
