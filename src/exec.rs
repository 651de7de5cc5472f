//! External bulk-load execution.
//!
//! The load engine is opaque to this crate: it accepts a manifest locator
//! and reports success or failure, nothing more. No retries are assumed on
//! either side.

use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Placeholder in a load command template, replaced with the published
/// manifest URL.
pub const MANIFEST_PLACEHOLDER: &str = "{manifest}";

/// Runs the external bulk-load command against a published manifest.
pub trait LoadExecutor {
    fn execute(&self, manifest_url: &str) -> Result<()>;
}

impl<F> LoadExecutor for F
where
    F: Fn(&str) -> Result<()>,
{
    fn execute(&self, manifest_url: &str) -> Result<()> {
        self(manifest_url)
    }
}

/// Executes a configured command line with [`MANIFEST_PLACEHOLDER`]
/// substituted, e.g. `load-engine copy --manifest {manifest}`.
/// A non-zero exit status is a load failure.
pub struct ShellLoadExecutor {
    command: String,
}

impl ShellLoadExecutor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl LoadExecutor for ShellLoadExecutor {
    fn execute(&self, manifest_url: &str) -> Result<()> {
        let rendered = self.command.replace(MANIFEST_PLACEHOLDER, manifest_url);
        let words = shell_words::split(&rendered)
            .with_context(|| format!("parse load command '{rendered}'"))?;
        let (program, args) = words
            .split_first()
            .context("load command is empty")?;

        debug!(command = %rendered, "invoking bulk load");
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("spawn load command '{program}'"))?;

        if !status.success() {
            bail!("load command '{rendered}' exited with {status}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_implements_load_executor() {
        let executor = |url: &str| -> Result<()> {
            assert_eq!(url, "mem://c/manifest.json");
            Ok(())
        };
        LoadExecutor::execute(&executor, "mem://c/manifest.json").unwrap();
    }

    #[test]
    fn empty_command_is_rejected() {
        let executor = ShellLoadExecutor::new("");
        let err = executor.execute("mem://c/m.json").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn unbalanced_quoting_is_a_parse_error() {
        let executor = ShellLoadExecutor::new("load 'unclosed");
        let err = executor.execute("mem://c/m.json").unwrap_err();
        assert!(err.to_string().contains("parse load command"));
    }
}
