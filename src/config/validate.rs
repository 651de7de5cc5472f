//! Config validation logic.
//! Verifies the store layout, disjoint prefixes, and that a run can
//! actually proceed (load command present unless dry-run).

use anyhow::{bail, Context, Result};
use std::fs;
use tracing::{debug, info};

use super::types::Config;

impl Config {
    /// Validate the configuration before a run.
    ///
    /// The listing prefix, the done prefix and the manifest key must be
    /// pairwise disjoint: a relocated object or a published manifest that
    /// lands under the listing prefix would be re-enumerated by the next
    /// run and fed back into the load.
    pub fn validate(&self) -> Result<()> {
        if self.container.is_empty() {
            bail!("container is not set; configure <container> or pass --container");
        }
        if self.container.contains('/') {
            bail!("container '{}' must not contain '/'", self.container);
        }

        // Store root and source container must exist and be readable.
        let container_dir = self.store_root.join(&self.container);
        if !self.store_root.is_dir() {
            bail!(
                "store root does not exist or is not a directory: {}",
                self.store_root.display()
            );
        }
        if !container_dir.is_dir() {
            bail!(
                "container directory does not exist: {}",
                container_dir.display()
            );
        }
        fs::read_dir(&container_dir).with_context(|| {
            format!(
                "cannot read container directory '{}'; check permissions",
                container_dir.display()
            )
        })?;
        debug!("container readable: {}", container_dir.display());

        if self.done_prefix.is_empty() {
            bail!("done_prefix must not be empty");
        }
        if !self.done_prefix.ends_with('/') {
            bail!("done_prefix '{}' must end with '/'", self.done_prefix);
        }
        if self.done_prefix.starts_with(&self.prefix) || self.prefix.starts_with(&self.done_prefix)
        {
            bail!(
                "listing prefix '{}' and done_prefix '{}' overlap; relocated objects would be re-enumerated",
                self.prefix,
                self.done_prefix
            );
        }

        if self.manifest_key.is_empty() {
            bail!("manifest_key must not be empty");
        }
        let same_container = self.effective_manifest_container() == self.container;
        if same_container && self.manifest_key.starts_with(&self.prefix) {
            bail!(
                "manifest_key '{}' lies under the listing prefix '{}'; the published manifest would list itself",
                self.manifest_key,
                self.prefix
            );
        }

        if self.load_command.is_none() && !self.dry_run {
            bail!("load_command is not set; configure <load_command> or pass --load-command");
        }

        info!(
            "Config validated: store='{}' container='{}' prefix='{}' manifest='{}/{}'",
            self.store_root.display(),
            self.container,
            self.prefix,
            self.effective_manifest_container(),
            self.manifest_key
        );
        Ok(())
    }
}
