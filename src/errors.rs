//! Typed error definitions for the manifest workflow.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Every failure is terminal for the invocation: no step retries
//! internally, and each variant carries the locator context a caller needs
//! to diagnose and re-run the whole workflow by hand.

use std::fmt;

use thiserror::Error;

use crate::store::StoreError;

/// Which half of a relocation step failed.
///
/// A copy failure leaves the source untouched; a delete failure leaves the
/// object in both the source and done locations (a duplicate, not a loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationPhase {
    Copy,
    Delete,
}

impl fmt::Display for RelocationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelocationPhase::Copy => "copy",
            RelocationPhase::Delete => "delete",
        })
    }
}

#[derive(Debug, Error)]
pub enum ManifestMoveError {
    #[error("unable to list objects in container '{container}'")]
    Listing {
        container: String,
        #[source]
        source: StoreError,
    },

    /// Should not occur for well-formed manifests; fatal and non-retryable.
    #[error("failed to serialize manifest destined for '{destination}'")]
    Serialization {
        destination: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write manifest to '{destination}'")]
    StorageWrite {
        destination: String,
        #[source]
        source: StoreError,
    },

    #[error("bulk load against manifest '{manifest}' failed")]
    LoadExecution {
        manifest: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to relocate '{locator}' during the {phase} phase")]
    Relocation {
        locator: String,
        phase: RelocationPhase,
        #[source]
        source: StoreError,
    },

    #[error("operation interrupted by user")]
    Interrupted,
}

impl ManifestMoveError {
    /// Stable machine-readable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            ManifestMoveError::Listing { .. } => "listing",
            ManifestMoveError::Serialization { .. } => "serialization",
            ManifestMoveError::StorageWrite { .. } => "storage_write",
            ManifestMoveError::LoadExecution { .. } => "load_execution",
            ManifestMoveError::Relocation { .. } => "relocation",
            ManifestMoveError::Interrupted => "interrupted",
        }
    }
}
