//! Object store abstraction.
//!
//! The workflow needs only a handful of key-addressed primitives, so the
//! boundary is a small trait. Real deployments plug in a backend for their
//! store; the crate ships a filesystem-backed implementation for the CLI
//! and an in-memory one for tests.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::fmt;

use thiserror::Error;

/// Key separator used by every backend. Keys ending with it are treated as
/// directory markers by the manifest builder.
pub const KEY_SEPARATOR: char = '/';

/// Container + key address of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLocator {
    pub container: String,
    pub key: String,
}

impl ObjectLocator {
    pub fn new(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }

    /// Fully-qualified `scheme://container/key` form.
    pub fn url(&self, scheme: &str) -> String {
        format!("{scheme}://{}/{}", self.container, self.key)
    }
}

impl fmt::Display for ObjectLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.key)
    }
}

/// One listed object: store-relative key plus reported size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub key: String,
    pub size: u64,
}

/// Failure surfaced by a store backend. Carries the operation and the
/// target it failed on so workflow errors can point at the exact object.
#[derive(Debug, Error)]
#[error("{op} '{target}': {message}")]
pub struct StoreError {
    pub op: &'static str,
    pub target: String,
    pub message: String,
}

impl StoreError {
    pub fn new(
        op: &'static str,
        target: impl fmt::Display,
        message: impl fmt::Display,
    ) -> Self {
        Self {
            op,
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-addressed operations the workflow consumes.
///
/// Contract:
/// - `list` returns descriptors in the backend's enumeration order; the
///   manifest builder preserves that order verbatim.
/// - `copy` to an existing destination key overwrites it.
/// - `delete` of a key that no longer exists succeeds; re-running a
///   partially relocated manifest depends on this.
pub trait ObjectStore {
    /// URL scheme used when rendering fully-qualified locators.
    fn scheme(&self) -> &'static str;

    fn list(&self, container: &str, prefix: &str) -> StoreResult<Vec<ObjectInfo>>;

    fn get(&self, locator: &ObjectLocator) -> StoreResult<Vec<u8>>;

    fn put(&self, locator: &ObjectLocator, body: &[u8], content_type: &str) -> StoreResult<()>;

    fn copy(&self, src: &ObjectLocator, dest: &ObjectLocator) -> StoreResult<()>;

    fn delete(&self, locator: &ObjectLocator) -> StoreResult<()>;

    fn exists(&self, locator: &ObjectLocator) -> StoreResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_url_renders_scheme_container_key() {
        let loc = ObjectLocator::new("bucket", "staging/a.csv");
        assert_eq!(loc.url("s3"), "s3://bucket/staging/a.csv");
        assert_eq!(loc.to_string(), "bucket/staging/a.csv");
    }

    #[test]
    fn store_error_mentions_op_and_target() {
        let e = StoreError::new("list", "bucket", "backend unavailable");
        let msg = e.to_string();
        assert!(msg.contains("list"));
        assert!(msg.contains("bucket"));
    }
}
