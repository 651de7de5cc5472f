//! Filesystem-backed store.
//!
//! Maps a container to a directory under a fixed root and a key to a
//! relative path inside it, with `/` as the key separator on every
//! platform. Listing order is lexicographic by key, which keeps
//! enumeration deterministic across runs.
//!
//! Content type is metadata a plain filesystem cannot carry; `put`
//! accepts and discards it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{ObjectInfo, ObjectLocator, ObjectStore, StoreError, StoreResult, KEY_SEPARATOR};

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Translate a key into a path under the container directory.
    /// Keys with `..` components are refused: they would escape the root.
    fn object_path(&self, container: &str, key: &str) -> StoreResult<PathBuf> {
        if key.split(KEY_SEPARATOR).any(|part| part == "..") {
            return Err(StoreError::new(
                "resolve",
                format!("{container}/{key}"),
                "key must not contain '..' components",
            ));
        }
        let mut path = self.root.join(container);
        for part in key.split(KEY_SEPARATOR).filter(|p| !p.is_empty()) {
            path.push(part);
        }
        Ok(path)
    }
}

impl ObjectStore for FsStore {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn list(&self, container: &str, prefix: &str) -> StoreResult<Vec<ObjectInfo>> {
        let container_dir = self.root.join(container);
        if !container_dir.is_dir() {
            return Err(StoreError::new(
                "list",
                container,
                format!("container directory '{}' not found", container_dir.display()),
            ));
        }

        let mut objects = Vec::new();
        for entry in WalkDir::new(&container_dir) {
            let entry = entry.map_err(|e| StoreError::new("list", container, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&container_dir)
                .map_err(|e| StoreError::new("list", container, e))?;
            let key = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if !key.starts_with(prefix) {
                continue;
            }
            let size = entry
                .metadata()
                .map_err(|e| StoreError::new("list", &key, e))?
                .len();
            objects.push(ObjectInfo { key, size });
        }

        objects.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(container, prefix, count = objects.len(), "listed objects");
        Ok(objects)
    }

    fn get(&self, locator: &ObjectLocator) -> StoreResult<Vec<u8>> {
        let path = self.object_path(&locator.container, &locator.key)?;
        fs::read(&path).map_err(|e| StoreError::new("get", locator, e))
    }

    fn put(&self, locator: &ObjectLocator, body: &[u8], _content_type: &str) -> StoreResult<()> {
        let path = self.object_path(&locator.container, &locator.key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::new("put", locator, e))?;
        }
        fs::write(&path, body).map_err(|e| StoreError::new("put", locator, e))
    }

    fn copy(&self, src: &ObjectLocator, dest: &ObjectLocator) -> StoreResult<()> {
        let src_path = self.object_path(&src.container, &src.key)?;
        let dest_path = self.object_path(&dest.container, &dest.key)?;
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::new("copy", dest, e))?;
        }
        fs::copy(&src_path, &dest_path)
            .map(|_| ())
            .map_err(|e| StoreError::new("copy", src, e))
    }

    fn delete(&self, locator: &ObjectLocator) -> StoreResult<()> {
        let path = self.object_path(&locator.container, &locator.key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Already gone counts as deleted; re-runs depend on this.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new("delete", locator, e)),
        }
    }

    fn exists(&self, locator: &ObjectLocator) -> StoreResult<bool> {
        let path = self.object_path(&locator.container, &locator.key)?;
        Ok(path.is_file())
    }
}
