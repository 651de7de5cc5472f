//! In-memory store used by tests and embedders.
//!
//! Objects live in a `BTreeMap`, so listing order is deterministic (key
//! order). Individual operations can be made to fail on demand, which is
//! how the partial-failure paths of the workflow are exercised without a
//! real backend.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use super::{ObjectInfo, ObjectLocator, ObjectStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
struct StoredObject {
    body: Vec<u8>,
    content_type: String,
}

#[derive(Debug, Default)]
struct Faults {
    list: bool,
    put: bool,
    copy_keys: BTreeSet<String>,
    delete_keys: BTreeSet<String>,
}

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<(String, String), StoredObject>>,
    faults: Mutex<Faults>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one object. Keys ending in `/` model directory markers.
    pub fn insert(&self, container: &str, key: &str, body: impl Into<Vec<u8>>) {
        self.objects.lock().unwrap().insert(
            (container.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: String::new(),
            },
        );
    }

    /// Keys currently present in a container, in key order.
    pub fn keys(&self, container: &str) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(c, _)| c == container)
            .map(|(_, k)| k.clone())
            .collect()
    }

    /// Content type recorded by the last `put` for a locator.
    pub fn content_type_of(&self, locator: &ObjectLocator) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(&(locator.container.clone(), locator.key.clone()))
            .map(|o| o.content_type.clone())
    }

    pub fn fail_list(&self) {
        self.faults.lock().unwrap().list = true;
    }

    pub fn fail_put(&self) {
        self.faults.lock().unwrap().put = true;
    }

    pub fn fail_copy_of(&self, key: &str) {
        self.faults.lock().unwrap().copy_keys.insert(key.to_string());
    }

    pub fn fail_delete_of(&self, key: &str) {
        self.faults
            .lock()
            .unwrap()
            .delete_keys
            .insert(key.to_string());
    }
}

impl ObjectStore for MemoryStore {
    fn scheme(&self) -> &'static str {
        "mem"
    }

    fn list(&self, container: &str, prefix: &str) -> StoreResult<Vec<ObjectInfo>> {
        if self.faults.lock().unwrap().list {
            return Err(StoreError::new("list", container, "injected list failure"));
        }
        Ok(self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|((c, k), _)| c == container && k.starts_with(prefix))
            .map(|((_, k), o)| ObjectInfo {
                key: k.clone(),
                size: o.body.len() as u64,
            })
            .collect())
    }

    fn get(&self, locator: &ObjectLocator) -> StoreResult<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(locator.container.clone(), locator.key.clone()))
            .map(|o| o.body.clone())
            .ok_or_else(|| StoreError::new("get", locator, "no such object"))
    }

    fn put(&self, locator: &ObjectLocator, body: &[u8], content_type: &str) -> StoreResult<()> {
        if self.faults.lock().unwrap().put {
            return Err(StoreError::new("put", locator, "injected put failure"));
        }
        self.objects.lock().unwrap().insert(
            (locator.container.clone(), locator.key.clone()),
            StoredObject {
                body: body.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn copy(&self, src: &ObjectLocator, dest: &ObjectLocator) -> StoreResult<()> {
        if self.faults.lock().unwrap().copy_keys.contains(&src.key) {
            return Err(StoreError::new("copy", src, "injected copy failure"));
        }
        let mut objects = self.objects.lock().unwrap();
        let object = objects
            .get(&(src.container.clone(), src.key.clone()))
            .cloned()
            .ok_or_else(|| StoreError::new("copy", src, "no such object"))?;
        objects.insert((dest.container.clone(), dest.key.clone()), object);
        Ok(())
    }

    fn delete(&self, locator: &ObjectLocator) -> StoreResult<()> {
        if self.faults.lock().unwrap().delete_keys.contains(&locator.key) {
            return Err(StoreError::new("delete", locator, "injected delete failure"));
        }
        // Missing keys delete cleanly; see the trait contract.
        self.objects
            .lock()
            .unwrap()
            .remove(&(locator.container.clone(), locator.key.clone()));
        Ok(())
    }

    fn exists(&self, locator: &ObjectLocator) -> StoreResult<bool> {
        Ok(self
            .objects
            .lock()
            .unwrap()
            .contains_key(&(locator.container.clone(), locator.key.clone())))
    }
}
