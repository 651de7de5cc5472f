use std::cell::RefCell;

use manifest_move::{
    run_load_and_relocate, ListingRequest, LoadPlan, ManifestTemplate, MemoryStore, ObjectLocator,
    ObjectStore,
};

#[test]
fn full_run_publishes_loads_and_relocates_in_order() {
    let store = MemoryStore::new();
    store.insert("bucket", "staging/a.csv", "a");
    store.insert("bucket", "staging/b.csv", "b");
    store.insert("bucket", "staging/c.csv", "c");

    let seen_url = RefCell::new(None);
    let executor = |url: &str| -> anyhow::Result<()> {
        *seen_url.borrow_mut() = Some(url.to_string());
        Ok(())
    };

    let plan = LoadPlan {
        listing: ListingRequest::new("bucket", "staging/"),
        template: ManifestTemplate::default(),
        command_generator: None,
        destination: ObjectLocator::new("bucket", "manifests/load.json"),
        done_prefix: "done/".into(),
    };

    let manifest = run_load_and_relocate(&store, &executor, &plan).unwrap();
    assert_eq!(manifest.len(), 3);
    assert_eq!(
        seen_url.borrow().as_deref(),
        Some("mem://bucket/manifests/load.json")
    );

    // Sources are gone, done copies exist, the manifest object stays.
    let keys = store.keys("bucket");
    assert_eq!(
        keys,
        [
            "done/staging/a.csv",
            "done/staging/b.csv",
            "done/staging/c.csv",
            "manifests/load.json",
        ]
    );
    let body = store
        .get(&ObjectLocator::new("bucket", "done/staging/b.csv"))
        .unwrap();
    assert_eq!(body, b"b");
}
