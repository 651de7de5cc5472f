use std::cell::Cell;

use manifest_move::{
    run_load_and_relocate, ListingRequest, LoadPlan, ManifestTemplate, MemoryStore, ObjectLocator,
    ObjectStore,
};

#[test]
fn empty_listing_still_publishes_and_triggers_the_load() {
    let store = MemoryStore::new();

    let calls = Cell::new(0usize);
    let executor = |_: &str| -> anyhow::Result<()> {
        calls.set(calls.get() + 1);
        Ok(())
    };

    let plan = LoadPlan {
        listing: ListingRequest::new("bucket", "staging/"),
        template: ManifestTemplate::default(),
        command_generator: None,
        destination: ObjectLocator::new("bucket", "manifests/load.json"),
        done_prefix: "done/".into(),
    };

    // MemoryStore has no "bucket" container at all; an empty listing is
    // still a successful listing.
    let manifest = run_load_and_relocate(&store, &executor, &plan).unwrap();
    assert!(manifest.is_empty());
    assert_eq!(calls.get(), 1);

    let body = store
        .get(&ObjectLocator::new("bucket", "manifests/load.json"))
        .unwrap();
    assert_eq!(body, br#"{"entries":[]}"#);
}
