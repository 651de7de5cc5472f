use anyhow::bail;

use manifest_move::{
    run_load_and_relocate, ListingRequest, LoadPlan, ManifestMoveError, ManifestTemplate,
    MemoryStore, ObjectLocator,
};

#[test]
fn failed_load_leaves_every_source_in_place() {
    let store = MemoryStore::new();
    store.insert("bucket", "staging/a.csv", "a");
    store.insert("bucket", "staging/b.csv", "b");

    let executor = |_: &str| -> anyhow::Result<()> { bail!("engine rejected the manifest") };

    let plan = LoadPlan {
        listing: ListingRequest::new("bucket", "staging/"),
        template: ManifestTemplate::default(),
        command_generator: None,
        destination: ObjectLocator::new("bucket", "manifests/load.json"),
        done_prefix: "done/".into(),
    };

    let err = run_load_and_relocate(&store, &executor, &plan).unwrap_err();
    match err {
        ManifestMoveError::LoadExecution { ref manifest, .. } => {
            assert_eq!(manifest, "mem://bucket/manifests/load.json")
        }
        other => panic!("expected LoadExecution error, got {other:?}"),
    }

    // No copy or delete was issued: sources untouched, no done keys. The
    // manifest stays published as the evidence needed to retry.
    let keys = store.keys("bucket");
    assert_eq!(
        keys,
        ["manifests/load.json", "staging/a.csv", "staging/b.csv"]
    );
}
