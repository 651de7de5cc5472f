use manifest_move::{
    build_manifest, relocate_entries, ListingRequest, ManifestTemplate, MemoryStore,
};

#[test]
fn second_relocation_pass_over_moved_objects_is_a_no_op() {
    let store = MemoryStore::new();
    store.insert("bucket", "staging/a.csv", "a");
    store.insert("bucket", "staging/b.csv", "b");

    let manifest = build_manifest(
        &store,
        &ListingRequest::new("bucket", "staging/"),
        &ManifestTemplate::default(),
        None,
    )
    .unwrap();

    relocate_entries(&store, &manifest, "done/").unwrap();
    let after_first = store.keys("bucket");
    assert_eq!(after_first, ["done/staging/a.csv", "done/staging/b.csv"]);

    // Every source is gone and every done copy exists; the second pass
    // recognizes the entries as already relocated and changes nothing.
    relocate_entries(&store, &manifest, "done/").unwrap();
    assert_eq!(store.keys("bucket"), after_first);
}

#[test]
fn rerun_resumes_after_a_partial_first_pass() {
    let store = MemoryStore::new();
    store.insert("bucket", "staging/a.csv", "a");
    store.insert("bucket", "staging/b.csv", "b");

    let manifest = build_manifest(
        &store,
        &ListingRequest::new("bucket", "staging/"),
        &ManifestTemplate::default(),
        None,
    )
    .unwrap();

    store.fail_copy_of("staging/b.csv");
    relocate_entries(&store, &manifest, "done/").unwrap_err();
    assert_eq!(
        store.keys("bucket"),
        ["done/staging/a.csv", "staging/b.csv"]
    );

    // Clearing the fault and re-running finishes the job: the first entry
    // is skipped as already relocated, the second is moved.
    let store2 = MemoryStore::new();
    store2.insert("bucket", "done/staging/a.csv", "a");
    store2.insert("bucket", "staging/b.csv", "b");
    relocate_entries(&store2, &manifest, "done/").unwrap();
    assert_eq!(
        store2.keys("bucket"),
        ["done/staging/a.csv", "done/staging/b.csv"]
    );
}
