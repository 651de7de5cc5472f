use manifest_move::{build_manifest, ListingRequest, Manifest, ManifestTemplate, MemoryStore};

#[test]
fn round_trip_preserves_wire_fields() {
    let store = MemoryStore::new();
    store.insert("bucket", "staging/a.csv", "a");
    store.insert("bucket", "staging/b.csv", "b");

    let template = ManifestTemplate {
        mandatory: true,
        public_key: Some("key-1".into()),
        username: Some("loader".into()),
    };
    let generate = |object: &manifest_move::ObjectInfo| format!("cat {}", object.key);
    let manifest = build_manifest(
        &store,
        &ListingRequest::new("bucket", "staging/"),
        &template,
        Some(&generate),
    )
    .unwrap();

    let bytes = serde_json::to_vec(&manifest).unwrap();
    let parsed: Manifest = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed.len(), manifest.len());
    for (before, after) in manifest.iter().zip(parsed.iter()) {
        assert_eq!(before.url, after.url);
        assert_eq!(before.command, after.command);
        assert_eq!(before.mandatory, after.mandatory);
        assert_eq!(before.public_key, after.public_key);
        assert_eq!(before.username, after.username);
    }
}

#[test]
fn optional_fields_absent_in_json_parse_back_as_unset() {
    let parsed: Manifest =
        serde_json::from_str(r#"{"entries":[{"url":"mem://bucket/a.csv"}]}"#).unwrap();
    let entry = &parsed.entries[0];
    assert_eq!(entry.url, "mem://bucket/a.csv");
    assert!(entry.command.is_none());
    assert!(!entry.mandatory);
    assert!(entry.public_key.is_none());
    assert!(entry.username.is_none());
}

#[test]
fn empty_manifest_round_trips_as_empty_array() {
    let manifest = Manifest::default();
    let json = serde_json::to_string(&manifest).unwrap();
    assert_eq!(json, r#"{"entries":[]}"#);
    let parsed: Manifest = serde_json::from_str(&json).unwrap();
    assert!(parsed.is_empty());
}
