use super::*;

#[test]
fn memory_store_round_trips_a_value() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);

    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_store_set_replaces_previous_value() {
    let store = MemoryStore::new();
    store.set("k", "first");
    store.set("k", "second");

    assert_eq!(store.get("k"), Some("second".to_owned()));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_deletes_and_tolerates_absent_keys() {
    let store = MemoryStore::new();
    store.set("k", "v");

    store.remove("k");
    assert_eq!(store.get("k"), None);

    // Second remove is a no-op, same as Web Storage.
    store.remove("k");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let writer = MemoryStore::new();
    let reader = writer.clone();

    writer.set("shared", "yes");

    assert_eq!(reader.get("shared"), Some("yes".to_owned()));
}
