use std::fs;

use pad_core::codec::{display_entry, split_blob};
use pad_core::{PadError, Scratchpad, Store, StoreConfig, StoreMode};
use tempfile::tempdir;

fn encrypted(root: &std::path::Path) -> Store {
    Store::new(StoreConfig::with_defaults(root, StoreMode::Encrypted))
}

#[test]
fn test_add_twice_then_list() {
    let dir = tempdir().expect("tempdir should be created");
    let store = encrypted(dir.path());

    let (first, outcome) = store
        .update(|pad| pad.add("x"))
        .expect("first add should succeed");
    assert_eq!(first, 1);
    assert!(outcome.key_created.is_some());

    let (second, outcome) = store
        .update(|pad| pad.add("y"))
        .expect("second add should succeed");
    assert_eq!(second, 2);
    assert!(outcome.key_created.is_none());

    assert_eq!(store.read_entries().expect("read should succeed"), ["x", "y"]);
}

#[test]
fn test_payload_is_not_plaintext_on_disk() {
    let dir = tempdir().expect("tempdir should be created");
    let store = encrypted(dir.path());
    store
        .update(|pad| pad.add("api key: sk-live-123"))
        .expect("add should succeed");

    let raw = fs::read(store.payload_path()).expect("payload should exist");
    let needle = b"sk-live-123";
    assert!(!raw.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn test_removing_last_entry_leaves_empty_store() {
    let dir = tempdir().expect("tempdir should be created");
    let store = encrypted(dir.path());
    store.update(|pad| pad.add("only")).expect("add should succeed");

    let (removed, _) = store
        .update(|pad| pad.remove(1))
        .expect("remove should succeed");

    assert_eq!(removed, "only");
    assert!(store.load().expect("load should succeed").is_empty());
}

#[test]
fn test_plaintext_store_writes_markdown_file() {
    let dir = tempdir().expect("tempdir should be created");
    let store = Store::new(StoreConfig::with_defaults(dir.path(), StoreMode::Plaintext));

    store.update(|pad| pad.add("note")).expect("add should succeed");

    let path = dir.path().join(".context").join("scratchpad.md");
    assert_eq!(fs::read(path).expect("payload should exist"), b"note\n");
    assert!(!dir.path().join(".gitignore").exists());
}

#[test]
fn test_blob_survives_encrypted_round_trip() {
    let dir = tempdir().expect("tempdir should be created");
    let store = encrypted(dir.path());
    let data = b"-----BEGIN CERT-----\nabc\n-----END CERT-----\n";

    store
        .update(|pad| pad.add_blob("cert.pem", data))
        .expect("add blob should succeed");

    let pad = store.load().expect("load should succeed");
    assert_eq!(pad.len(), 1);
    let entry = pad.get(1).expect("entry 1 should exist");
    assert_eq!(display_entry(entry), "cert.pem [BLOB]");
    assert_eq!(split_blob(entry).expect("blob should parse").data, data);
}

#[test]
fn test_move_and_edit_persist() {
    let dir = tempdir().expect("tempdir should be created");
    let store = encrypted(dir.path());
    store
        .save(&Scratchpad::from(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]))
        .expect("save should succeed");

    store
        .update(|pad| pad.move_entry(3, 1))
        .expect("move should succeed");
    store
        .update(|pad| pad.edit(2, "a"))
        .expect("edit should succeed");

    assert_eq!(
        store.read_entries().expect("read should succeed"),
        ["C", "a", "B"]
    );
}

#[test]
fn test_copied_key_opens_store_elsewhere() {
    let first = tempdir().expect("tempdir should be created");
    let second = tempdir().expect("tempdir should be created");
    let origin = encrypted(first.path());
    origin
        .update(|pad| pad.add("shared"))
        .expect("add should succeed");

    let clone = encrypted(second.path());
    fs::create_dir_all(second.path().join(".context")).expect("context dir should be created");
    fs::copy(origin.payload_path(), clone.payload_path()).expect("payload copy should succeed");

    assert!(matches!(clone.read_entries(), Err(PadError::NoKey { .. })));

    fs::copy(origin.key_path(), clone.key_path()).expect("key copy should succeed");
    assert_eq!(
        clone.read_entries().expect("read should succeed"),
        ["shared"]
    );
}
