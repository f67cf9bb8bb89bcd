//! Session store tests

use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
use tempfile::TempDir;

fn temp_store() -> (TempDir, FileSessionStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileSessionStore::new(dir.path().join("token"));
    (dir, store)
}

#[test]
fn test_file_store_missing_file_means_no_session() {
    let (_dir, store) = temp_store();
    assert!(store.get().is_none());
}

#[test]
fn test_file_store_set_then_get() {
    let (_dir, store) = temp_store();

    store.set("tok-1").expect("Failed to set token");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}

#[test]
fn test_file_store_set_replaces_previous_token() {
    let (_dir, store) = temp_store();

    store.set("tok-1").expect("Failed to set token");
    store.set("tok-2").expect("Failed to replace token");
    assert_eq!(store.get().as_deref(), Some("tok-2"));
}

#[test]
fn test_file_store_creates_parent_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileSessionStore::new(dir.path().join("app_data").join("token"));

    store.set("tok-1").expect("Failed to set token");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
    assert!(store.path().exists());
}

#[test]
fn test_file_store_survives_reopening() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("token");

    FileSessionStore::new(&path)
        .set("tok-1")
        .expect("Failed to set token");

    // A fresh store over the same file sees the persisted session
    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.get().as_deref(), Some("tok-1"));
}

#[test]
fn test_file_store_trims_whitespace() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("token");
    std::fs::write(&path, "  tok-1\n").expect("Failed to write token file");

    let store = FileSessionStore::new(&path);
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}

#[test]
fn test_file_store_empty_file_means_no_session() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("token");
    std::fs::write(&path, "\n").expect("Failed to write token file");

    let store = FileSessionStore::new(&path);
    assert!(store.get().is_none());
}

#[test]
fn test_file_store_clear_removes_token() {
    let (_dir, store) = temp_store();

    store.set("tok-1").expect("Failed to set token");
    store.clear().expect("Failed to clear token");
    assert!(store.get().is_none());
    assert!(!store.path().exists());
}

#[test]
fn test_file_store_clear_without_token_is_ok() {
    let (_dir, store) = temp_store();
    store.clear().expect("Clear on empty store should succeed");
}

#[test]
fn test_memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert!(store.get().is_none());
}

#[test]
fn test_memory_store_set_get_clear() {
    let store = MemorySessionStore::new();

    store.set("tok-1").expect("Failed to set token");
    assert_eq!(store.get().as_deref(), Some("tok-1"));

    store.set("tok-2").expect("Failed to replace token");
    assert_eq!(store.get().as_deref(), Some("tok-2"));

    store.clear().expect("Failed to clear token");
    assert!(store.get().is_none());
}

#[test]
fn test_memory_store_with_token() {
    let store = MemorySessionStore::with_token("tok-1");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}
