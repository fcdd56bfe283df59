use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None }
}

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::default();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.raw(), None);
}

#[test]
fn memory_store_save_then_load() {
    let store = MemorySessionStore::default();
    store.save(&alice()).unwrap();
    assert_eq!(store.load().unwrap(), Some(alice()));
}

#[test]
fn memory_store_saves_json_snapshot() {
    let store = MemorySessionStore::default();
    store.save(&alice()).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "id": "u1", "name": "Alice" }));
}

#[test]
fn memory_store_clear_removes_snapshot() {
    let store = MemorySessionStore::with_user(alice());
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemorySessionStore::default();
    let other = store.clone();
    other.save(&alice()).unwrap();
    assert_eq!(store.load().unwrap(), Some(alice()));
}

#[test]
fn memory_store_rejects_corrupt_snapshot() {
    let store = MemorySessionStore::default();
    store.set_raw(Some("{not json".to_owned()));
    let err = store.load().unwrap_err();
    assert!(matches!(err, SessionStoreError::Serde(_)));
    assert!(err.to_string().starts_with("session snapshot is not valid JSON"));
}

// =============================================================
// BrowserSessionStore outside the browser build
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_without_csr() {
    let store = BrowserSessionStore::new("student_portal_session");
    store.save(&alice()).unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}
