use super::*;

#[test]
fn file_store_missing_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_round_trips_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    store.save("tok-123").unwrap();
    assert_eq!(store.load().unwrap(), Some("tok-123".to_owned()));
}

#[test]
fn file_store_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("nested").join("deep").join("token"));

    store.save("tok-456").unwrap();
    assert_eq!(store.load().unwrap(), Some("tok-456".to_owned()));
}

#[test]
fn file_store_trims_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "tok-789\n").unwrap();

    let store = FileTokenStore::new(path);
    assert_eq!(store.load().unwrap(), Some("tok-789".to_owned()));
}

#[test]
fn file_store_blank_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  \n").unwrap();

    let store = FileTokenStore::new(path);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_clear_removes_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    store.save("tok-123").unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryTokenStore::new();

    store.save("tok-123").unwrap();
    assert_eq!(store.load().unwrap(), Some("tok-123".to_owned()));

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_store_with_token_preloads() {
    let store = MemoryTokenStore::with_token("tok-preloaded");
    assert_eq!(store.load().unwrap(), Some("tok-preloaded".to_owned()));
}
