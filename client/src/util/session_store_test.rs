use super::*;

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn empty_store_reads_none() {
    let store = MemorySessionStore::default();
    assert_eq!(store.read(), None);
}

#[test]
fn write_then_read_returns_token() {
    let store = MemorySessionStore::default();
    store.write("tok-abc");
    assert_eq!(store.read().as_deref(), Some("tok-abc"));
}

#[test]
fn write_replaces_previous_token() {
    let store = MemorySessionStore::with_token("tok-old");
    store.write("tok-new");
    assert_eq!(store.read().as_deref(), Some("tok-new"));
}

#[test]
fn clear_removes_token() {
    let store = MemorySessionStore::with_token("tok-abc");
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_on_empty_store_is_noop() {
    let store = MemorySessionStore::default();
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// BrowserSessionStore (non-hydrate)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_off_browser() {
    let store = BrowserSessionStore;
    store.write("tok-abc");
    assert_eq!(store.read(), None);
    store.clear();
}

#[test]
fn token_key_matches_persisted_name() {
    assert_eq!(TOKEN_KEY, "token");
}
