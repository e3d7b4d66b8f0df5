use super::*;

#[test]
fn memory_store_round_trips_and_removes() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    store.set(keys::TOKEN, "abc");
    store.set(keys::TOKEN, "def");
    assert_eq!(store.get(keys::TOKEN).as_deref(), Some("def"));
    assert_eq!(store.len(), 1);
    store.remove(keys::TOKEN);
    assert_eq!(store.get(keys::TOKEN), None);
    store.remove("missing");
    assert!(store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_browser() {
    let mut store = BrowserStore;
    store.set(keys::EMAIL, "a@b.com");
    assert_eq!(store.get(keys::EMAIL), None);
    store.remove(keys::EMAIL);
}
