use super::*;
use crate::util::storage::MemoryStore;

fn session() -> LoginSession {
    LoginSession {
        token: "jwt.abc".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

#[test]
fn persist_login_writes_exactly_three_keys() {
    let mut store = MemoryStore::new();
    persist_login(&mut store, &session());
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(keys::TOKEN).as_deref(), Some("jwt.abc"));
    assert_eq!(store.get(keys::USERNAME).as_deref(), Some("ada"));
    assert_eq!(store.get(keys::EMAIL).as_deref(), Some("ada@example.com"));
    assert!(has_session(&store));
}

#[test]
fn empty_token_is_not_a_session() {
    let mut store = MemoryStore::new();
    store.set(keys::TOKEN, "");
    assert!(!has_session(&store));
}

#[test]
fn remember_email_does_not_create_session() {
    let mut store = MemoryStore::new();
    remember_email(&mut store, "ada@example.com");
    assert!(!has_session(&store));
    assert_eq!(store.get(keys::TOKEN), None);
}

#[test]
fn clear_session_removes_all_artifacts() {
    let mut store = MemoryStore::new();
    persist_login(&mut store, &session());
    clear_session(&mut store);
    assert!(store.is_empty());
}
