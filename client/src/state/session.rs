//! Session artifacts kept in client storage.
//!
//! The token is opaque: presence is all that is checked.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::LoginSession;
use crate::util::storage::{KeyValueStore, keys};

/// Whether a non-empty token is stored.
pub fn has_session(store: &impl KeyValueStore) -> bool {
    store.get(keys::TOKEN).is_some_and(|token| !token.is_empty())
}

/// Write the three artifacts of a successful login.
pub fn persist_login(store: &mut impl KeyValueStore, session: &LoginSession) {
    store.set(keys::TOKEN, &session.token);
    store.set(keys::USERNAME, &session.username);
    store.set(keys::EMAIL, &session.email);
}

/// Remember the email used at signup. Establishes no session.
pub fn remember_email(store: &mut impl KeyValueStore, email: &str) {
    store.set(keys::EMAIL, email);
}

/// Drop every session artifact (logout).
pub fn clear_session(store: &mut impl KeyValueStore) {
    store.remove(keys::TOKEN);
    store.remove(keys::USERNAME);
    store.remove(keys::EMAIL);
}
