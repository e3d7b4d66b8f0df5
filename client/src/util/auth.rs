//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page bounces visitors who already hold a token to the landing
//! route; the home page bounces visitors without one to `/login`. Both read
//! client storage exactly once per mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{LANDING_ROUTE, LOGIN_ROUTE};
use crate::state::session::has_session;
use crate::util::storage::{BrowserStore, KeyValueStore};

/// Result of the one-shot mount check. Pages render their content only once
/// the gate has resolved in their favor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionGate {
    #[default]
    Checking,
    Anonymous,
    Authenticated,
}

/// Full-page navigation to `url`. Logs and returns `false` when the browser
/// refuses (or outside the browser).
pub fn redirect_page(url: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let redirected = web_sys::window().is_some_and(|window| window.location().set_href(url).is_ok());
        if !redirected {
            leptos::logging::warn!("redirect to {url} failed");
        }
        redirected
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        false
    }
}

/// Classify the visitor from stored session artifacts.
pub fn session_gate(store: &impl KeyValueStore) -> SessionGate {
    if has_session(store) { SessionGate::Authenticated } else { SessionGate::Anonymous }
}

/// Redirect to the landing route when a token is already stored.
pub fn install_landing_redirect<F>(gate: RwSignal<SessionGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_gate(gate, SessionGate::Authenticated, LANDING_ROUTE, navigate);
}

/// Redirect to `/login` when no token is stored.
pub fn install_unauth_redirect<F>(gate: RwSignal<SessionGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_gate(gate, SessionGate::Anonymous, LOGIN_ROUTE, navigate);
}

fn install_gate<F>(gate: RwSignal<SessionGate>, redirect_on: SessionGate, route: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if gate.get_untracked() != SessionGate::Checking {
            return;
        }
        let resolved = session_gate(&BrowserStore);
        gate.set(resolved);
        if resolved == redirect_on {
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
