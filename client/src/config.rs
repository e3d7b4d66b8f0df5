//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service lives on a separate origin. Its base URL is baked in at
//! compile time from `JOBBOARD_AUTH_BASE_URL` so the hydrate bundle and the
//! SSR render agree on where the form posts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Auth service origin used when `JOBBOARD_AUTH_BASE_URL` is unset.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth-universal-repo.vercel.app";

/// Route an authenticated user lands on.
pub const LANDING_ROUTE: &str = "/home";

/// Route unauthenticated users are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Pause between a successful login and the landing redirect, so the success
/// notice is readable.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// How long a success notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Auth service base URL with any trailing slash removed.
pub fn auth_base_url() -> &'static str {
    normalize_base_url(option_env!("JOBBOARD_AUTH_BASE_URL").unwrap_or(DEFAULT_AUTH_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_AUTH_BASE_URL } else { trimmed }
}
