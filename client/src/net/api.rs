//! REST helpers for the external auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Response interpretation is a pure function over `(status ok, body text)`
//! so every branch of the failure taxonomy is unit-testable. Transport
//! failures never panic; they come back as `AuthError` values.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{LoginPayload, LoginSession, SignupPayload};
use crate::error::{AuthError, GENERIC_REJECTION_MESSAGE};
use crate::state::auth_form::AuthMode;

/// Delegated identity providers offered on the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    /// Path segment the auth service expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

/// A submission ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginPayload),
    Signup(SignupPayload),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Login(_) => AuthMode::Login,
            Self::Signup(_) => AuthMode::Signup,
        }
    }

    /// Full URL this request posts to.
    pub fn endpoint(&self, base: &str) -> String {
        match self {
            Self::Login(_) => login_endpoint(base),
            Self::Signup(_) => signup_endpoint(base),
        }
    }

    /// JSON body for the request.
    pub fn body(&self) -> Value {
        // Plain string fields; serialization cannot fail.
        let value = match self {
            Self::Login(payload) => serde_json::to_value(payload),
            Self::Signup(payload) => serde_json::to_value(payload),
        };
        value.unwrap_or(Value::Null)
    }
}

/// Decoded success from the auth service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthReply {
    LoggedIn(LoginSession),
    SignedUp,
}

pub fn login_endpoint(base: &str) -> String {
    format!("{base}/api/auth/login")
}

pub fn signup_endpoint(base: &str) -> String {
    format!("{base}/api/auth/signup")
}

/// Full-page redirect target that starts a provider login.
pub fn oauth_endpoint(base: &str, provider: OAuthProvider) -> String {
    format!("{base}/api/auth/{}", provider.as_str())
}

/// Pull a human-readable message out of an error body.
///
/// Precedence: `error`, then `message`, then the first entry of `errors`
/// (its `msg` field, or the entry itself when it is a string), then the body
/// itself when it is a JSON string.
pub fn extract_error_message(body: &Value) -> String {
    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    if let Some(message) = non_empty(body.get("error")) {
        return message;
    }
    if let Some(message) = non_empty(body.get("message")) {
        return message;
    }
    if let Some(first) = body.get("errors").and_then(Value::as_array).and_then(|errs| errs.first()) {
        if let Some(message) = non_empty(first.get("msg")).or_else(|| non_empty(Some(first))) {
            return message;
        }
    }
    if let Some(message) = non_empty(Some(body)) {
        return message;
    }
    GENERIC_REJECTION_MESSAGE.to_owned()
}

/// Interpret a completed HTTP exchange.
///
/// # Errors
///
/// `Decode` when the body is not JSON (or a login success lacks a token);
/// `Rejected` when `ok` is false.
pub fn interpret_auth_response(mode: AuthMode, ok: bool, body: &str) -> Result<AuthReply, AuthError> {
    let json: Value = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    if !ok {
        return Err(AuthError::Rejected(extract_error_message(&json)));
    }
    match mode {
        AuthMode::Login => {
            let session: LoginSession =
                serde_json::from_value(json).map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(AuthReply::LoggedIn(session))
        }
        AuthMode::Signup => Ok(AuthReply::SignedUp),
    }
}

/// POST `request` to the auth service rooted at `base`.
///
/// # Errors
///
/// `Network` if the request never completes, `Decode` if the body cannot be
/// read or parsed, `Rejected` on a non-success status, `Unexpected` if the
/// request cannot be built.
pub async fn submit_auth(base: &str, request: &AuthRequest) -> Result<AuthReply, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request.endpoint(base);
        let resp = gloo_net::http::Request::post(&url)
            .json(&request.body())
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| AuthError::Decode(e.to_string()))?;
        interpret_auth_response(request.mode(), ok, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(AuthError::Unexpected("not available on server".to_owned()))
    }
}
