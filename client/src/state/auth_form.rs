//! Login/signup form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::login` holds one `AuthFormState` in an `RwSignal` and drives it
//! from DOM events. Every transition lives here as a plain method so the
//! whole flow (validation, payload building, response handling, storage
//! writes) is testable without a browser.
//!
//! DESIGN
//! ======
//! The submission lifecycle is a single `SubmitPhase` rather than loose
//! flags, so "submitting while already submitting" is unrepresentable; the
//! checklist visibility is a one-way latch.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::time::Duration;

use crate::config::{LANDING_ROUTE, LOGIN_REDIRECT_DELAY};
use crate::error::AuthError;
use crate::net::api::{AuthReply, AuthRequest};
use crate::net::types::{LoginPayload, SignupPayload};
use crate::state::session::{persist_login, remember_email};
use crate::util::storage::KeyValueStore;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Characters that satisfy the special-character criterion.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

pub const CRITERIA_UNMET_MESSAGE: &str = "Password must meet all the criteria.";
pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";
pub const SIGNUP_SUCCESS_NOTICE: &str = "Signup successful! You can now login.";

/// Which form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Document title for the mode.
    pub fn page_title(self) -> &'static str {
        match self {
            Self::Login => "Login Page",
            Self::Signup => "Signup Page",
        }
    }
}

/// Password checklist, derived from the current password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_special_char: bool,
}

impl PasswordCriteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_special_char: password.contains(SPECIAL_CHARS),
        }
    }

    pub fn all_met(self) -> bool {
        self.min_length && self.has_uppercase && self.has_special_char
    }
}

/// Monotonic flag: once shown, the checklist stays shown for the lifetime of
/// the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChecklistLatch(bool);

impl ChecklistLatch {
    pub fn trip(&mut self) {
        self.0 = true;
    }

    pub fn is_shown(self) -> bool {
        self.0
    }
}

/// Where the submission lifecycle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A request for the given mode is outstanding.
    InFlight(AuthMode),
    /// Login succeeded; waiting out the redirect delay.
    Redirecting,
}

/// Why `begin_submit` refused to produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not finished.
    Busy,
    /// Required fields are blank.
    Incomplete,
    /// Signup password misses a criterion.
    CriteriaUnmet,
}

/// Side effect the page must carry out after a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    None,
    NavigateAfter { route: &'static str, delay: Duration },
}

/// Whether `value` only uses characters allowed in usernames.
pub fn is_valid_username_input(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Complete form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    /// Email or username in login mode, email in signup mode.
    pub identifier: String,
    pub password: String,
    /// Signup only.
    pub username: String,
    pub criteria: PasswordCriteria,
    pub error: Option<String>,
    /// Transient success message.
    pub notice: Option<String>,
    /// Bumped every time `notice` is set, so a stale clear timer can tell
    /// its notice has been replaced.
    pub notice_generation: u64,
    pub checklist: ChecklistLatch,
    pub show_password: bool,
    pub phase: SubmitPhase,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(&mut self, value: &str) {
        value.clone_into(&mut self.identifier);
    }

    pub fn set_password(&mut self, value: &str) {
        value.clone_into(&mut self.password);
        self.criteria = PasswordCriteria::evaluate(value);
    }

    /// Accept the new username only if every character is `[A-Za-z0-9_]`.
    /// Returns `false` when the edit was dropped.
    pub fn set_username(&mut self, value: &str) -> bool {
        if !is_valid_username_input(value) {
            return false;
        }
        value.clone_into(&mut self.username);
        true
    }

    pub fn focus_password(&mut self) {
        self.checklist.trip();
    }

    /// Switch login <-> signup. Fields and errors are kept so a mistaken
    /// switch does not lose typed input.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    fn show_notice(&mut self, text: &str) {
        self.notice = Some(text.to_owned());
        self.notice_generation = self.notice_generation.wrapping_add(1);
    }

    /// Generation of the notice on screen, if any.
    pub fn active_notice(&self) -> Option<u64> {
        self.notice.as_ref().map(|_| self.notice_generation)
    }

    /// Clear the notice only if it is still the one from `generation`.
    pub fn expire_notice(&mut self, generation: u64) {
        if self.notice_generation == generation {
            self.notice = None;
        }
    }

    /// The post-login redirect could not be started; re-enable the form.
    pub fn abandon_redirect(&mut self) {
        if self.phase == SubmitPhase::Redirecting {
            self.phase = SubmitPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        !matches!(self.phase, SubmitPhase::Idle)
    }

    /// Field-level validity for the current mode.
    pub fn is_form_valid(&self) -> bool {
        let filled = |s: &str| !s.trim().is_empty();
        match self.mode {
            AuthMode::Login => filled(&self.identifier) && filled(&self.password),
            AuthMode::Signup => {
                filled(&self.username)
                    && filled(&self.identifier)
                    && filled(&self.password)
                    && self.criteria.all_met()
            }
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting()
    }

    /// Start a submission.
    ///
    /// Clears the previous error, re-checks the signup criteria and builds
    /// the request payload. On success the form is `InFlight` until
    /// `finish_submit` is called.
    ///
    /// # Errors
    ///
    /// Returns `SubmitBlocked` without touching the phase when a request is
    /// already outstanding or the form is not submittable.
    pub fn begin_submit(&mut self) -> Result<AuthRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::Busy);
        }
        self.error = None;
        self.notice = None;

        if self.mode == AuthMode::Signup && !self.criteria.all_met() {
            self.error = Some(CRITERIA_UNMET_MESSAGE.to_owned());
            return Err(SubmitBlocked::CriteriaUnmet);
        }
        if !self.is_form_valid() {
            return Err(SubmitBlocked::Incomplete);
        }

        let email = self.identifier.to_lowercase();
        let request = match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginPayload {
                identifier: email,
                password: self.password.clone(),
            }),
            AuthMode::Signup => AuthRequest::Signup(SignupPayload {
                username: self.username.clone(),
                email,
                password: self.password.clone(),
            }),
        };
        self.phase = SubmitPhase::InFlight(self.mode);
        Ok(request)
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Login success persists the session and asks for a delayed redirect.
    /// Signup success flips back to login with cleared fields and remembers
    /// the email. Failures only set the inline error. A call with no request
    /// outstanding is ignored.
    pub fn finish_submit(
        &mut self,
        result: Result<AuthReply, AuthError>,
        store: &mut impl KeyValueStore,
    ) -> SubmitEffect {
        let SubmitPhase::InFlight(mode) = self.phase else {
            return SubmitEffect::None;
        };
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(AuthReply::LoggedIn(session)) if mode == AuthMode::Login => {
                persist_login(store, &session);
                self.show_notice(LOGIN_SUCCESS_NOTICE);
                self.phase = SubmitPhase::Redirecting;
                SubmitEffect::NavigateAfter { route: LANDING_ROUTE, delay: LOGIN_REDIRECT_DELAY }
            }
            Ok(AuthReply::SignedUp) if mode == AuthMode::Signup => {
                remember_email(store, &self.identifier.to_lowercase());
                self.show_notice(SIGNUP_SUCCESS_NOTICE);
                self.mode = AuthMode::Login;
                self.identifier.clear();
                self.set_password("");
                self.username.clear();
                SubmitEffect::None
            }
            Ok(_) => {
                self.error = Some(AuthError::Decode("reply does not match request mode".to_owned()).user_message());
                SubmitEffect::None
            }
            Err(err) => {
                self.error = Some(err.user_message());
                SubmitEffect::None
            }
        }
    }
}
