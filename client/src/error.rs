//! Failure taxonomy for auth submissions.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable: the form renders `user_message()` inline and
//! returns to an editable state. Nothing here is ever surfaced as a panic.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when a rejection body carries no usable message.
pub const GENERIC_REJECTION_MESSAGE: &str = "An error occurred. Please try again.";

const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";
const DECODE_MESSAGE: &str = "Server response error. Please try again later.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Why an auth submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service answered with a non-success status; holds its message.
    #[error("rejected by auth service: {0}")]
    Rejected(String),
    /// The request never completed.
    #[error("network failure: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("undecodable response: {0}")]
    Decode(String),
    /// Anything else, e.g. the request could not be built.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Text to render inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Network(_) => NETWORK_MESSAGE.to_owned(),
            Self::Decode(_) => DECODE_MESSAGE.to_owned(),
            Self::Unexpected(_) => UNEXPECTED_MESSAGE.to_owned(),
        }
    }
}
