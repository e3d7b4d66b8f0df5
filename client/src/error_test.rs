use super::*;

#[test]
fn rejected_shows_server_text_verbatim() {
    let err = AuthError::Rejected("Invalid credentials".to_owned());
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn transport_and_decode_failures_use_generic_text() {
    assert_eq!(
        AuthError::Network("TypeError: failed to fetch".to_owned()).user_message(),
        "Network error. Please check your connection and try again."
    );
    assert_eq!(
        AuthError::Decode("expected value at line 1".to_owned()).user_message(),
        "Server response error. Please try again later."
    );
    assert_eq!(
        AuthError::Unexpected("boom".to_owned()).user_message(),
        "An unexpected error occurred. Please try again."
    );
}

#[test]
fn display_keeps_the_underlying_detail_for_logs() {
    let err = AuthError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network failure: connection refused");
}
