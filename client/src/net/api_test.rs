use super::*;

const BASE: &str = "https://auth.example.com";

fn login_request() -> AuthRequest {
    AuthRequest::Login(LoginPayload {
        identifier: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
    })
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(BASE), "https://auth.example.com/api/auth/login");
    assert_eq!(signup_endpoint(BASE), "https://auth.example.com/api/auth/signup");
    assert_eq!(
        oauth_endpoint(BASE, OAuthProvider::Google),
        "https://auth.example.com/api/auth/google"
    );
    assert_eq!(
        oauth_endpoint(BASE, OAuthProvider::Github),
        "https://auth.example.com/api/auth/github"
    );
}

#[test]
fn request_routes_by_mode() {
    let login = login_request();
    assert_eq!(login.mode(), AuthMode::Login);
    assert_eq!(login.endpoint(BASE), login_endpoint(BASE));
    assert_eq!(
        login.body(),
        serde_json::json!({"identifier": "ada@example.com", "password": "secret"})
    );

    let signup = AuthRequest::Signup(SignupPayload {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Abc12!".to_owned(),
    });
    assert_eq!(signup.mode(), AuthMode::Signup);
    assert_eq!(signup.endpoint(BASE), signup_endpoint(BASE));
}

#[test]
fn error_field_wins() {
    let body = serde_json::json!({"error": "Invalid credentials", "message": "ignored"});
    assert_eq!(extract_error_message(&body), "Invalid credentials");
}

#[test]
fn message_field_used_when_error_missing() {
    let body = serde_json::json!({"message": "User already exists"});
    assert_eq!(extract_error_message(&body), "User already exists");
}

#[test]
fn first_validation_entry_msg_is_used() {
    let body = serde_json::json!({"errors": [{"msg": "Email required"}, {"msg": "second"}]});
    assert_eq!(extract_error_message(&body), "Email required");
}

#[test]
fn first_validation_entry_may_be_plain_string() {
    let body = serde_json::json!({"errors": ["Password too short"]});
    assert_eq!(extract_error_message(&body), "Password too short");
}

#[test]
fn string_body_is_used_verbatim() {
    assert_eq!(extract_error_message(&serde_json::json!("Too many requests")), "Too many requests");
}

#[test]
fn unknown_shape_falls_back_to_generic_message() {
    assert_eq!(extract_error_message(&serde_json::json!({"errors": []})), GENERIC_REJECTION_MESSAGE);
    assert_eq!(extract_error_message(&serde_json::json!({"error": ""})), GENERIC_REJECTION_MESSAGE);
    assert_eq!(extract_error_message(&serde_json::json!(42)), GENERIC_REJECTION_MESSAGE);
}

#[test]
fn failed_login_surfaces_server_message() {
    let err = interpret_auth_response(AuthMode::Login, false, r#"{"error":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, AuthError::Rejected("Invalid credentials".to_owned()));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn unparseable_body_is_a_decode_error() {
    let err = interpret_auth_response(AuthMode::Login, false, "<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
    assert_eq!(err.user_message(), "Server response error. Please try again later.");
}

#[test]
fn successful_login_decodes_session() {
    let reply = interpret_auth_response(
        AuthMode::Login,
        true,
        r#"{"token":"jwt.abc","username":"ada","email":"ada@example.com","extra":1}"#,
    )
    .unwrap();
    assert_eq!(
        reply,
        AuthReply::LoggedIn(LoginSession {
            token: "jwt.abc".to_owned(),
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
        })
    );
}

#[test]
fn successful_login_tolerates_missing_or_null_profile_fields() {
    let reply = interpret_auth_response(AuthMode::Login, true, r#"{"token":"t","email":"a@b.c"}"#).unwrap();
    assert_eq!(
        reply,
        AuthReply::LoggedIn(LoginSession {
            token: "t".to_owned(),
            username: String::new(),
            email: "a@b.c".to_owned(),
        })
    );

    let reply =
        interpret_auth_response(AuthMode::Login, true, r#"{"token":"t","username":null,"email":null}"#).unwrap();
    assert!(matches!(reply, AuthReply::LoggedIn(session) if session.username.is_empty() && session.email.is_empty()));
}

#[test]
fn successful_login_without_token_is_a_decode_error() {
    let err = interpret_auth_response(AuthMode::Login, true, r#"{"username":"ada"}"#).unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
}

#[test]
fn successful_signup_ignores_body_shape() {
    let reply = interpret_auth_response(AuthMode::Signup, true, r#"{"message":"created"}"#).unwrap();
    assert_eq!(reply, AuthReply::SignedUp);
}

