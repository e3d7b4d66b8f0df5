use super::*;

#[test]
fn labels_follow_mode() {
    assert_eq!(heading(AuthMode::Login), "Login");
    assert_eq!(heading(AuthMode::Signup), "Create an Account");
    assert_eq!(identifier_label(AuthMode::Login), "Email or Username");
    assert_eq!(identifier_label(AuthMode::Signup), "Email");
    assert_eq!(submit_label(AuthMode::Login), "Sign In");
    assert_eq!(submit_label(AuthMode::Signup), "Sign Up");
    assert_eq!(oauth_verb(AuthMode::Signup), "Sign up");
}

#[test]
fn identifier_input_is_email_only_at_signup() {
    assert_eq!(identifier_input_type(AuthMode::Login), "text");
    assert_eq!(identifier_input_type(AuthMode::Signup), "email");
}

#[test]
fn switch_prompt_offers_the_other_mode() {
    assert_eq!(switch_prompt(AuthMode::Login), ("Don't have an account?", "Sign up"));
    assert_eq!(switch_prompt(AuthMode::Signup), ("Already have an account?", "Log in"));
}

#[test]
fn provider_buttons_target_auth_service() {
    let base = auth_base_url();
    assert_eq!(provider_url(OAuthProvider::Google), format!("{base}/api/auth/google"));
    assert_eq!(provider_url(OAuthProvider::Github), format!("{base}/api/auth/github"));
}
