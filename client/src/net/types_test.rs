use super::*;

#[test]
fn job_record_reads_mongo_style_id_and_skill_list() {
    let job: JobRecord = serde_json::from_value(serde_json::json!({
        "_id": "65a1",
        "job_title": "Rust Engineer",
        "skills": ["rust", "wasm", "leptos", "sql"],
        "date_posted": "2024-01-05T09:30:00Z"
    }))
    .unwrap();
    assert_eq!(job.id, "65a1");
    assert_eq!(job.job_title.as_deref(), Some("Rust Engineer"));
    assert_eq!(
        job.skills,
        Skills::List(vec!["rust".into(), "wasm".into(), "leptos".into(), "sql".into()])
    );
    assert_eq!(job.date_posted.as_deref(), Some("2024-01-05T09:30:00Z"));
}

#[test]
fn job_record_accepts_skills_as_single_string() {
    let job: JobRecord = serde_json::from_str(r#"{"_id":"x","skills":"Go, Python"}"#).unwrap();
    assert_eq!(job.skills, Skills::Text("Go, Python".to_owned()));
}

#[test]
fn job_record_defaults_every_missing_field() {
    let job: JobRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(job, JobRecord::default());
    assert_eq!(job.skills, Skills::List(Vec::new()));
    assert!(job.apply_url.is_none());
}

#[test]
fn signup_payload_serializes_expected_keys() {
    let payload = SignupPayload {
        username: "ada_l".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Abc12!".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"username": "ada_l", "email": "ada@example.com", "password": "Abc12!"})
    );
}

#[test]
fn login_session_needs_only_a_token() {
    let session: LoginSession = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
    assert_eq!(session.token, "t");
    assert_eq!(session.username, "");
    assert_eq!(session.email, "");

    let nulls: LoginSession =
        serde_json::from_str(r#"{"token":"t","username":null,"email":"a@b.c"}"#).unwrap();
    assert_eq!(nulls.username, "");
    assert_eq!(nulls.email, "a@b.c");
}

#[test]
fn login_session_without_token_is_rejected() {
    assert!(serde_json::from_str::<LoginSession>(r#"{"username":"u","email":"e"}"#).is_err());
}

#[test]
fn job_record_treats_null_skills_as_empty() {
    let job: JobRecord = serde_json::from_str(r#"{"_id":"y","skills":null}"#).unwrap();
    assert_eq!(job.skills, Skills::default());
}
