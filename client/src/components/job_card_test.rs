use super::*;

fn words(n: usize) -> String {
    (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn sparse_record_gets_every_fallback() {
    let card = JobCard::from_record(&JobRecord { id: "j1".to_owned(), ..JobRecord::default() });
    assert_eq!(card.id, "j1");
    assert_eq!(card.logo_url, FALLBACK_LOGO_URL);
    assert_eq!(card.logo_alt, "Company Logo");
    assert_eq!(card.title, "Job Title");
    assert_eq!(card.job_type, "Full-time");
    assert_eq!(card.description, "");
    assert_eq!(card.location, "Remote");
    assert_eq!(card.work_mode, "Full-time");
    assert_eq!(card.experience, "Any level");
    assert_eq!(card.skills, "");
    assert_eq!(card.posted, "Recently posted");
    assert_eq!(card.apply_url, "#");
}

#[test]
fn full_record_is_formatted() {
    let job = JobRecord {
        id: "j2".to_owned(),
        job_title: Some("Backend Engineer".to_owned()),
        job_description: Some(words(40)),
        job_type: Some("Contract".to_owned()),
        company: Some("Acme".to_owned()),
        company_image: Some("https://cdn.example.com/acme.png".to_owned()),
        location: Some("Berlin".to_owned()),
        work_mode: Some("Hybrid".to_owned()),
        experience: Some("3+ years".to_owned()),
        skills: Skills::List(vec!["Rust".into(), "SQL".into(), "Kafka".into(), "AWS".into()]),
        date_posted: Some("2024-01-05".to_owned()),
        apply_url: Some("https://jobs.example.com/2".to_owned()),
    };
    let card = JobCard::from_record(&job);
    assert_eq!(card.logo_url, "https://cdn.example.com/acme.png");
    assert_eq!(card.logo_alt, "Acme");
    assert_eq!(card.description, format!("{}...", words(30)));
    assert_eq!(card.skills, "Rust, SQL, Kafka");
    assert_eq!(card.posted, "Jan 5, 2024");
    assert_eq!(card.apply_url, "https://jobs.example.com/2");
}

#[test]
fn skills_string_is_shown_as_is() {
    let job = JobRecord { skills: Skills::Text("Go, Python, C, Java".to_owned()), ..JobRecord::default() };
    assert_eq!(JobCard::from_record(&job).skills, "Go, Python, C, Java");
}

#[test]
fn empty_strings_count_as_missing() {
    let job = JobRecord {
        apply_url: Some(String::new()),
        location: Some(String::new()),
        ..JobRecord::default()
    };
    let card = JobCard::from_record(&job);
    assert_eq!(card.apply_url, "#");
    assert_eq!(card.location, "Remote");
}

#[test]
fn logo_falls_back_exactly_once() {
    let mut logo = LogoSource::new("https://broken.example.com/x.png");
    assert!(logo.on_error());
    assert_eq!(logo.url(), FALLBACK_LOGO_URL);
    assert!(!logo.on_error());
    assert!(!logo.on_error());
    assert_eq!(logo.url(), FALLBACK_LOGO_URL);
}

#[test]
fn logo_starting_at_fallback_never_retries() {
    let mut logo = LogoSource::new(FALLBACK_LOGO_URL);
    assert!(!logo.on_error());
}
