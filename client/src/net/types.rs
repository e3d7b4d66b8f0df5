//! Wire DTOs for the job feed and the auth service.
//!
//! DESIGN
//! ======
//! Job records come from a loosely-typed upstream feed, so every field is
//! optional and defaults on absence; fallbacks are applied at render time by
//! `components::job_card`, never here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Skills as the feed sends them: usually a list, occasionally one string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Text(String),
}

impl Default for Skills {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A single job posting. Read-only render input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    /// Unique key for the posting.
    #[serde(rename = "_id")]
    pub id: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    /// Employment type badge (e.g. `"Contract"`).
    pub job_type: Option<String>,
    pub company: Option<String>,
    /// Logo URL for the hiring company.
    pub company_image: Option<String>,
    pub location: Option<String>,
    pub work_mode: Option<String>,
    pub experience: Option<String>,
    #[serde(deserialize_with = "deserialize_skills")]
    pub skills: Skills,
    /// ISO-8601 date or date-time.
    pub date_posted: Option<String>,
    pub apply_url: Option<String>,
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<Skills, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Skills>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Email or username, lowercased.
    pub identifier: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub username: String,
    /// Lowercased email.
    pub email: String,
    pub password: String,
}

/// Successful login response.
///
/// Only the token is required; the other artifacts are stored as sent, with
/// absent or `null` values stored as empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSession {
    pub token: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
