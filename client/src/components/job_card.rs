//! Job card view model and component.
//!
//! DESIGN
//! ======
//! `JobCard::from_record` applies every fallback up front, so the component
//! renders plain strings and can never fail on a sparse record.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::components::highlighted::Highlighted;
use crate::net::types::{JobRecord, Skills};
use crate::util::text::{DESCRIPTION_WORD_LIMIT, format_posted_date, truncate_words};

/// Logo shown when a company has none or its logo fails to load.
pub const FALLBACK_LOGO_URL: &str = "https://assets.hongkiat.com/uploads/psd-text-svg/logo-example.jpg";

/// Skills listed on a card.
pub const SKILLS_SHOWN: usize = 3;

/// Display-ready card fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCard {
    pub id: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub title: String,
    pub job_type: String,
    pub description: String,
    pub location: String,
    pub work_mode: String,
    pub experience: String,
    pub skills: String,
    pub posted: String,
    pub apply_url: String,
}

fn or_default(value: Option<&String>, fallback: &str) -> String {
    value
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

impl JobCard {
    pub fn from_record(job: &JobRecord) -> Self {
        let skills = match &job.skills {
            Skills::List(items) => items.iter().take(SKILLS_SHOWN).cloned().collect::<Vec<_>>().join(", "),
            Skills::Text(text) => text.clone(),
        };
        Self {
            id: job.id.clone(),
            logo_url: or_default(job.company_image.as_ref(), FALLBACK_LOGO_URL),
            logo_alt: or_default(job.company.as_ref(), "Company Logo"),
            title: or_default(job.job_title.as_ref(), "Job Title"),
            job_type: or_default(job.job_type.as_ref(), "Full-time"),
            description: truncate_words(job.job_description.as_deref().unwrap_or_default(), DESCRIPTION_WORD_LIMIT),
            location: or_default(job.location.as_ref(), "Remote"),
            work_mode: or_default(job.work_mode.as_ref(), "Full-time"),
            experience: or_default(job.experience.as_ref(), "Any level"),
            skills,
            posted: format_posted_date(job.date_posted.as_deref()),
            apply_url: or_default(job.apply_url.as_ref(), "#"),
        }
    }
}

/// Current logo source with a one-shot fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoSource {
    url: String,
    fell_back: bool,
}

impl LogoSource {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_owned(), fell_back: url == FALLBACK_LOGO_URL }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handle an image load failure. Switches to the fallback the first time
    /// and ignores every later failure, so a broken fallback cannot loop.
    /// Returns whether the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        FALLBACK_LOGO_URL.clone_into(&mut self.url);
        true
    }
}

/// One job posting.
#[component]
pub fn JobCardView(card: JobCard, #[prop(into)] highlight: Signal<String>) -> impl IntoView {
    let logo = RwSignal::new(LogoSource::new(&card.logo_url));
    let on_logo_error = move |_| {
        logo.update(|l| {
            l.on_error();
        });
    };
    let field = move |text: String| view! { <Highlighted text=text keyword=highlight/> };

    view! {
        <article class="job-card">
            <div class="job-card__logo">
                <img src=move || logo.with(|l| l.url().to_owned()) alt=card.logo_alt on:error=on_logo_error/>
            </div>
            <div class="job-card__body">
                <div class="job-card__header">
                    <h3 class="job-card__title">{field(card.title)}</h3>
                    <span class="job-card__type">{field(card.job_type)}</span>
                </div>
                <p class="job-card__description">{field(card.description)}</p>
                <div class="job-card__meta">
                    <span class="job-card__location">{field(card.location)}</span>
                    <span class="job-card__work-mode">{field(card.work_mode)}</span>
                    <span class="job-card__experience">{field(card.experience)} " experience"</span>
                    <span class="job-card__skills">{field(card.skills)}</span>
                    <span class="job-card__posted">{card.posted}</span>
                </div>
                <div class="job-card__actions">
                    <a class="job-card__apply" href=card.apply_url target="_blank" rel="noopener noreferrer">
                        "Apply Now"
                    </a>
                </div>
            </div>
        </article>
    }
}
