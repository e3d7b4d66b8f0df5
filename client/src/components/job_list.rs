//! Job listing grid: skeletons while loading, an empty state, or cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless between renders. The caller owns the data and the loading flag;
//! this module never fetches anything.

#[cfg(test)]
#[path = "job_list_test.rs"]
mod job_list_test;

use leptos::prelude::*;

use crate::components::job_card::{JobCard, JobCardView};
use crate::net::types::JobRecord;

/// Skeleton count when the caller does not pass a limit.
pub const DEFAULT_PLACEHOLDER_LIMIT: usize = 6;

pub const EMPTY_STATE_MESSAGE: &str = "No jobs found matching your criteria";

/// What the grid should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobListView {
    /// `n` skeleton placeholders.
    Loading(usize),
    Empty,
    Cards(Vec<JobCard>),
}

/// Decide the grid contents. While loading, `jobs` is not looked at.
pub fn plan_job_list(jobs: &[JobRecord], loading: bool, limit: usize) -> JobListView {
    if loading {
        return JobListView::Loading(limit);
    }
    if jobs.is_empty() {
        return JobListView::Empty;
    }
    JobListView::Cards(jobs.iter().map(JobCard::from_record).collect())
}

/// Job grid component.
#[component]
pub fn JobList(
    #[prop(into)] jobs: Signal<Vec<JobRecord>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = DEFAULT_PLACEHOLDER_LIMIT)] limit: usize,
    #[prop(into, default = Signal::stored(String::new()))] highlight: Signal<String>,
) -> impl IntoView {
    move || {
        let plan = if loading.get() {
            plan_job_list(&[], true, limit)
        } else {
            jobs.with(|items| plan_job_list(items, false, limit))
        };
        match plan {
            JobListView::Loading(count) => view! {
                <div class="job-list job-list--loading">
                    {(0..count).map(|_| view! { <div class="job-list__skeleton"></div> }).collect_view()}
                </div>
            }
            .into_any(),
            JobListView::Empty => view! {
                <div class="job-list job-list--empty">
                    <p class="job-list__empty">{EMPTY_STATE_MESSAGE}</p>
                </div>
            }
            .into_any(),
            JobListView::Cards(cards) => view! {
                <div class="job-list">
                    {cards
                        .into_iter()
                        .map(|card| view! { <JobCardView card=card highlight=highlight/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }
    }
}
