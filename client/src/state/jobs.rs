//! Job feed state shared with the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feed itself is owned by whatever provides this context; the home page
//! only reads `items`/`loading` and edits `keyword`.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::JobRecord;

/// Jobs to render plus the active highlight keyword.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobsState {
    pub items: Vec<JobRecord>,
    pub loading: bool,
    pub keyword: String,
}

impl JobsState {
    /// Replace the feed and leave the loading state.
    pub fn load(&mut self, items: Vec<JobRecord>) {
        self.items = items;
        self.loading = false;
    }

    /// Keyword with surrounding whitespace removed. This is the only place
    /// the search box input is trimmed; `JobList` matches its `highlight`
    /// prop verbatim.
    pub fn highlight(&self) -> &str {
        self.keyword.trim()
    }
}
