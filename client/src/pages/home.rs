//! Authenticated landing page: keyword search over the job grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the job feed from the `RwSignal<JobsState>` context provided by
//! `App`. Visitors without a stored token are sent to `/login`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::job_list::JobList;
use crate::state::jobs::JobsState;
use crate::state::session::clear_session;
use crate::config::LOGIN_ROUTE;
use crate::util::auth::{SessionGate, install_unauth_redirect, redirect_page};
use crate::util::storage::{BrowserStore, KeyValueStore, keys};

/// Home page listing jobs with keyword highlighting.
#[component]
pub fn HomePage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let gate = RwSignal::new(SessionGate::Checking);
    install_unauth_redirect(gate, use_navigate());

    let greeting = RwSignal::new(String::new());
    Effect::new(move || {
        if gate.get() == SessionGate::Authenticated {
            greeting.set(BrowserStore.get(keys::USERNAME).unwrap_or_default());
        }
    });

    let on_logout = move |_| {
        clear_session(&mut BrowserStore);
        redirect_page(LOGIN_ROUTE);
    };

    view! {
        <Title text="Jobs"/>
        <Show
            when=move || gate.get() == SessionGate::Authenticated
            fallback=|| view! { <div class="home-page"><p>"Loading..."</p></div> }
        >
            <div class="home-page">
                <header class="home-page__header">
                    <span class="home-page__greeting">
                        {move || {
                            let name = greeting.get();
                            if name.is_empty() { "Welcome".to_owned() } else { format!("Welcome, {name}") }
                        }}
                    </span>
                    <input
                        class="home-page__search"
                        type="search"
                        placeholder="Search keyword"
                        prop:value=move || jobs.with(|s| s.keyword.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            jobs.update(|s| s.keyword = value);
                        }
                    />
                    <button class="btn home-page__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <JobList
                    jobs=Signal::derive(move || jobs.with(|s| s.items.clone()))
                    loading=Signal::derive(move || jobs.with(|s| s.loading))
                    highlight=Signal::derive(move || jobs.with(|s| s.highlight().to_owned()))
                />
            </div>
        </Show>
    }
}
