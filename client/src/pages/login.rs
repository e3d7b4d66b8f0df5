//! Login / signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `AuthFormState` and wires DOM events to its transitions. The
//! auth POST is the only suspension point: the form is `InFlight` while it
//! runs, so the submit button stays disabled and a second submission is
//! refused. Results arriving after the page unmounted are dropped.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::password_checklist::PasswordChecklist;
use crate::config::auth_base_url;
use crate::net::api::{OAuthProvider, oauth_endpoint};
use crate::state::auth_form::{AuthFormState, AuthMode};
use crate::util::auth::{SessionGate, install_landing_redirect, redirect_page};

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Signup => "Create an Account",
    }
}

fn identifier_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Email or Username",
        AuthMode::Signup => "Email",
    }
}

fn identifier_input_type(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "text",
        AuthMode::Signup => "email",
    }
}

fn submit_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign In",
        AuthMode::Signup => "Sign Up",
    }
}

/// `(question, link text)` for the mode switch.
fn switch_prompt(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Don't have an account?", "Sign up"),
        AuthMode::Signup => ("Already have an account?", "Log in"),
    }
}

fn oauth_verb(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign in",
        AuthMode::Signup => "Sign up",
    }
}

/// Where a provider button sends the browser.
fn provider_url(provider: OAuthProvider) -> String {
    oauth_endpoint(auth_base_url(), provider)
}

/// Send the whole browsing context to the provider's login start.
fn redirect_to_provider(provider: OAuthProvider) {
    redirect_page(&provider_url(provider));
}

/// Login page with a signup mode, password checklist and OAuth shortcuts.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new());
    let gate = RwSignal::new(SessionGate::Checking);
    install_landing_redirect(gate, use_navigate());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let mode = move || form.with(|f| f.mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(AuthFormState::begin_submit).and_then(Result::ok) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth_form::SubmitEffect;
            use crate::util::storage::BrowserStore;

            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_auth(auth_base_url(), &request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("auth submit failed: {e}");
                }
                let mut store = BrowserStore;
                let effect = form
                    .try_update(|f| f.finish_submit(result, &mut store))
                    .unwrap_or(SubmitEffect::None);

                match effect {
                    SubmitEffect::NavigateAfter { route, delay } => {
                        gloo_timers::future::sleep(delay).await;
                        if !alive.load(Ordering::Relaxed) {
                            return;
                        }
                        if !redirect_page(route) {
                            form.try_update(AuthFormState::abandon_redirect);
                        }
                    }
                    SubmitEffect::None => {
                        let Some(generation) = form.with_untracked(AuthFormState::active_notice) else {
                            return;
                        };
                        gloo_timers::future::sleep(crate::config::NOTICE_DURATION).await;
                        if alive.load(Ordering::Relaxed) {
                            form.try_update(|f| f.expire_notice(generation));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <Title text=move || form.with(|f| f.mode.page_title())/>
        <div class="login-page">
            <Show
                when=move || gate.get() == SessionGate::Anonymous
                fallback=|| view! { <p class="login-page__checking">"Loading..."</p> }
            >
                <div class="login-card">
                    <h1>{move || heading(mode())}</h1>
                    <form class="login-form" on:submit=on_submit.clone()>
                        <Show when=move || mode() == AuthMode::Signup>
                            <label class="login-label">
                                "Username"
                                <input
                                    class="login-input"
                                    type="text"
                                    required
                                    prop:value=move || form.with(|f| f.username.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.set_username(&value);
                                        });
                                    }
                                />
                            </label>
                        </Show>
                        <label class="login-label">
                            {move || identifier_label(mode())}
                            <input
                                class="login-input"
                                type=move || identifier_input_type(mode())
                                required
                                prop:value=move || form.with(|f| f.identifier.clone())
                                on:input=move |ev| form.update(|f| f.set_identifier(&event_target_value(&ev)))
                            />
                        </label>
                        <label class="login-label">
                            "Password"
                            <span class="login-password">
                                <input
                                    class="login-input"
                                    type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                    required
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.set_password(&event_target_value(&ev)))
                                    on:focus=move |_| form.update(AuthFormState::focus_password)
                                />
                                <button
                                    class="login-password__toggle"
                                    type="button"
                                    on:click=move |_| form.update(AuthFormState::toggle_password_visibility)
                                >
                                    {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                                </button>
                            </span>
                        </label>
                        <PasswordChecklist
                            criteria=Signal::derive(move || form.with(|f| f.criteria))
                            visible=Signal::derive(move || form.with(|f| f.checklist.is_shown()))
                        />
                        <Show when=move || form.with(|f| f.error.is_some())>
                            <p class="login-message login-message--error">
                                {move || form.with(|f| f.error.clone().unwrap_or_default())}
                            </p>
                        </Show>
                        <Show when=move || form.with(|f| f.notice.is_some())>
                            <p class="login-message login-message--notice">
                                {move || form.with(|f| f.notice.clone().unwrap_or_default())}
                            </p>
                        </Show>
                        <button
                            class="login-button"
                            type="submit"
                            disabled=move || !form.with(AuthFormState::can_submit)
                        >
                            {move || submit_label(mode())}
                        </button>
                        <p class="login-switch">
                            {move || switch_prompt(mode()).0}
                            " "
                            <button
                                class="login-switch__link"
                                type="button"
                                on:click=move |_| form.update(AuthFormState::toggle_mode)
                            >
                                {move || switch_prompt(mode()).1}
                            </button>
                        </p>
                        <div class="login-oauth">
                            <button
                                class="login-button login-button--google"
                                type="button"
                                on:click=move |_| redirect_to_provider(OAuthProvider::Google)
                            >
                                {move || format!("{} with Google", oauth_verb(mode()))}
                            </button>
                            <button
                                class="login-button login-button--github"
                                type="button"
                                on:click=move |_| redirect_to_provider(OAuthProvider::Github)
                            >
                                "GitHub"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
