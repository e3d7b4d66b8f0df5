//! Signup password checklist panel.

#[cfg(test)]
#[path = "password_checklist_test.rs"]
mod password_checklist_test;

use leptos::prelude::*;

use crate::state::auth_form::PasswordCriteria;

/// Checklist rows as `(met, label)`, in display order.
pub fn checklist_items(criteria: PasswordCriteria) -> [(bool, &'static str); 3] {
    [
        (criteria.min_length, "At least 6 characters"),
        (criteria.has_uppercase, "One uppercase letter (A-Z)"),
        (criteria.has_special_char, "One special character (!@#$%^&*)"),
    ]
}

/// Collapsible list of password criteria. Collapsed until `visible` turns
/// true.
#[component]
pub fn PasswordChecklist(
    #[prop(into)] criteria: Signal<PasswordCriteria>,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="password-checklist" class:password-checklist--open=move || visible.get()>
            <ul>
                {move || {
                    checklist_items(criteria.get())
                        .into_iter()
                        .map(|(met, label)| {
                            view! {
                                <li class="password-checklist__item" class:password-checklist__item--met=met>
                                    <span class="password-checklist__mark" aria-hidden="true">
                                        {if met { "✓" } else { "✗" }}
                                    </span>
                                    <span>{label}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
