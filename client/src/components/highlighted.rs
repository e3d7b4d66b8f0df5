//! Inline text with keyword matches wrapped in `<mark>`.

use leptos::prelude::*;

use crate::util::text::highlight_segments;

/// Render `text`, marking every case-insensitive occurrence of `keyword`.
#[component]
pub fn Highlighted(text: String, #[prop(into)] keyword: Signal<String>) -> impl IntoView {
    move || {
        keyword
            .with(|k| highlight_segments(&text, k))
            .into_iter()
            .map(|segment| {
                if segment.matched {
                    view! { <mark class="highlight">{segment.text}</mark> }.into_any()
                } else {
                    segment.text.into_any()
                }
            })
            .collect_view()
    }
}
