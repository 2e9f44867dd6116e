//! Rich text rendering

use leptos::prelude::*;

use crate::types::RichText;

/// Renders [`RichText`] inline: plain runs as text, accented runs as `<span>`s.
#[component]
pub fn RichTextView(text: RichText) -> impl IntoView {
    match text {
        RichText::Plain(text) => view! { {text} }.into_any(),
        RichText::Spans(spans) => spans
            .into_iter()
            .map(|span| match span.accent.class() {
                Some(class) => view! { <span class=class>{span.text}</span> }.into_any(),
                None => view! { {span.text} }.into_any(),
            })
            .collect::<Vec<_>>()
            .into_any(),
    }
}
