//! Page section wrapper

use leptos::prelude::*;

use super::cn;

/// Full-width `<section>` with the standard vertical rhythm.
#[component]
pub fn Section(
    /// Extra CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Anchor id for in-page links
    #[prop(optional, into)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=cn("section", class.as_deref())>
            {children()}
        </section>
    }
}
