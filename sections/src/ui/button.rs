//! Link styled as a button

use leptos::prelude::*;

use super::cn;
use crate::types::{ButtonSize, ButtonVariant};

/// Anchor element carrying the button styling for `variant` and `size`.
///
/// Buttons on a landing page are always navigation, so there is no
/// `<button>` form of this component.
#[component]
pub fn Button(
    /// Link target
    #[prop(into)]
    href: String,
    /// Visual style
    #[prop(optional)]
    variant: ButtonVariant,
    /// Size preset
    #[prop(optional)]
    size: ButtonSize,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let base = format!("btn btn-{} btn-size-{}", variant.as_str(), size.as_str());
    view! {
        <a href=href class=cn(&base, class.as_deref()) data-variant=variant.as_str()>
            {children()}
        </a>
    }
}
