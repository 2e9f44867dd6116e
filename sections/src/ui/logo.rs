//! Logo / value-proposition item

use leptos::prelude::*;

use super::Icon;
use crate::types::LogoItem;

/// Icon followed by a label, with optional version and badge tags.
#[component]
pub fn LogoView(logo: LogoItem) -> impl IntoView {
    let LogoItem {
        icon,
        name,
        version,
        badge,
        show_name,
    } = logo;
    let name_class = if show_name { "logo-name" } else { "sr-only" };
    let logo_key = name.clone();

    view! {
        <div class="logo-item" data-logo=logo_key data-icon=icon.as_str()>
            <Icon path=icon.path() size="24" class="logo-icon" />
            <span class=name_class>{name}</span>
            {version.map(|version| view! { <span class="logo-version">{version}</span> })}
            {badge.map(|badge| view! { <span class="logo-badge">{badge}</span> })}
        </div>
    }
}
