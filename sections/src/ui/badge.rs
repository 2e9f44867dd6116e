//! Badge component

use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, Icon, cn};
use crate::types::Badge;

/// Small pill label. When the badge carries a link, the label is muted and the
/// link follows it with a trailing arrow.
#[component]
pub fn BadgeView(badge: Badge) -> impl IntoView {
    let Badge {
        variant,
        label,
        link,
        class,
    } = badge;
    let base = format!("badge badge-{}", variant.as_str());

    let body = match link {
        Some(link) => view! {
            <span class="text-muted-foreground">{label}</span>
            <a href=link.href class="badge-link">
                {link.text}
                <Icon path=ICON_ARROW_RIGHT size="12" class="badge-link-icon" />
            </a>
        }
        .into_any(),
        None => view! { {label} }.into_any(),
    };

    view! {
        <div class=cn(&base, class.as_deref()) data-badge=variant.as_str()>
            {body}
        </div>
    }
}
