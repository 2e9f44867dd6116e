//! Decorative frames around hero imagery

use leptos::prelude::*;

use super::cn;
use crate::types::Screenshot;

/// Outer bezel around a [`Mockup`]. `size` is `"small"` or `"large"`.
#[component]
pub fn MockupFrame(
    #[prop(default = "small")] size: &'static str,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let base = format!("mockup-frame mockup-frame-{size}");
    view! { <div class=cn(&base, class.as_deref())>{children()}</div> }
}

/// Application-window chrome. `kind` is `"responsive"` or `"mobile"`.
#[component]
pub fn Mockup(
    #[prop(default = "responsive")] kind: &'static str,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let base = format!("mockup mockup-{kind}");
    view! { <div class=cn(&base, class.as_deref())>{children()}</div> }
}

/// Soft radial light behind the mockup.
#[component]
pub fn Glow(
    /// Placement: `"top"`, `"above"`, `"bottom"`, `"below"` or `"center"`
    #[prop(default = "top")]
    variant: &'static str,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let base = format!("glow glow-{variant}");
    view! {
        <div class=cn(&base, class.as_deref()) aria-hidden="true">
            <div class="glow-outer"></div>
            <div class="glow-inner"></div>
        </div>
    }
}

/// Screenshot that follows the visitor's color scheme when a dark source exists.
#[component]
pub fn ScreenshotView(shot: Screenshot, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let Screenshot {
        src_light,
        src_dark,
        alt,
        width,
        height,
    } = shot;

    view! {
        <picture class="screenshot">
            {src_dark.map(|src| view! {
                <source srcset=src media="(prefers-color-scheme: dark)" />
            })}
            <img
                src=src_light
                alt=alt
                width=width.to_string()
                height=height.to_string()
                class=cn("screenshot-image", class.as_deref())
            />
        </picture>
    }
}
