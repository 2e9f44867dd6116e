//! Logos strip: badge, heading and a wrapping row of value propositions.

use leptos::prelude::*;

use crate::config::LogosConfig;
use crate::defaults;
use crate::types::{Badge, LogoItem, RichText, Slot};
use crate::ui::{BadgeView, LogoView, RichTextView, Section, cn};

/// Centered heading over a row of logo items.
///
/// `badge = false` drops only the badge; `logos = false` (or empty) drops only
/// the row.
#[component]
pub fn Logos(
    #[prop(optional, into)] title: Option<RichText>,
    #[prop(optional, into)] badge: Slot<Badge>,
    #[prop(optional, into)] logos: Slot<Vec<LogoItem>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(defaults::logos_title);
    let badge = badge.resolve(defaults::logos_badge);
    let logos = logos.resolve_list(defaults::logos);

    view! {
        <Section class=cn("logos", class.as_deref())>
            <div class="container logos-inner">
                <div class="logos-heading">
                    {badge.map(|badge| view! { <BadgeView badge=badge /> })}
                    <h2 class="logos-title">
                        <RichTextView text=title />
                    </h2>
                </div>
                {logos.map(|logos| view! {
                    <div class="logos-row">
                        {logos
                            .into_iter()
                            .map(|logo| view! { <LogoView logo=logo /> })
                            .collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </Section>
    }
}

/// [`Logos`] built from a [`LogosConfig`].
pub fn logos_view(config: LogosConfig) -> impl IntoView {
    let LogosConfig {
        title,
        badge,
        logos,
        class,
    } = config;
    Logos(LogosProps {
        title,
        badge,
        logos,
        class,
    })
}
