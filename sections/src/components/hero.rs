//! Hero banners.
//!
//! Two variants share the badge, heading and call-to-action group:
//! [`Hero`] closes with a framed screenshot, [`MarqueeHero`] with an
//! animated image grid over a ripple background.

use leptos::prelude::*;

use crate::config::{HeroConfig, MarqueeHeroConfig, SiteConfig};
use crate::defaults;
use crate::types::{Badge, ButtonSize, HeroButton, RichText, Screenshot, Slot};
use crate::ui::{
    BackgroundRipple, BadgeView, Button, Glow, Icon, Mockup, MockupFrame, RichTextView,
    RippleConfig, ScreenshotView, Section, ThreeDMarquee, cn,
};

#[component]
fn HeroHeading(title: RichText, description: RichText) -> impl IntoView {
    view! {
        <h1 class="hero-title animate-appear">
            <RichTextView text=title />
        </h1>
        <p class="hero-description animate-appear delay-100">
            <RichTextView text=description />
        </p>
    }
}

/// Call-to-action links in the order given.
#[component]
fn HeroButtons(buttons: Vec<HeroButton>) -> impl IntoView {
    let count = buttons.len().to_string();
    view! {
        <div class="hero-buttons animate-appear delay-300" data-button-count=count>
            {buttons
                .into_iter()
                .map(|button| {
                    let HeroButton {
                        href,
                        text,
                        variant,
                        icon,
                        icon_right,
                    } = button;
                    view! {
                        <Button href=href variant=variant size=ButtonSize::Lg>
                            {icon.map(|icon| view! {
                                <Icon path=icon.path() size="16" class="btn-icon" />
                            })}
                            {text}
                            {icon_right.map(|icon| view! {
                                <Icon path=icon.path() size="16" class="btn-icon-right" />
                            })}
                        </Button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Hero with a framed application screenshot.
#[component]
pub fn Hero(
    /// Heading; rich text or a plain string
    #[prop(optional, into)]
    title: Option<RichText>,
    #[prop(optional, into)] description: Option<RichText>,
    /// Screenshot under the buttons; `false` drops the mockup and its glow
    #[prop(optional, into)]
    mockup: Slot<Screenshot>,
    #[prop(optional, into)] badge: Slot<Badge>,
    /// Call-to-action links; `false` or empty drops the group
    #[prop(optional, into)]
    buttons: Slot<Vec<HeroButton>>,
    /// Supplies the contact link of the default badge
    #[prop(optional)]
    site: SiteConfig,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(defaults::hero_title);
    let description = description.unwrap_or_else(defaults::hero_description);
    let badge = badge.resolve(|| defaults::hero_badge(&site));
    let buttons = buttons.resolve_list(defaults::hero_buttons);
    let mockup = mockup.resolve(defaults::hero_mockup);

    view! {
        <Section class=cn("hero fade-bottom", class.as_deref())>
            <div class="container hero-inner">
                <div class="hero-content">
                    {badge.map(|badge| view! { <BadgeView badge=badge /> })}
                    <HeroHeading title=title description=description />
                    {buttons.map(|buttons| view! { <HeroButtons buttons=buttons /> })}
                    {mockup.map(|shot| view! {
                        <div class="hero-mockup">
                            <MockupFrame size="small" class="animate-appear delay-700">
                                <Mockup kind="responsive" class="mockup-surface">
                                    <ScreenshotView shot=shot class="w-full" />
                                </Mockup>
                            </MockupFrame>
                            <Glow variant="top" class="animate-appear-zoom delay-1000" />
                        </div>
                    })}
                </div>
            </div>
        </Section>
    }
}

/// Hero with a looping 3D image marquee over a ripple grid.
///
/// An empty image list renders the hero without the marquee.
#[component]
pub fn MarqueeHero(
    #[prop(optional, into)] title: Option<RichText>,
    #[prop(optional, into)] description: Option<RichText>,
    #[prop(optional, into)] badge: Slot<Badge>,
    #[prop(optional, into)] buttons: Slot<Vec<HeroButton>>,
    /// Marquee sources; defaults to the bundled showcase
    #[prop(optional, into)]
    images: Option<Vec<String>>,
    #[prop(optional)] ripple: RippleConfig,
    #[prop(optional)] site: SiteConfig,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(defaults::hero_title);
    let description = description.unwrap_or_else(defaults::hero_description);
    let badge = badge.resolve(|| defaults::hero_badge(&site));
    let buttons = buttons.resolve_list(defaults::hero_buttons);
    let images = images.unwrap_or_else(defaults::marquee_images);

    view! {
        <Section class=cn("hero hero-marquee", class.as_deref())>
            <BackgroundRipple config=ripple class="hero-ripple" />
            <div class="container hero-inner">
                <div class="hero-content">
                    {badge.map(|badge| view! { <BadgeView badge=badge /> })}
                    <HeroHeading title=title description=description />
                    {buttons.map(|buttons| view! { <HeroButtons buttons=buttons /> })}
                </div>
            </div>
            {(!images.is_empty()).then(move || view! {
                <div class="hero-marquee-stage">
                    <ThreeDMarquee images=images />
                </div>
            })}
        </Section>
    }
}

/// [`Hero`] built from a [`HeroConfig`].
pub fn hero_view(config: HeroConfig, site: SiteConfig) -> impl IntoView {
    let HeroConfig {
        title,
        description,
        badge,
        buttons,
        mockup,
        class,
    } = config;
    Hero(HeroProps {
        title,
        description,
        mockup,
        badge,
        buttons,
        site,
        class,
    })
}

/// [`MarqueeHero`] built from a [`MarqueeHeroConfig`].
pub fn marquee_hero_view(config: MarqueeHeroConfig, site: SiteConfig) -> impl IntoView {
    let MarqueeHeroConfig {
        title,
        description,
        badge,
        buttons,
        images,
        ripple,
        class,
    } = config;
    MarqueeHero(MarqueeHeroProps {
        title,
        description,
        badge,
        buttons,
        images,
        ripple,
        site,
        class,
    })
}
