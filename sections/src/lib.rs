//! # launch-sections
//!
//! Landing page sections for a software consultancy, written as
//! [Leptos](https://leptos.dev/) components: a Hero banner (screenshot mockup
//! or 3D image marquee), a Logos / value-proposition strip and an FAQ
//! accordion.
//!
//! Every prop has a default, so each section renders the bundled content out
//! of the box. Optional parts take a [`types::Slot`]: leave it out to keep the
//! default, pass `false` to omit the part, or pass your own value.
//!
//! ## Quick Start
//!
//! ```rust
//! use launch_sections::{render_page, config::PageContent};
//!
//! // All defaults
//! let html = render_page(&PageContent::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Same page without the FAQ
//! let content = PageContent::from_json(r#"{"faq": false}"#).unwrap();
//! let html = render_page(&content);
//! assert!(!html.contains(r#"class="faq-title"#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content types and the [`types::Slot`] tri-state
//! - [`ui`] - Design-system primitives (button, badge, accordion, marquee...)
//! - [`components`] - The sections and the page document
//! - [`config`] - Site settings and JSON page content
//! - [`defaults`] - Bundled default content
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Faq /> };
//! let html: String = view.to_html();
//! ```
//!
//! The same components mount unchanged in a client-side Leptos app, where the
//! accordion's toggle handlers become live.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod defaults;
pub mod styles;
pub mod types;
pub mod ui;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use tracing::debug;

use components::{PageDocument, faq_view, hero_view, logos_view, marquee_hero_view};
use config::{FaqConfig, HeroConfig, LogosConfig, MarqueeHeroConfig, PageContent, SiteConfig};

fn render_view<V: IntoView + 'static>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Render the FAQ section to an HTML fragment.
///
/// ```rust
/// use launch_sections::{render_faq, config::FaqConfig, types::Slot};
///
/// let html = render_faq(&FaqConfig { items: Slot::Off, ..Default::default() });
/// assert!(html.contains("Dúvidas frequentes"));
/// assert!(!html.contains("data-accordion"));
/// ```
pub fn render_faq(config: &FaqConfig) -> String {
    let config = config.clone();
    render_view(move || faq_view(config))
}

/// Render the mockup hero to an HTML fragment.
pub fn render_hero(config: &HeroConfig, site: &SiteConfig) -> String {
    let (config, site) = (config.clone(), site.clone());
    render_view(move || hero_view(config, site))
}

/// Render the image-marquee hero to an HTML fragment.
pub fn render_marquee_hero(config: &MarqueeHeroConfig, site: &SiteConfig) -> String {
    let (config, site) = (config.clone(), site.clone());
    render_view(move || marquee_hero_view(config, site))
}

/// Render the logos strip to an HTML fragment.
pub fn render_logos(config: &LogosConfig) -> String {
    let config = config.clone();
    render_view(move || logos_view(config))
}

/// Render the complete landing page, including `<!DOCTYPE html>`, inline CSS
/// and the accordion script.
pub fn render_page(content: &PageContent) -> String {
    let content = content.clone();
    let html = render_view(move || view! { <PageDocument content=content /> });
    debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Badge, BadgeVariant, ButtonVariant, FaqItem, HeroButton, LogoItem, Slot};
    use crate::ui::IconName;
    use pretty_assertions::assert_eq;

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect()
    }

    fn is_ascending(values: &[usize]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn faq_renders_bundled_items() {
        let html = render_faq(&FaqConfig::default());
        assert!(html.contains("Dúvidas frequentes"));
        assert!(html.contains(r#"data-accordion="single""#));
        assert_eq!(html.matches(r#"class="accordion-item""#).count(), 10);
        assert!(html.contains(r#"data-value="item-1""#));
        assert!(html.contains(r#"data-value="item-10""#));
    }

    #[test]
    fn faq_rows_follow_items_with_fallback_keys() {
        let config = FaqConfig {
            title: Some("Perguntas".into()),
            items: vec![
                FaqItem::new("Alpha question", ["a"]),
                FaqItem::new("Beta question", ["b"]).with_value("beta"),
                FaqItem::new("Gamma question", ["c"]),
            ]
            .into(),
            class: None,
        };
        let html = render_faq(&config);

        assert!(html.contains("Perguntas"));
        assert_eq!(html.matches(r#"class="accordion-item""#).count(), 3);
        let order = positions(&html, &["Alpha question", "Beta question", "Gamma question"]);
        assert!(is_ascending(&order));
        let keys = positions(
            &html,
            &[r#"data-value="item-1""#, r#"data-value="beta""#, r#"data-value="item-3""#],
        );
        assert!(is_ascending(&keys));
        assert!(!html.contains(r#"data-value="item-2""#));
    }

    #[test]
    fn config_helpers_render_like_bare_components() {
        use crate::components::{Faq, Logos};

        assert_eq!(render_faq(&FaqConfig::default()), render_view(|| view! { <Faq /> }));
        assert_eq!(render_logos(&LogosConfig::default()), render_view(|| view! { <Logos /> }));
    }

    #[test]
    fn faq_rows_start_collapsed() {
        let html = render_faq(&FaqConfig::default());
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 10);
        assert!(!html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn faq_off_or_empty_drops_accordion_but_keeps_title() {
        for items in [Slot::Off, Slot::Custom(Vec::new())] {
            let html = render_faq(&FaqConfig {
                items,
                ..Default::default()
            });
            assert!(html.contains("Dúvidas frequentes"));
            assert!(!html.contains("data-accordion"));
            assert!(!html.contains("accordion-item"));
        }
    }

    #[test]
    fn hero_renders_default_buttons_in_order() {
        let html = render_hero(&HeroConfig::default(), &SiteConfig::default());
        assert!(html.contains("seu processo"));
        assert!(html.contains(r#"data-button-count="2""#));
        let order = positions(&html, &[r##"href="#contato""##, r##"href="#processo""##]);
        assert!(is_ascending(&order));
        let variants = positions(&html, &[r#"data-variant="default""#, r#"data-variant="glow""#]);
        assert!(is_ascending(&variants));
        assert!(html.contains("mockup-frame"));
        assert!(html.contains("/dashboard-dark.png"));
    }

    #[test]
    fn hero_buttons_keep_label_target_and_variant() {
        let config = HeroConfig {
            buttons: vec![
                HeroButton::new("/docs", "Read docs").variant(ButtonVariant::Outline),
                HeroButton::new("/start", "Start now")
                    .variant(ButtonVariant::Secondary)
                    .icon(IconName::Rocket),
                HeroButton::new("/pricing", "Pricing").variant(ButtonVariant::Link),
            ]
            .into(),
            ..Default::default()
        };
        let html = render_hero(&config, &SiteConfig::default());

        assert!(html.contains(r#"data-button-count="3""#));
        assert!(is_ascending(&positions(&html, &["Read docs", "Start now", "Pricing"])));
        assert!(is_ascending(&positions(
            &html,
            &[r#"href="/docs""#, r#"href="/start""#, r#"href="/pricing""#],
        )));
        assert!(is_ascending(&positions(
            &html,
            &[
                r#"data-variant="outline""#,
                r#"data-variant="secondary""#,
                r#"data-variant="link""#,
            ],
        )));
        assert!(html.contains("btn-icon"));
    }

    #[test]
    fn hero_without_buttons_renders_no_group() {
        for buttons in [Slot::Off, Slot::Custom(Vec::new())] {
            let config = HeroConfig {
                buttons,
                ..Default::default()
            };
            let html = render_hero(&config, &SiteConfig::default());
            assert!(!html.contains("hero-buttons"));
            assert!(html.contains("hero-title"));
        }
    }

    #[test]
    fn hero_mockup_and_badge_can_be_switched_off() {
        let config = HeroConfig {
            mockup: Slot::Off,
            badge: Slot::Off,
            ..Default::default()
        };
        let html = render_hero(&config, &SiteConfig::default());
        assert!(!html.contains("mockup-frame"));
        assert!(!html.contains("glow-outer"));
        assert!(!html.contains("data-badge"));
    }

    #[test]
    fn hero_default_badge_links_to_site() {
        let site = SiteConfig {
            get_started_url: "https://example.com/talk".into(),
            ..Default::default()
        };
        let html = render_hero(&HeroConfig::default(), &site);
        assert!(html.contains("Engenharia consultiva ágil"));
        assert!(html.contains(r#"href="https://example.com/talk""#));
    }

    #[test]
    fn marquee_hero_renders_exactly_the_given_images() {
        let images: Vec<String> = ["/one.png", "/two.png", "/three.png"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let config = MarqueeHeroConfig {
            images: Some(images),
            ..Default::default()
        };
        let html = render_marquee_hero(&config, &SiteConfig::default());

        assert!(html.contains(r#"data-marquee-count="3""#));
        assert_eq!(html.matches(r#"class="marquee-image""#).count(), 3);
        assert!(is_ascending(&positions(&html, &["/one.png", "/two.png", "/three.png"])));
        assert!(html.contains("ripple-grid"));
    }

    #[test]
    fn marquee_hero_without_images_has_no_marquee() {
        let config = MarqueeHeroConfig {
            images: Some(Vec::new()),
            ..Default::default()
        };
        let html = render_marquee_hero(&config, &SiteConfig::default());
        assert!(!html.contains("data-marquee-count"));
        assert!(!html.contains("marquee-image"));
        assert!(html.contains("hero-title"));
    }

    #[test]
    fn marquee_hero_defaults_to_bundled_showcase() {
        let html = render_marquee_hero(&MarqueeHeroConfig::default(), &SiteConfig::default());
        let count = defaults::marquee_images().len();
        assert_eq!(html.matches(r#"class="marquee-image""#).count(), count);
        assert_eq!(html.matches(r#"class="ripple-cell""#).count(), 8 * 27);
    }

    #[test]
    fn marquee_hero_caps_ripple_grid() {
        let config = MarqueeHeroConfig {
            images: Some(Vec::new()),
            ripple: crate::ui::RippleConfig {
                rows: 100_000,
                cols: 100_000,
                cell_size: 56,
            },
            ..Default::default()
        };
        let html = render_marquee_hero(&config, &SiteConfig::default());
        assert_eq!(
            html.matches(r#"class="ripple-cell""#).count(),
            crate::ui::MAX_RIPPLE_ROWS * crate::ui::MAX_RIPPLE_COLS
        );
        assert!(html.contains("repeat(128, 56px)"));
    }

    #[test]
    fn logos_render_defaults() {
        let html = render_logos(&LogosConfig::default());
        assert!(html.contains("Consultoria e desenvolvimento ágil"));
        assert!(html.contains("Valor Tangível"));
        assert_eq!(html.matches(r#"class="logo-item""#).count(), 3);
        assert!(is_ascending(&positions(
            &html,
            &["MVP em semanas", "Foco em eficiência", "Ativos reais e customizados"],
        )));
    }

    #[test]
    fn logos_keep_order_and_count() {
        let config = LogosConfig {
            logos: vec![
                LogoItem::new(IconName::Rocket, "Zeta"),
                LogoItem::new(IconName::Clock, "Alpha"),
            ]
            .into(),
            badge: Badge::new(BadgeVariant::Secondary, "New").into(),
            ..Default::default()
        };
        let html = render_logos(&config);
        assert_eq!(html.matches(r#"class="logo-item""#).count(), 2);
        assert!(is_ascending(&positions(&html, &[r#"data-logo="Zeta""#, r#"data-logo="Alpha""#])));
        assert!(html.contains(r#"data-badge="secondary""#));
    }

    #[test]
    fn logos_badge_off_keeps_heading() {
        let html = render_logos(&LogosConfig {
            badge: Slot::Off,
            ..Default::default()
        });
        assert!(!html.contains("data-badge"));
        assert!(html.contains("logos-title"));
        assert!(html.contains("logos-row"));
    }

    #[test]
    fn logos_off_or_empty_drops_row_only() {
        for logos in [Slot::Off, Slot::Custom(Vec::new())] {
            let html = render_logos(&LogosConfig {
                logos,
                ..Default::default()
            });
            assert!(!html.contains("logos-row"));
            assert!(html.contains("logos-title"));
            assert!(html.contains("data-badge"));
        }
    }

    #[test]
    fn renders_full_default_page() {
        let html = render_page(&PageContent::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"lang="pt-BR""#));
        assert!(html.contains("<title>Launch UI</title>"));
        assert!(is_ascending(&positions(
            &html,
            &[r#"class="hero-title"#, r#"class="logos-title"#, r#"class="faq-title"#],
        )));
    }

    #[test]
    fn page_sections_can_be_switched_off() {
        let content = PageContent::from_json(r#"{"hero": false, "logos": false}"#).unwrap();
        let html = render_page(&content);
        assert!(!html.contains(r#"class="hero-title"#));
        assert!(!html.contains(r#"class="logos-title"#));
        assert!(html.contains(r#"class="faq-title"#));
    }

    #[test]
    fn page_can_use_marquee_hero() {
        let content =
            PageContent::from_json(r#"{"hero": {"variant": "marquee", "images": ["/x.png"]}}"#)
                .unwrap();
        let html = render_page(&content);
        assert!(html.contains(r#"data-marquee-count="1""#));
        assert!(!html.contains(r#"class="mockup-frame"#));
    }
}
