//! Site and page configuration.
//!
//! A page is described by [`PageContent`]: the site settings plus one config
//! per section. Every field is optional, so `{}` is a valid page that renders
//! entirely from the bundled defaults.
//!
//! ```json
//! {
//!   "site": { "get_started_url": "https://example.com/contact" },
//!   "hero": { "variant": "marquee", "images": ["/a.png", "/b.png"] },
//!   "logos": { "badge": false },
//!   "faq": { "items": [{ "question": "Why?", "answer": ["Because."] }] }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{Badge, FaqItem, HeroButton, LogoItem, RichText, Screenshot, Slot};
use crate::ui::RippleConfig;

/// Errors raised while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid page content JSON
    #[error("failed to parse {}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying JSON error, naming the offending value
        #[source]
        source: serde_json::Error,
    },
}

/// Site-wide settings shared by the sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used as the document title
    pub name: String,
    /// Canonical URL
    pub url: String,
    /// Target of the "talk to a specialist" links
    pub get_started_url: String,
    /// Document language
    pub lang: String,
    /// Meta description
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Launch UI".into(),
            url: "https://launchui.com".into(),
            get_started_url: "#contato".into(),
            lang: "pt-BR".into(),
            description: "Engenharia consultiva ágil e software sob medida.".into(),
        }
    }
}

/// FAQ section settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Section heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Question rows
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub items: Slot<Vec<FaqItem>>,
    /// Extra classes on the section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Mockup hero settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Main heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    /// Lead paragraph under the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
    /// Badge above the heading
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub badge: Slot<Badge>,
    /// Call-to-action buttons
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub buttons: Slot<Vec<HeroButton>>,
    /// Framed screenshot below the buttons
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub mockup: Slot<Screenshot>,
    /// Extra classes on the section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Image-marquee hero settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeHeroConfig {
    /// Main heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    /// Lead paragraph under the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
    /// Badge above the heading
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub badge: Slot<Badge>,
    /// Call-to-action buttons
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub buttons: Slot<Vec<HeroButton>>,
    /// Marquee sources; `None` uses the bundled showcase, `[]` hides the marquee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Background ripple grid
    pub ripple: RippleConfig,
    /// Extra classes on the section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Which hero to render.
///
/// Tagged by a `variant` field (`"mockup"` or `"marquee"`); an object without
/// the tag is a mockup hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum HeroVariant {
    /// Screenshot inside an application frame
    Mockup(HeroConfig),
    /// Animated image grid over a ripple background
    Marquee(MarqueeHeroConfig),
}

impl Default for HeroVariant {
    fn default() -> Self {
        HeroVariant::Mockup(HeroConfig::default())
    }
}

impl<'de> Deserialize<'de> for HeroVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const VARIANTS: &[&str] = &["mockup", "marquee"];

        let mut value = serde_json::Value::deserialize(deserializer)?;
        let tag = value.as_object_mut().and_then(|map| map.remove("variant"));
        let variant = match tag {
            None => None,
            Some(serde_json::Value::String(name)) => Some(name),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "hero variant must be a string, got {other}"
                )));
            }
        };

        match variant.as_deref() {
            None | Some("mockup") => HeroConfig::deserialize(value)
                .map(HeroVariant::Mockup)
                .map_err(D::Error::custom),
            Some("marquee") => MarqueeHeroConfig::deserialize(value)
                .map(HeroVariant::Marquee)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::unknown_variant(other, VARIANTS)),
        }
    }
}

/// Logos strip settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogosConfig {
    /// Heading above the row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    /// Badge above the heading
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub badge: Slot<Badge>,
    /// Logo items, in display order
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub logos: Slot<Vec<LogoItem>>,
    /// Extra classes on the section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// A whole landing page: hero, logos strip and FAQ, in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    /// Site-wide settings
    pub site: SiteConfig,
    /// Hero section, mockup or marquee
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub hero: Slot<HeroVariant>,
    /// Logos strip
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub logos: Slot<LogosConfig>,
    /// FAQ section
    #[serde(skip_serializing_if = "Slot::is_default")]
    pub faq: Slot<FaqConfig>,
}

impl PageContent {
    /// Parse page content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load page content from a JSON file.
pub fn load_page_content(path: impl AsRef<Path>) -> Result<PageContent, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = PageContent::from_json(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded page content");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_object_is_all_defaults() {
        let page = PageContent::from_json("{}").unwrap();
        assert_eq!(page, PageContent::default());
        assert_eq!(page.site.get_started_url, "#contato");
    }

    #[test]
    fn sections_can_be_switched_off() {
        let page = PageContent::from_json(r#"{"logos": false, "faq": {"items": false}}"#).unwrap();
        assert!(page.logos.is_off());
        match page.faq {
            Slot::Custom(faq) => assert!(faq.items.is_off()),
            other => panic!("expected custom faq, got {other:?}"),
        }
    }

    #[test]
    fn hero_variant_is_tagged() {
        let page = PageContent::from_json(
            r#"{"hero": {"variant": "marquee", "images": ["/a.png"], "badge": false}}"#,
        )
        .unwrap();
        match page.hero {
            Slot::Custom(HeroVariant::Marquee(hero)) => {
                assert_eq!(hero.images, Some(vec!["/a.png".to_string()]));
                assert!(hero.badge.is_off());
                assert_eq!(hero.ripple, RippleConfig::default());
            }
            other => panic!("expected marquee hero, got {other:?}"),
        }
    }

    #[test]
    fn hero_without_variant_is_mockup() {
        let page = PageContent::from_json(r#"{"hero": {"title": "Custom"}}"#).unwrap();
        match page.hero {
            Slot::Custom(HeroVariant::Mockup(hero)) => {
                assert_eq!(hero.title, Some(RichText::from("Custom")));
                assert!(hero.mockup.is_default());
            }
            other => panic!("expected mockup hero, got {other:?}"),
        }
    }

    #[test]
    fn hero_variant_round_trips_through_tag() {
        let hero = HeroVariant::Marquee(MarqueeHeroConfig {
            images: Some(vec!["/a.png".into()]),
            ..Default::default()
        });
        let json = serde_json::to_string(&hero).unwrap();
        assert!(json.contains(r#""variant":"marquee""#));
        assert_eq!(serde_json::from_str::<HeroVariant>(&json).unwrap(), hero);
    }

    #[test]
    fn unknown_hero_variant_is_rejected() {
        let err = PageContent::from_json(r#"{"hero": {"variant": "video"}}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown variant `video`"), "unexpected error: {message}");
    }

    #[test]
    fn malformed_item_error_names_the_problem() {
        let err = PageContent::from_json(r#"{"faq": {"items": [{"question": 1}]}}"#).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("invalid type: integer `1`, expected a string"),
            "unexpected error: {message}"
        );
    }

    #[test]
    fn load_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_page_content(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_page_content(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"site": {{"name": "Acme"}}}}"#).unwrap();
        let page = load_page_content(file.path()).unwrap();
        assert_eq!(page.site.name, "Acme");
        assert_eq!(page.site.lang, "pt-BR");
    }
}
