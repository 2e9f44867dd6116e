//! Content types for the landing page sections.
//!
//! These types describe what a section shows. They're designed to be:
//!
//! - **Serializable** - a whole page can be described in JSON via serde
//! - **Clone-friendly** - components take owned values without borrowing issues
//! - **Tri-state aware** - optional parts use [`Slot`] so "keep the default"
//!   and "switch it off" are different values
//!
//! # Example
//!
//! ```rust
//! use launch_sections::types::{FaqItem, Slot};
//!
//! let items: Slot<Vec<FaqItem>> = vec![
//!     FaqItem::new("Do you ship MVPs?", ["Yes, in weeks."]),
//! ]
//! .into();
//! assert!(matches!(items, Slot::Custom(_)));
//!
//! let hidden: Slot<Vec<FaqItem>> = false.into();
//! assert!(hidden.is_off());
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ui::IconName;

/// Optional section content with an explicit "off" state.
///
/// | JSON            | Variant          | Meaning                         |
/// |-----------------|------------------|---------------------------------|
/// | field missing   | `Slot::Default`  | use the component's default     |
/// | `true`          | `Slot::Default`  | use the component's default     |
/// | `false`         | `Slot::Off`      | omit the part entirely          |
/// | any other value | `Slot::Custom`   | use the given value             |
///
/// Struct fields of this type need `#[serde(default)]` so a missing field
/// becomes `Slot::Default`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot<T> {
    /// Use the bundled default content.
    #[default]
    Default,
    /// Render nothing for this part.
    Off,
    /// Caller-provided content.
    Custom(T),
}

impl<T> Slot<T> {
    /// Resolve to the content to render, or `None` when switched off.
    pub fn resolve(self, default: impl FnOnce() -> T) -> Option<T> {
        match self {
            Slot::Default => Some(default()),
            Slot::Off => None,
            Slot::Custom(value) => Some(value),
        }
    }

    /// `true` for [`Slot::Default`].
    pub fn is_default(&self) -> bool {
        matches!(self, Slot::Default)
    }

    /// `true` for [`Slot::Off`].
    pub fn is_off(&self) -> bool {
        matches!(self, Slot::Off)
    }
}

impl<T> Slot<Vec<T>> {
    /// Like [`Slot::resolve`], but an empty list also means "omit".
    pub fn resolve_list(self, default: impl FnOnce() -> Vec<T>) -> Option<Vec<T>> {
        let explicit = matches!(self, Slot::Custom(_));
        let items = self.resolve(default)?;
        if items.is_empty() {
            if explicit {
                tracing::debug!("empty list supplied, section part suppressed");
            }
            return None;
        }
        Some(items)
    }
}

impl<T> From<bool> for Slot<T> {
    fn from(enabled: bool) -> Self {
        if enabled { Slot::Default } else { Slot::Off }
    }
}

impl<T> From<Vec<T>> for Slot<Vec<T>> {
    fn from(items: Vec<T>) -> Self {
        Slot::Custom(items)
    }
}

impl From<Badge> for Slot<Badge> {
    fn from(badge: Badge) -> Self {
        Slot::Custom(badge)
    }
}

impl From<Screenshot> for Slot<Screenshot> {
    fn from(shot: Screenshot) -> Self {
        Slot::Custom(shot)
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Default => serializer.serialize_bool(true),
            Slot::Off => serializer.serialize_bool(false),
            Slot::Custom(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Bool(true) => Ok(Slot::Default),
            serde_json::Value::Bool(false) => Ok(Slot::Off),
            value => T::deserialize(value)
                .map(Slot::Custom)
                .map_err(D::Error::custom),
        }
    }
}

/// Emphasis applied to a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    /// No emphasis
    #[default]
    Plain,
    /// Primary color
    Primary,
    /// Brand color
    Brand,
    /// Brand color, underlined
    BrandUnderline,
}

impl Accent {
    /// CSS class for the accent, `None` for plain text.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Accent::Plain => None,
            Accent::Primary => Some("text-primary"),
            Accent::Brand => Some("text-brand"),
            Accent::BrandUnderline => Some("text-brand underline"),
        }
    }
}

/// One run of [`RichText`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Text content
    pub text: String,
    /// Emphasis for this run
    #[serde(default)]
    pub accent: Accent,
}

impl TextSpan {
    /// Unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accent: Accent::Plain,
        }
    }

    /// Run with the given accent.
    pub fn accented(text: impl Into<String>, accent: Accent) -> Self {
        Self {
            text: text.into(),
            accent,
        }
    }
}

/// Heading or paragraph text, optionally split into accented runs.
///
/// Deserializes from either a JSON string or an array of spans:
///
/// ```rust
/// use launch_sections::types::RichText;
///
/// let plain: RichText = serde_json::from_str(r#""Hello""#).unwrap();
/// let spans: RichText =
///     serde_json::from_str(r#"[{"text": "Hi "}, {"text": "there", "accent": "primary"}]"#)
///         .unwrap();
/// assert_eq!(plain.plain_text(), "Hello");
/// assert_eq!(spans.plain_text(), "Hi there");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// Unstyled text
    Plain(String),
    /// Ordered runs with individual accents
    Spans(Vec<TextSpan>),
}

impl RichText {
    /// The text with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            RichText::Plain(text) => text.clone(),
            RichText::Spans(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }
}

impl Default for RichText {
    fn default() -> Self {
        RichText::Plain(String::new())
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::Plain(text.to_string())
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::Plain(text)
    }
}

impl From<Vec<TextSpan>> for RichText {
    fn from(spans: Vec<TextSpan>) -> Self {
        RichText::Spans(spans)
    }
}

/// A question/answer pair in the FAQ accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question shown in the row trigger
    pub question: String,
    /// Answer paragraphs, in order
    #[serde(default)]
    pub answer: Vec<String>,
    /// Explicit row identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FaqItem {
    /// Item without an explicit identifier.
    pub fn new<I, S>(question: impl Into<String>, answer: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            answer: answer.into_iter().map(Into::into).collect(),
            value: None,
        }
    }

    /// Set the explicit row identifier.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Row identifier: the explicit value, or `item-N` for the 1-based position.
    pub fn key(&self, index: usize) -> String {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => format!("item-{}", index + 1),
        }
    }
}

/// Visual style of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Filled primary button
    #[default]
    Default,
    /// Destructive action
    Destructive,
    /// Bordered, transparent fill
    Outline,
    /// Bordered with a soft glow
    Glow,
    /// Muted fill
    Secondary,
    /// No chrome until hover
    Ghost,
    /// Looks like a text link
    Link,
}

impl ButtonVariant {
    /// Stable tag used in `data-variant` and CSS class names.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Glow => "glow",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

/// Button size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    /// Regular height
    #[default]
    Default,
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Large, used by the hero
    Lg,
    /// Square, for icon-only buttons
    Icon,
}

impl ButtonSize {
    /// Suffix of the `btn-size-*` class.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Xs => "xs",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// A call-to-action link rendered as a button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    /// Link target
    pub href: String,
    /// Label
    pub text: String,
    /// Visual style
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Icon before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconName>,
    /// Icon after the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_right: Option<IconName>,
}

impl HeroButton {
    /// Default-variant button without icons.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the visual style.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the icon before the label.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the icon after the label.
    pub fn icon_right(mut self, icon: IconName) -> Self {
        self.icon_right = Some(icon);
        self
    }
}

/// Visual style of a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    /// Filled with the primary color
    #[default]
    Default,
    /// Muted fill
    Secondary,
    /// Red fill
    Destructive,
    /// Border only
    Outline,
}

impl BadgeVariant {
    /// Tag used in `data-badge` and the `badge-*` class.
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Trailing link inside a badge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeLink {
    /// Link label
    pub text: String,
    /// Link target
    pub href: String,
}

/// Small inline label, optionally followed by a link with an arrow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Visual style
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Muted leading label
    pub label: String,
    /// Optional trailing link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<BadgeLink>,
    /// Extra CSS classes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Badge {
    /// Badge with just a label.
    pub fn new(variant: BadgeVariant, label: impl Into<String>) -> Self {
        Self {
            variant,
            label: label.into(),
            link: None,
            class: None,
        }
    }

    /// Append a link after the label.
    pub fn with_link(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(BadgeLink {
            text: text.into(),
            href: href.into(),
        });
        self
    }

    /// Add extra classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Application screenshot, with an optional dark-mode source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// Image for light color scheme (and the fallback)
    pub src_light: String,
    /// Image for dark color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    /// Alt text
    pub alt: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

fn default_true() -> bool {
    true
}

/// One entry of the logo / value-proposition strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoItem {
    /// Icon shown before the name
    pub icon: IconName,
    /// Label
    pub name: String,
    /// Small version tag after the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Small badge after the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Whether the name is visible (it stays available to screen readers)
    #[serde(default = "default_true")]
    pub show_name: bool,
}

impl LogoItem {
    /// Visible name with no version or badge.
    pub fn new(icon: IconName, name: impl Into<String>) -> Self {
        Self {
            icon,
            name: name.into(),
            version: None,
            badge: None,
            show_name: true,
        }
    }
}
