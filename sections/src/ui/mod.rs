//! Design-system primitives the sections are composed from.
//!
//! Everything here is presentational. The only stateful piece is
//! [`Accordion`], which keeps its single-open row selection in
//! [`AccordionState`].
//!
//! # Component Hierarchy
//!
//! ```text
//! Section
//! ├── BadgeView
//! ├── RichTextView
//! ├── Button
//! │   └── Icon
//! ├── Accordion
//! │   └── AccordionRow (per entry)
//! ├── MockupFrame
//! │   └── Mockup
//! │       └── ScreenshotView
//! ├── Glow
//! ├── LogoView
//! ├── ThreeDMarquee
//! └── BackgroundRipple
//! ```

mod accordion;
mod badge;
mod button;
mod icons;
mod logo;
mod marquee;
mod mockup;
mod ripple;
mod section;
mod text;

pub use accordion::{Accordion, AccordionEntry, AccordionState};
pub use badge::BadgeView;
pub use button::Button;
pub use icons::*;
pub use logo::LogoView;
pub use marquee::{MARQUEE_COLUMNS, ThreeDMarquee, marquee_columns};
pub use mockup::{Glow, Mockup, MockupFrame, ScreenshotView};
pub use ripple::{
    BackgroundRipple, MAX_RIPPLE_COLS, MAX_RIPPLE_ROWS, RIPPLE_STEP_MS, RippleCell, RippleConfig,
    ripple_delays,
};
pub use section::Section;
pub use text::RichTextView;

/// Join a base class list with an optional caller-supplied one.
pub(crate) fn cn(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}
