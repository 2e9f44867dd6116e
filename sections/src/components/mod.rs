//! Landing page sections.
//!
//! Each section is a Leptos `#[component]` whose props all have defaults,
//! so `view! { <Faq /> }` renders the bundled content. Optional parts take a
//! [`Slot`](crate::types::Slot): leave the prop out for the default, pass
//! `false` to omit the part, or pass a value to replace it.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Hero | MarqueeHero
//! │   ├── BadgeView
//! │   ├── HeroHeading
//! │   ├── HeroButtons
//! │   └── MockupFrame + Glow | BackgroundRipple + ThreeDMarquee
//! ├── Logos
//! │   ├── BadgeView
//! │   └── LogoView (per item)
//! └── Faq
//!     └── Accordion
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use launch_sections::components::{Faq, Hero, Logos};
//!
//! view! {
//!     <Hero buttons=false />
//!     <Logos badge=false />
//!     <Faq title="Perguntas" />
//! }
//! ```

mod document;
mod faq;
mod hero;
mod logos;

pub use document::{PageDocument, PageSections};
pub use faq::{Faq, faq_view};
pub use hero::{Hero, MarqueeHero, hero_view, marquee_hero_view};
pub use logos::{Logos, logos_view};
