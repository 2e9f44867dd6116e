//! # launch-render
//!
//! Renders the landing page sections to a static HTML document.
//!
//! ## Usage
//!
//! ```bash
//! # All defaults, to stdout
//! launch-render
//!
//! # Page content from JSON, written to a file
//! launch-render --content page.json --out public/index.html
//!
//! # Force the image-marquee hero
//! launch-render --hero marquee --out index.html
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use launch_sections::config::{HeroConfig, HeroVariant, MarqueeHeroConfig, PageContent, load_page_content};
use launch_sections::render_page;
use launch_sections::types::Slot;

#[derive(Parser, Debug)]
#[command(name = "launch-render")]
#[command(about = "Render the landing page sections to static HTML")]
#[command(version)]
struct Args {
    /// Page content JSON file (defaults apply to everything it leaves out)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Hero variant to render, overriding the content file
    #[arg(long, value_enum)]
    hero: Option<HeroKind>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeroKind {
    Mockup,
    Marquee,
}

/// Switch the page's hero to `kind`, carrying over the shared fields.
/// A switched-off hero stays off.
fn with_hero_kind(mut content: PageContent, kind: HeroKind) -> PageContent {
    content.hero = match (content.hero, kind) {
        (Slot::Off, _) => Slot::Off,
        (Slot::Default, HeroKind::Mockup) => Slot::Default,
        (Slot::Default, HeroKind::Marquee) => {
            Slot::Custom(HeroVariant::Marquee(MarqueeHeroConfig::default()))
        }
        (Slot::Custom(HeroVariant::Marquee(hero)), HeroKind::Mockup) => {
            Slot::Custom(HeroVariant::Mockup(HeroConfig {
                title: hero.title,
                description: hero.description,
                badge: hero.badge,
                buttons: hero.buttons,
                class: hero.class,
                ..Default::default()
            }))
        }
        (Slot::Custom(HeroVariant::Mockup(hero)), HeroKind::Marquee) => {
            Slot::Custom(HeroVariant::Marquee(MarqueeHeroConfig {
                title: hero.title,
                description: hero.description,
                badge: hero.badge,
                buttons: hero.buttons,
                class: hero.class,
                ..Default::default()
            }))
        }
        (same, _) => same,
    };
    content
}

fn run(args: Args) -> Result<()> {
    let mut content = match &args.content {
        Some(path) => load_page_content(path)
            .with_context(|| format!("Failed to load page content from {}", path.display()))?,
        None => {
            debug!("no content file given, rendering defaults");
            PageContent::default()
        }
    };

    if let Some(kind) = args.hero {
        content = with_hero_kind(content, kind);
    }

    let html = render_page(&content);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for the page itself
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("launch-render v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[launch-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_sections::types::{Badge, BadgeVariant};

    fn args(content: Option<PathBuf>, out: Option<PathBuf>, hero: Option<HeroKind>) -> Args {
        Args {
            content,
            out,
            hero,
            log_level: "info".into(),
        }
    }

    #[test]
    fn default_hero_switches_to_marquee() {
        let content = with_hero_kind(PageContent::default(), HeroKind::Marquee);
        assert!(matches!(content.hero, Slot::Custom(HeroVariant::Marquee(_))));
    }

    #[test]
    fn switched_off_hero_stays_off() {
        let content = PageContent {
            hero: Slot::Off,
            ..Default::default()
        };
        assert!(with_hero_kind(content, HeroKind::Marquee).hero.is_off());
    }

    #[test]
    fn shared_fields_survive_variant_switch() {
        let badge = Badge::new(BadgeVariant::Secondary, "Beta");
        let content = PageContent {
            hero: Slot::Custom(HeroVariant::Mockup(HeroConfig {
                title: Some("Custom title".into()),
                badge: badge.clone().into(),
                mockup: Slot::Off,
                ..Default::default()
            })),
            ..Default::default()
        };
        match with_hero_kind(content, HeroKind::Marquee).hero {
            Slot::Custom(HeroVariant::Marquee(hero)) => {
                assert_eq!(hero.title, Some("Custom title".into()));
                assert_eq!(hero.badge, Slot::Custom(badge));
                assert_eq!(hero.images, None);
            }
            other => panic!("expected marquee hero, got {other:?}"),
        }
    }

    #[test]
    fn run_writes_page_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let content_path = dir.path().join("page.json");
        std::fs::write(&content_path, r#"{"site": {"name": "Acme"}, "faq": false}"#).unwrap();
        let out = dir.path().join("public/index.html");

        run(args(Some(content_path), Some(out.clone()), None)).unwrap();

        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme</title>"));
        assert!(!html.contains(r#"class="faq-title"#));
    }

    #[test]
    fn run_reports_missing_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = run(args(Some(missing), Some(dir.path().join("out.html")), None)).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }
}
