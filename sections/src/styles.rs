//! CSS styles for the landing page.
//!
//! The sections only emit class names; this stylesheet gives them their look
//! when the page is rendered as a standalone document by
//! [`render_page`](crate::render_page).
//!
//! # Customization
//!
//! ```rust
//! use launch_sections::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the landing page - light theme with a dark-scheme override.
pub const PAGE_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #0b0b0f;
    --muted-foreground: #5f6270;
    --primary: #5b4dff;
    --primary-foreground: #ffffff;
    --brand: #ff6a3d;
    --border: #e4e4ea;
    --card: #f7f7fa;
    --radius: 12px;
    --container: 1280px;
    --font-sans: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

@media (prefers-color-scheme: dark) {
    :root {
        --background: #08080b;
        --foreground: #f3f3f6;
        --muted-foreground: #9a9cab;
        --border: #26262f;
        --card: #121218;
    }
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: var(--font-sans);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

.w-full { width: 100%; }
.text-primary { color: var(--primary); }
.text-brand { color: var(--brand); }
.underline { text-decoration: underline; text-underline-offset: 4px; }
.text-muted-foreground { color: var(--muted-foreground); }
.border-brand { border-color: var(--brand); }

/* Section wrapper */
.section {
    position: relative;
    padding: 48px 16px;
}

@media (min-width: 640px) { .section { padding: 96px 16px; } }

.container {
    max-width: var(--container);
    margin: 0 auto;
}

/* Badge */
.badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border-radius: 999px;
    border: 1px solid transparent;
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-default { background: var(--primary); color: var(--primary-foreground); }
.badge-secondary { background: var(--card); }
.badge-destructive { background: #e5484d; color: #fff; }
.badge-outline { border-color: var(--border); }

.badge-link {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    color: var(--primary);
}

/* Button */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: 8px;
    border: 1px solid transparent;
    font-weight: 500;
    white-space: nowrap;
    transition: background 0.15s ease, box-shadow 0.15s ease;
}

.btn-size-default { height: 36px; padding: 0 16px; font-size: 0.875rem; }
.btn-size-xs { height: 24px; padding: 0 8px; font-size: 0.75rem; }
.btn-size-sm { height: 32px; padding: 0 12px; font-size: 0.8125rem; }
.btn-size-lg { height: 40px; padding: 0 20px; font-size: 0.9375rem; }
.btn-size-icon { height: 36px; width: 36px; padding: 0; }

.btn-default { background: var(--primary); color: var(--primary-foreground); }
.btn-destructive { background: #e5484d; color: #fff; }
.btn-outline { border-color: var(--border); background: transparent; }
.btn-glow {
    border-color: var(--border);
    background: var(--background);
    box-shadow: 0 0 24px -6px var(--primary);
}
.btn-secondary { background: var(--card); }
.btn-ghost { background: transparent; }
.btn-link { background: transparent; color: var(--primary); text-decoration: underline; }

/* Hero */
.hero { overflow: hidden; padding-bottom: 0; }

.hero-inner {
    display: flex;
    flex-direction: column;
    gap: 48px;
    padding-top: 64px;
}

.hero-content {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 24px;
    text-align: center;
}

.hero-title {
    position: relative;
    z-index: 10;
    margin: 0;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 700;
    line-height: 1.1;
    text-wrap: balance;
}

.hero-description {
    position: relative;
    z-index: 10;
    max-width: 740px;
    margin: 0;
    color: var(--muted-foreground);
    font-size: 1.125rem;
    font-weight: 500;
    text-wrap: balance;
}

.hero-buttons {
    position: relative;
    z-index: 10;
    display: grid;
    grid-template-columns: 1fr;
    justify-content: center;
    gap: 16px;
}

@media (min-width: 768px) { .hero-buttons { grid-template-columns: repeat(2, auto); } }

.btn-icon-right { margin-left: 8px; }

.hero-mockup {
    position: relative;
    width: 100%;
    padding-top: 48px;
}

.fade-bottom {
    mask-image: linear-gradient(to bottom, black 70%, transparent);
}

/* Mockup */
.mockup-frame {
    position: relative;
    z-index: 10;
    border-radius: 20px;
    padding: 8px;
    background: var(--card);
    border: 1px solid var(--border);
}

.mockup-frame-large { padding: 16px; }

.mockup {
    overflow: hidden;
    border-radius: var(--radius);
    background: var(--background);
    box-shadow: 0 24px 64px -24px rgba(0, 0, 0, 0.35);
}

.screenshot-image { display: block; height: auto; }

/* Glow */
.glow {
    position: absolute;
    left: 0;
    right: 0;
    width: 100%;
    pointer-events: none;
}

.glow-top { top: 0; }
.glow-center { top: 50%; }
.glow-bottom, .glow-below { bottom: 0; }

.glow-outer, .glow-inner {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    border-radius: 50%;
    background: radial-gradient(ellipse at center, var(--primary) 10%, transparent 60%);
}

.glow-outer { width: 60%; height: 256px; opacity: 0.2; }
.glow-inner { width: 40%; height: 128px; opacity: 0.3; }

/* Marquee hero */
.hero-marquee { min-height: 720px; }

.ripple {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
    mask-image: radial-gradient(ellipse at center, black 20%, transparent 75%);
}

.ripple-grid {
    display: grid;
    position: absolute;
    left: 50%;
    top: 0;
    transform: translateX(-50%);
}

.ripple-cell {
    border: 0.5px solid var(--border);
    opacity: 0.4;
    animation: ripple-fade var(--duration) ease-out var(--delay) infinite alternate;
}

@keyframes ripple-fade {
    from { background: transparent; }
    to { background: color-mix(in srgb, var(--primary) 12%, transparent); }
}

.hero-marquee-stage {
    position: relative;
    margin-top: 48px;
    height: 600px;
    overflow: hidden;
}

.marquee {
    height: 100%;
    overflow: hidden;
    border-radius: 24px;
}

.marquee-stage {
    width: 1720px;
    transform: rotateX(55deg) rotateY(0deg) rotateZ(-45deg);
    transform-style: preserve-3d;
    margin: 0 auto;
}

.marquee-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
}

.marquee-column {
    display: flex;
    flex-direction: column;
    gap: 32px;
    animation-timing-function: linear;
    animation-iteration-count: infinite;
    animation-direction: alternate;
}

.marquee-down { animation-name: marquee-down; }
.marquee-up { animation-name: marquee-up; }

@keyframes marquee-down { from { transform: translateY(0); } to { transform: translateY(100px); } }
@keyframes marquee-up { from { transform: translateY(0); } to { transform: translateY(-100px); } }

.marquee-image {
    width: 100%;
    height: auto;
    aspect-ratio: 970 / 700;
    object-fit: cover;
    border-radius: 8px;
    box-shadow: 0 12px 32px -12px rgba(0, 0, 0, 0.4);
}

/* Logos */
.logos-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 32px;
    text-align: center;
}

.logos-heading {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 24px;
}

.logos-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
}

.logos-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 32px;
}

.logo-item {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-weight: 500;
}

.logo-icon { color: var(--brand); }

.logo-version, .logo-badge {
    font-size: 0.75rem;
    color: var(--muted-foreground);
}

.logo-badge {
    padding: 2px 6px;
    border: 1px solid var(--border);
    border-radius: 6px;
}

/* FAQ */
.faq-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 32px;
}

.faq-title {
    margin: 0;
    text-align: center;
    font-size: clamp(1.875rem, 4vw, 3rem);
    font-weight: 600;
}

.faq-accordion { width: 100%; max-width: 800px; }

.accordion-item { border-bottom: 1px solid var(--border); }

.accordion-header { margin: 0; }

.accordion-trigger {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    padding: 16px 0;
    background: none;
    border: 0;
    color: inherit;
    font: inherit;
    font-weight: 500;
    text-align: left;
    cursor: pointer;
}

.accordion-caret { flex-shrink: 0; transition: transform 0.2s ease; }

.accordion-item[data-state="open"] .accordion-caret { transform: rotate(180deg); }

.accordion-content { padding-bottom: 16px; }

.accordion-paragraph {
    max-width: 640px;
    margin: 0 0 16px;
    color: var(--muted-foreground);
}

/* Entrance animations */
.animate-appear { animation: appear 0.6s ease-out forwards; }
.animate-appear-zoom { animation: appear-zoom 0.6s ease-out forwards; }
.delay-100 { animation-delay: 100ms; }
.delay-300 { animation-delay: 300ms; }
.delay-700 { animation-delay: 700ms; }
.delay-1000 { animation-delay: 1000ms; }

@keyframes appear {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes appear-zoom {
    from { opacity: 0; transform: scale(0.5); }
    to { opacity: 1; transform: scale(1); }
}

@media (prefers-reduced-motion: reduce) {
    .animate-appear, .animate-appear-zoom, .marquee-column, .ripple-cell { animation: none; }
}
"#;
