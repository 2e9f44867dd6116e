//! Root document component - the complete landing page

use leptos::prelude::*;

use super::{faq_view, hero_view, logos_view, marquee_hero_view};
use crate::config::{FaqConfig, HeroVariant, LogosConfig, PageContent};
use crate::styles::PAGE_CSS;

// Applies single-open accordion behavior to server-rendered markup.
const PAGE_SCRIPT: &str = r#"
(function () {
  document.querySelectorAll('[data-accordion="single"]').forEach(function (root) {
    var collapsible = root.getAttribute('data-collapsible') !== 'false';
    var items = Array.prototype.slice.call(root.querySelectorAll('.accordion-item'));

    function setOpen(item, open) {
      var state = open ? 'open' : 'closed';
      item.setAttribute('data-state', state);
      var trigger = item.querySelector('[data-accordion-trigger]');
      var content = item.querySelector('.accordion-content');
      if (trigger) {
        trigger.setAttribute('aria-expanded', open ? 'true' : 'false');
      }
      if (content) {
        content.setAttribute('data-state', state);
        content.hidden = !open;
      }
    }

    items.forEach(function (item) {
      var trigger = item.querySelector('[data-accordion-trigger]');
      if (!trigger) {
        return;
      }
      trigger.addEventListener('click', function () {
        var wasOpen = item.getAttribute('data-state') === 'open';
        if (wasOpen) {
          if (collapsible) {
            setOpen(item, false);
          }
          return;
        }
        items.forEach(function (other) {
          setOpen(other, false);
        });
        setOpen(item, true);
      });
    });
  });
})();
"#;

/// Hero, logos strip and FAQ in page order, each skipped when switched off.
#[component]
pub fn PageSections(content: PageContent) -> impl IntoView {
    let PageContent {
        site,
        hero,
        logos,
        faq,
    } = content;

    let hero = hero.resolve(HeroVariant::default).map(|hero| match hero {
        HeroVariant::Mockup(config) => hero_view(config, site.clone()).into_any(),
        HeroVariant::Marquee(config) => marquee_hero_view(config, site.clone()).into_any(),
    });
    let logos = logos.resolve(LogosConfig::default).map(logos_view);
    let faq = faq.resolve(FaqConfig::default).map(faq_view);

    view! {
        <main class="page">
            {hero}
            {logos}
            {faq}
        </main>
    }
}

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(content: PageContent) -> impl IntoView {
    let lang = content.site.lang.clone();
    let title = content.site.name.clone();
    let description = content.site.description.clone();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <PageSections content=content />
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}
