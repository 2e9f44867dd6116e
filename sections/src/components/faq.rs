//! FAQ section: title plus a single-open accordion of questions.

use leptos::prelude::*;

use crate::config::FaqConfig;
use crate::defaults;
use crate::types::{FaqItem, Slot};
use crate::ui::{Accordion, AccordionEntry, Section, cn};

/// Accordion rows for `items`, keyed by explicit value or position.
fn accordion_entries(items: &[FaqItem]) -> Vec<AccordionEntry> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| AccordionEntry {
            value: item.key(index),
            trigger: item.question.clone(),
            content: item.answer.clone(),
        })
        .collect()
}

/// Frequently asked questions.
///
/// `items = false` (or an empty list) keeps the title and drops the accordion.
#[component]
pub fn Faq(
    /// Heading; defaults to "Dúvidas frequentes"
    #[prop(optional, into)]
    title: Option<String>,
    /// Question/answer pairs; defaults to the bundled ten
    #[prop(optional, into)]
    items: Slot<Vec<FaqItem>>,
    /// Extra CSS classes on the section
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| defaults::FAQ_TITLE.to_string());
    let entries = items
        .resolve_list(defaults::faq_items)
        .map(|items| accordion_entries(&items));

    view! {
        <Section id="faq" class=cn("faq", class.as_deref())>
            <div class="container faq-inner">
                <h2 class="faq-title">{title}</h2>
                {entries.map(|entries| view! {
                    <Accordion entries=entries collapsible=true class="faq-accordion" />
                })}
            </div>
        </Section>
    }
}

/// [`Faq`] built from a [`FaqConfig`].
pub fn faq_view(config: FaqConfig) -> impl IntoView {
    let FaqConfig { title, items, class } = config;
    Faq(FaqProps { title, items, class })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_follow_item_order_and_keys() {
        let items = vec![
            FaqItem::new("First?", ["One."]),
            FaqItem::new("Second?", ["Two."]).with_value("second"),
            FaqItem::new("Third?", ["Three.", "Really."]),
        ];
        let entries = accordion_entries(&items);
        let keys: Vec<&str> = entries.iter().map(|e| e.value.as_str()).collect();
        let questions: Vec<&str> = entries.iter().map(|e| e.trigger.as_str()).collect();
        assert_eq!(keys, vec!["item-1", "second", "item-3"]);
        assert_eq!(questions, vec!["First?", "Second?", "Third?"]);
        assert_eq!(entries[2].content.len(), 2);
    }
}
