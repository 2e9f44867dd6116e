//! Single-open accordion.
//!
//! Opening a row closes whichever row was open before. With `collapsible`
//! set, toggling the open row closes it and leaves every row closed.
//!
//! The rendered markup carries `data-accordion="single"` and per-row
//! `data-state`, so the static page script can apply the same rule when the
//! page is served without WASM.

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon, cn};

/// Selection state of a single-open accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<String>,
    collapsible: bool,
}

impl AccordionState {
    /// All rows closed.
    pub fn new(collapsible: bool) -> Self {
        Self {
            open: None,
            collapsible,
        }
    }

    /// Start with `value` open.
    pub fn with_open(mut self, value: Option<String>) -> Self {
        self.open = value;
        self
    }

    /// Toggle the row identified by `value`.
    pub fn toggle(&mut self, value: &str) {
        if self.is_open(value) {
            if self.collapsible {
                self.open = None;
            }
        } else {
            self.open = Some(value.to_string());
        }
    }

    /// Whether the row identified by `value` is expanded.
    pub fn is_open(&self, value: &str) -> bool {
        self.open.as_deref() == Some(value)
    }

    /// Identifier of the expanded row, if any.
    pub fn open_value(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

/// One collapsible row: identifier, trigger label and content paragraphs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionEntry {
    /// Key identifying the row within the accordion
    pub value: String,
    /// Header text
    pub trigger: String,
    /// Body paragraphs
    pub content: Vec<String>,
}

/// Vertically stacked rows where at most one is expanded.
#[component]
pub fn Accordion(
    entries: Vec<AccordionEntry>,
    /// Allow closing the open row by toggling it again
    #[prop(default = true)]
    collapsible: bool,
    /// Row expanded on first render
    #[prop(optional, into)]
    default_value: Option<String>,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(collapsible).with_open(default_value));

    view! {
        <div
            class=cn("accordion", class.as_deref())
            data-accordion="single"
            data-collapsible=collapsible.to_string()
        >
            {entries
                .into_iter()
                .map(|entry| view! { <AccordionRow entry=entry state=state /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn AccordionRow(entry: AccordionEntry, state: RwSignal<AccordionState>) -> impl IntoView {
    let AccordionEntry {
        value,
        trigger,
        content,
    } = entry;

    let trigger_id = format!("{value}-trigger");
    let content_id = format!("{value}-content");
    let open = {
        let value = value.clone();
        Memo::new(move |_| state.with(|s| s.is_open(&value)))
    };
    let toggle_value = value.clone();
    let data_state = move || if open.get() { "open" } else { "closed" };

    view! {
        <div class="accordion-item" data-value=value data-state=data_state>
            <h3 class="accordion-header">
                <button
                    type="button"
                    id=trigger_id.clone()
                    class="accordion-trigger"
                    data-accordion-trigger=""
                    aria-controls=content_id.clone()
                    aria-expanded=move || if open.get() { "true" } else { "false" }
                    on:click=move |_| state.update(|s| s.toggle(&toggle_value))
                >
                    <span class="accordion-question">{trigger}</span>
                    <Icon path=ICON_CARET_DOWN size="16" class="accordion-caret" />
                </button>
            </h3>
            <div
                id=content_id
                class="accordion-content"
                role="region"
                aria-labelledby=trigger_id
                data-state=data_state
                hidden=move || !open.get()
            >
                {content
                    .into_iter()
                    .map(|paragraph| view! { <p class="accordion-paragraph">{paragraph}</p> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_a_row_closes_the_previous_one() {
        let mut state = AccordionState::new(true);
        state.toggle("item-1");
        state.toggle("item-3");
        assert_eq!(state.open_value(), Some("item-3"));
        assert!(!state.is_open("item-1"));
    }

    #[test]
    fn collapsible_toggle_closes_open_row() {
        let mut state = AccordionState::new(true);
        state.toggle("item-2");
        state.toggle("item-2");
        assert_eq!(state.open_value(), None);
    }

    #[test]
    fn non_collapsible_keeps_row_open() {
        let mut state = AccordionState::new(false).with_open(Some("item-1".into()));
        state.toggle("item-1");
        assert_eq!(state.open_value(), Some("item-1"));
    }

    #[test]
    fn at_most_one_row_open_after_any_toggle_sequence() {
        let rows = ["item-1", "item-2", "item-3", "item-4"];
        let mut state = AccordionState::new(true);
        // Deterministic pseudo-random walk over the rows.
        let mut seed: u32 = 7;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let row = rows[(seed >> 16) as usize % rows.len()];
            state.toggle(row);
            let open = rows.iter().filter(|r| state.is_open(r)).count();
            assert!(open <= 1, "{open} rows open after toggling {row}");
        }
    }
}
