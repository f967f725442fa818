//! History button and the selectable list of past requests.

use crate::state::AppState;
use bike_core::history::HistoryEntry;
use dioxus::prelude::*;

/// Background of the selected history row.
const SELECTED_BACKGROUND: &str = "#c9c4c4";

/// Fetches history on demand and lists it once non-empty.
#[component]
pub fn HistoryPanel() -> Element {
    let state = use_context::<AppState>();
    let history = state.history.read().clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.refresh_history();
    };

    rsx! {
        form {
            onsubmit: on_submit,
            div {
                style: "text-align: center; margin-bottom: 16px;",
                button {
                    r#type: "submit",
                    style: "margin: 8px; padding: 8px 20px; border: 1px solid #9C27B0; border-radius: 8px; background: white; color: #9C27B0; cursor: pointer;",
                    "Показать историю"
                }
            }
        }

        if !history.is_empty() {
            div {
                style: "margin-top: 24px;",
                h3 {
                    style: "margin: 0 0 8px 0;",
                    "История:"
                }
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for (index, entry) in history.entries().iter().enumerate() {
                        HistoryRow {
                            key: "{index}",
                            entry: entry.clone(),
                            selected: history.is_selected(&entry.request_id),
                        }
                    }
                }
            }
        }
    }
}

/// One clickable history entry. Clicking selects its request id.
#[component]
fn HistoryRow(entry: HistoryEntry, selected: bool) -> Element {
    let mut state = use_context::<AppState>();
    let title = entry.title();
    let summary = entry.summary();
    let background = if selected { SELECTED_BACKGROUND } else { "none" };
    let request_id = entry.request_id.clone();

    let on_click = move |_: Event<MouseData>| {
        state.history.write().select(request_id.clone());
    };

    rsx! {
        li {
            style: "padding: 8px 12px; border-bottom: 1px solid #eee; cursor: pointer; background: {background};",
            onclick: on_click,
            div { "{title}" }
            div {
                style: "font-size: 13px; color: #666;",
                "{summary}"
            }
        }
    }
}
