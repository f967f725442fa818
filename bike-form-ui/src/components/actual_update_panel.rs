//! Actual rentals input for the selected history entry.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ActualUpdatePanel() -> Element {
    let mut state = use_context::<AppState>();
    let value = state.actual.read().value.clone();

    let on_input = move |evt: Event<FormData>| {
        state.actual.write().set(evt.value());
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.submit_actual();
    };

    rsx! {
        form {
            onsubmit: on_submit,
            div {
                style: "margin-bottom: 16px;",
                label {
                    r#for: "actual-input",
                    style: "display: block; font-weight: bold; margin-bottom: 4px;",
                    "Фактическое значение"
                }
                input {
                    id: "actual-input",
                    r#type: "number",
                    required: true,
                    value: "{value}",
                    style: "width: 100%; padding: 8px; box-sizing: border-box; border: 1px solid #bdbdbd; border-radius: 4px;",
                    oninput: on_input,
                }
            }
            div {
                style: "text-align: center;",
                button {
                    r#type: "submit",
                    style: "margin: 8px; padding: 8px 20px; border: none; border-radius: 8px; background: #2E7D32; color: white; cursor: pointer;",
                    "Обновить фактические данные"
                }
            }
        }
    }
}
