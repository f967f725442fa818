//! Prediction inputs, submit button and the latest prediction.

use crate::components::{NumberField, SelectField};
use crate::state::AppState;
use bike_core::choices;
use bike_core::form::Field;
use dioxus::prelude::*;

/// The input form. Submitting validates and requests a prediction; the
/// values stay in place afterwards.
#[component]
pub fn PredictionPanel() -> Element {
    let state = use_context::<AppState>();
    let prediction = state
        .prediction
        .read()
        .as_ref()
        .filter(|p| p.is_truthy())
        .map(|p| p.to_string());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.submit_prediction();
    };

    rsx! {
        form {
            onsubmit: on_submit,
            for field in Field::ALL {
                if choices::is_select(field) {
                    SelectField { key: "{field}", field }
                } else {
                    NumberField { key: "{field}", field }
                }
            }
            div {
                style: "text-align: center; margin-bottom: 16px;",
                button {
                    r#type: "submit",
                    style: "margin: 8px; padding: 8px 20px; border: none; border-radius: 8px; background: #1976D2; color: white; cursor: pointer;",
                    "Получить прогноз"
                }
            }
        }

        if let Some(value) = prediction {
            div {
                style: "margin-top: 16px; text-align: center;",
                h3 {
                    style: "margin: 0; color: #1976D2;",
                    "Прогноз: {value}"
                }
            }
        }
    }
}
