//! The complete prediction form card.

use crate::components::{ActualUpdatePanel, HistoryPanel, PredictionPanel};
use dioxus::prelude::*;

/// Prediction inputs, history and actual-value update, stacked in one card.
/// Expects an `AppState` in context.
#[component]
pub fn PredictionForm() -> Element {
    rsx! {
        div {
            style: "max-width: 600px; margin: 24px auto; padding: 16px 24px; border-radius: 12px; box-shadow: 0 4px 8px rgba(0,0,0,0.1); font-family: system-ui, -apple-system, sans-serif;",
            h1 {
                style: "text-align: center; font-size: 28px; margin: 8px 0 24px 0;",
                "Прогноз спроса на аренду велосипедов"
            }

            PredictionPanel {}

            hr { style: "margin: 24px 0; border: none; border-top: 1px solid #e0e0e0;" }

            HistoryPanel {}

            hr { style: "margin: 24px 0; border: none; border-top: 1px solid #e0e0e0;" }

            ActualUpdatePanel {}
        }
    }
}
