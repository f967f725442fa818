//! Numeric text input for a form field.

use crate::components::FieldError;
use crate::state::AppState;
use bike_core::choices;
use bike_core::form::Field;
use dioxus::prelude::*;

/// Number input bound to one form field. The typed text is stored as-is.
#[component]
pub fn NumberField(field: Field) -> Element {
    let mut state = use_context::<AppState>();
    let (value, error) = {
        let form = state.form.read();
        (
            form.data.get(field).to_string(),
            form.errors.get(field).map(str::to_string),
        )
    };
    let (min, max, step) = choices::number_bounds(field);
    let label = field.label();
    let id = format!("{}-input", field.name());
    let border = if error.is_some() { "#C62828" } else { "#bdbdbd" };

    let on_input = move |evt: Event<FormData>| {
        state.form.write().change(field, evt.value());
    };

    rsx! {
        div {
            style: "margin-bottom: 16px;",
            label {
                r#for: "{id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{label}"
            }
            input {
                id: "{id}",
                name: field.name(),
                r#type: "number",
                required: field.is_required(),
                min,
                max,
                step,
                value: "{value}",
                style: "width: 100%; padding: 8px; box-sizing: border-box; border: 1px solid {border}; border-radius: 4px;",
                oninput: on_input,
            }
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}
