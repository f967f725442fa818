//! Dropdown input for a select-type form field.

use crate::components::FieldError;
use crate::state::AppState;
use bike_core::choices;
use bike_core::form::Field;
use dioxus::prelude::*;

/// Select input bound to one form field.
/// The month options follow the currently selected season.
#[component]
pub fn SelectField(field: Field) -> Element {
    let mut state = use_context::<AppState>();
    let (value, season, error) = {
        let form = state.form.read();
        (
            form.data.get(field).to_string(),
            form.data.season.clone(),
            form.errors.get(field).map(str::to_string),
        )
    };
    let options = choices::options(field, &season);
    let placeholder = choices::placeholder(field);
    let label = field.label();
    let id = format!("{}-select", field.name());
    let border = if error.is_some() { "#C62828" } else { "#bdbdbd" };

    let on_change = move |evt: Event<FormData>| {
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
            select {
                id: "{id}",
                name: field.name(),
                required: field.is_required(),
                style: "width: 100%; padding: 8px; border: 1px solid {border}; border-radius: 4px;",
                onchange: on_change,
                option {
                    value: "",
                    selected: value.is_empty(),
                    "{placeholder}"
                }
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
            if let Some(message) = error {
                FieldError { message }
            }
        }
    }
}
