//! Inline validation message under a form field.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldErrorProps {
    pub message: String,
}

/// Displays a field's validation message as helper text.
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        p {
            style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;",
            "{props.message}"
        }
    }
}
