//! Dioxus RSX components making up the prediction form.

mod actual_update_panel;
mod field_error;
mod history_panel;
mod number_field;
mod prediction_form;
mod prediction_panel;
mod select_field;

pub use actual_update_panel::ActualUpdatePanel;
pub use field_error::FieldError;
pub use history_panel::HistoryPanel;
pub use number_field::NumberField;
pub use prediction_form::PredictionForm;
pub use prediction_panel::PredictionPanel;
pub use select_field::SelectField;
