//! Prediction history as returned by the service, plus single selection.

use crate::opaque::Opaque;
use serde::{Deserialize, Serialize};

/// Shown in place of a missing actual value.
pub const NO_ACTUAL: &str = "Нет";

/// One previously submitted prediction request.
///
/// The service stores the request inputs alongside each entry; those extra
/// fields are ignored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub request_id: Opaque,
    pub prediction: Opaque,
    #[serde(default)]
    pub actual: Option<Opaque>,
}

impl HistoryEntry {
    pub fn title(&self) -> String {
        format!("Request ID: {}", self.request_id)
    }

    /// "Прогноз: .., Фактическое: .." line; a falsy actual reads as "Нет".
    pub fn summary(&self) -> String {
        let actual = match &self.actual {
            Some(actual) if actual.is_truthy() => actual.to_string(),
            _ => NO_ACTUAL.to_string(),
        };
        format!("Прогноз: {}, Фактическое: {}", self.prediction, actual)
    }
}

/// History list and the currently selected request id.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    selected: Option<Opaque>,
}

impl History {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the list wholesale, in the order the service returned it.
    /// The selection is kept even if the id is no longer listed.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries;
    }

    /// Select a request id, replacing any previous selection.
    pub fn select(&mut self, request_id: Opaque) {
        self.selected = Some(request_id);
    }

    pub fn selected(&self) -> Option<&Opaque> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, request_id: &Opaque) -> bool {
        self.selected.as_ref() == Some(request_id)
    }
}
