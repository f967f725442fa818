//! Actual-value input for correcting a past prediction.

use crate::api::UpdateActualRequest;
use crate::history::History;

/// The actual rentals field. The value is sent as typed.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ActualInput {
    pub value: String,
}

impl ActualInput {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Build the update request for the selected history entry, if any.
    pub fn request_for(&self, history: &History) -> Option<UpdateActualRequest> {
        history.selected().map(|request_id| UpdateActualRequest {
            request_id: request_id.clone(),
            actual_rentals: self.value.clone(),
        })
    }
}
