//! Application state managed via Dioxus context.
//!
//! `AppState` bundles one signal per workflow (form, prediction, history,
//! actual value) and is provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.
//!
//! Remote calls run as spawned tasks. Nothing tracks calls in flight, so when
//! several overlap the last response to arrive wins.

use crate::browser::BrowserAlert;
use bike_core::actual::ActualInput;
use bike_core::api::{HttpPredictionService, ServiceConfig};
use bike_core::form::PredictionForm;
use bike_core::history::History;
use bike_core::opaque::Opaque;
use bike_core::workflow::{self, UpdateOutcome};
use dioxus::prelude::*;

/// Shared state for the prediction form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Client for the prediction service
    pub service: Signal<HttpPredictionService>,
    /// Input values and validation messages
    pub form: Signal<PredictionForm>,
    /// Last prediction received
    pub prediction: Signal<Option<Opaque>>,
    /// History list and selected request id
    pub history: Signal<History>,
    /// Actual rentals value being entered
    pub actual: Signal<ActualInput>,
}

impl AppState {
    /// Create a new AppState with an empty form.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            service: Signal::new(HttpPredictionService::new(config)),
            form: Signal::new(PredictionForm::new()),
            prediction: Signal::new(None),
            history: Signal::new(History::default()),
            actual: Signal::new(ActualInput::default()),
        }
    }

    /// Validate the form and request a prediction in the background.
    /// Validation errors land on the form and no call is made.
    pub fn submit_prediction(self) {
        let mut form = self.form;
        let Some(payload) = form.write().submission() else {
            return;
        };
        let service = self.service.read().clone();
        let mut prediction = self.prediction;
        spawn(async move {
            if let Some(value) = workflow::request_prediction(&service, &payload).await {
                prediction.set(Some(value));
            }
        });
    }

    /// Re-fetch the history list, replacing it on success.
    pub fn refresh_history(self) {
        let service = self.service.read().clone();
        let mut history = self.history;
        spawn(async move {
            if let Some(entries) = workflow::fetch_history(&service).await {
                history.write().replace(entries);
            }
        });
    }

    /// Send the actual value for the selected entry, then refresh history.
    pub fn submit_actual(self) {
        let service = self.service.read().clone();
        let snapshot = self.history.read().clone();
        let input = self.actual.read().clone();
        let mut history = self.history;
        spawn(async move {
            let outcome = workflow::update_actual(&service, &BrowserAlert, &snapshot, &input).await;
            if let UpdateOutcome::Updated {
                refreshed: Some(entries),
            } = outcome
            {
                history.write().replace(entries);
            }
        });
    }
}
