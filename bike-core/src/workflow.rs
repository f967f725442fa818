//! The three remote workflows of the prediction form.
//!
//! Each function performs its calls against a [`PredictionService`] and hands
//! back what the caller should merge into its state. Service failures are
//! logged and swallowed: the caller simply gets nothing to apply, leaving the
//! previous prediction or history on screen.

use crate::actual::ActualInput;
use crate::api::{PredictionService, UpdateActualRequest};
use crate::form::{FormData, PredictionForm};
use crate::history::{History, HistoryEntry};
use crate::notice::{Notice, Notifier};
use crate::opaque::Opaque;
use log::{debug, error, info};

/// Request a prediction for an already validated payload.
pub async fn request_prediction<S: PredictionService>(service: &S, payload: &FormData) -> Option<Opaque> {
    match service.predict(payload).await {
        Ok(response) => {
            if let Some(request_id) = &response.request_id {
                debug!("Prediction stored as request {}", request_id);
            }
            Some(response.prediction)
        }
        Err(e) => {
            error!("Prediction request failed: {}", e);
            None
        }
    }
}

/// Validate the form and, when valid, request a prediction.
///
/// Returns `None` both when validation failed (errors are now on `form`) and
/// when the call failed.
pub async fn submit_prediction<S: PredictionService>(
    service: &S,
    form: &mut PredictionForm,
) -> Option<Opaque> {
    let payload = form.submission()?;
    request_prediction(service, &payload).await
}

/// Fetch the full history list.
pub async fn fetch_history<S: PredictionService>(service: &S) -> Option<Vec<HistoryEntry>> {
    match service.history().await {
        Ok(entries) => Some(entries),
        Err(e) => {
            error!("History request failed: {}", e);
            None
        }
    }
}

/// Result of an actual-value update attempt.
#[derive(Debug, PartialEq, Clone)]
pub enum UpdateOutcome {
    /// Nothing selected; no call was made.
    NoSelection,
    /// The update call failed and was logged.
    Failed,
    /// The update succeeded. `refreshed` is the re-fetched history, if that
    /// follow-up call succeeded.
    Updated { refreshed: Option<Vec<HistoryEntry>> },
}

/// Send an already built update, then refresh the history once.
async fn send_actual<S: PredictionService, N: Notifier>(
    service: &S,
    notifier: &N,
    request: &UpdateActualRequest,
) -> UpdateOutcome {
    if let Err(e) = service.update_actual(request).await {
        error!("Actual value update failed: {}", e);
        return UpdateOutcome::Failed;
    }
    info!("Actual value recorded for request {}", request.request_id);
    let refreshed = fetch_history(service).await;
    notifier.notify(Notice::ActualUpdated);
    UpdateOutcome::Updated { refreshed }
}

/// Attach the typed actual value to the selected history entry.
///
/// Without a selection the operator is notified and no call is made.
pub async fn update_actual<S: PredictionService, N: Notifier>(
    service: &S,
    notifier: &N,
    history: &History,
    input: &ActualInput,
) -> UpdateOutcome {
    match input.request_for(history) {
        Some(request) => send_actual(service, notifier, &request).await,
        None => {
            notifier.notify(Notice::SelectionRequired);
            UpdateOutcome::NoSelection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PredictResponse;
    use crate::error::{Result, ServiceError};
    use crate::form::Field;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq, Clone)]
    enum Call {
        Predict(FormData),
        History,
        UpdateActual(UpdateActualRequest),
    }

    /// Records calls and answers from canned results.
    struct FakeService {
        calls: RefCell<Vec<Call>>,
        prediction: Result<PredictResponse>,
        history: Result<Vec<HistoryEntry>>,
        update: Result<()>,
    }

    impl FakeService {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                prediction: Ok(PredictResponse {
                    prediction: Opaque(json!(120)),
                    request_id: Some(Opaque::from("r-1")),
                }),
                history: Ok(vec![HistoryEntry {
                    request_id: Opaque::from("r-1"),
                    prediction: Opaque(json!(120)),
                    actual: Some(Opaque(json!(131.0))),
                }]),
                update: Ok(()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl PredictionService for FakeService {
        async fn predict(&self, form: &FormData) -> Result<PredictResponse> {
            self.calls.borrow_mut().push(Call::Predict(form.clone()));
            self.prediction.clone()
        }

        async fn history(&self) -> Result<Vec<HistoryEntry>> {
            self.calls.borrow_mut().push(Call::History);
            self.history.clone()
        }

        async fn update_actual(&self, request: &UpdateActualRequest) -> Result<()> {
            self.calls.borrow_mut().push(Call::UpdateActual(request.clone()));
            self.update.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn scenario_form() -> PredictionForm {
        let mut form = PredictionForm::new();
        form.change(Field::Season, "1");
        form.change(Field::Month, "4");
        form.change(Field::Hour, "8");
        form.change(Field::Weekday, "1");
        form.change(Field::Temperature, "21.5");
        form
    }

    #[tokio::test]
    async fn test_submit_valid_form_calls_predict_once() {
        let service = FakeService::ok();
        let mut form = scenario_form();
        assert_eq!(form.available_months(), &[3, 4, 5]);

        let prediction = submit_prediction(&service, &mut form).await;
        assert_eq!(prediction.map(|p| format!("Прогноз: {}", p)), Some("Прогноз: 120".to_string()));

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Predict(sent) => {
                assert_eq!(sent.season, "1");
                assert_eq!(sent.mnth, "4");
                assert_eq!(sent.hr, "8");
                assert_eq!(sent.weekday, "1");
                assert_eq!(sent.temp, "21.5");
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_string_prediction_is_displayed_verbatim() {
        let mut service = FakeService::ok();
        service.prediction = Ok(PredictResponse {
            prediction: Opaque::from("42"),
            request_id: None,
        });
        let prediction = submit_prediction(&service, &mut scenario_form()).await;
        assert_eq!(prediction.unwrap().to_string(), "42");
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let service = FakeService::ok();
        for missing in Field::REQUIRED {
            let mut form = scenario_form();
            form.data.set(missing, "");
            assert_eq!(submit_prediction(&service, &mut form).await, None);
            assert!(form.errors.get(missing).is_some());
        }
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_predict_failure_is_swallowed() {
        let mut service = FakeService::ok();
        service.prediction = Err(ServiceError::Status { status: 500 });
        let mut form = scenario_form();

        assert_eq!(submit_prediction(&service, &mut form).await, None);
        assert_eq!(service.calls().len(), 1);
        assert!(form.errors.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_history() {
        let service = FakeService::ok();
        let entries = fetch_history(&service).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(service.calls(), vec![Call::History]);

        let mut failing = FakeService::ok();
        failing.history = Err(ServiceError::Request("connection refused".to_string()));
        assert_eq!(fetch_history(&failing).await, None);
    }

    #[tokio::test]
    async fn test_update_without_selection() {
        let service = FakeService::ok();
        let notifier = RecordingNotifier::default();
        let mut input = ActualInput::default();
        input.set("131");

        let outcome = update_actual(&service, &notifier, &History::default(), &input).await;
        assert_eq!(outcome, UpdateOutcome::NoSelection);
        assert!(service.calls().is_empty());
        assert_eq!(*notifier.notices.borrow(), vec![Notice::SelectionRequired]);
    }

    #[tokio::test]
    async fn test_update_refreshes_history_once() {
        let service = FakeService::ok();
        let notifier = RecordingNotifier::default();
        let mut history = History::default();
        history.select(Opaque::from("r-1"));
        let mut input = ActualInput::default();
        input.set("131");

        let outcome = update_actual(&service, &notifier, &history, &input).await;
        let refreshed = match outcome {
            UpdateOutcome::Updated { refreshed } => refreshed.unwrap(),
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(refreshed[0].summary(), "Прогноз: 120, Фактическое: 131");

        let calls = service.calls();
        assert_eq!(
            calls,
            vec![
                Call::UpdateActual(UpdateActualRequest {
                    request_id: Opaque::from("r-1"),
                    actual_rentals: "131".to_string(),
                }),
                Call::History,
            ]
        );
        assert_eq!(*notifier.notices.borrow(), vec![Notice::ActualUpdated]);
        assert!(history.is_selected(&Opaque::from("r-1")));
    }

    #[tokio::test]
    async fn test_update_failure_is_silent() {
        let mut service = FakeService::ok();
        service.update = Err(ServiceError::Status { status: 400 });
        let notifier = RecordingNotifier::default();
        let mut history = History::default();
        history.select(Opaque::from("r-1"));

        let outcome = update_actual(&service, &notifier, &history, &ActualInput::default()).await;
        assert_eq!(outcome, UpdateOutcome::Failed);
        assert_eq!(service.calls().len(), 1);
        assert!(notifier.notices.borrow().is_empty());
    }
}
