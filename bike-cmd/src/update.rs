//! `update-actual` subcommand.

use crate::history::print_history;
use crate::ConsoleNotifier;
use bike_core::actual::ActualInput;
use bike_core::api::PredictionService;
use bike_core::history::History;
use bike_core::opaque::Opaque;
use bike_core::workflow::{self, UpdateOutcome};

/// Send the actual rentals for `request_id` and print the refreshed history.
///
/// Without a request id the selection notice is printed and nothing is sent.
pub async fn run_update_actual<S: PredictionService>(
    service: &S,
    request_id: Option<&str>,
    actual: &str,
) -> anyhow::Result<()> {
    let mut history = History::default();
    if let Some(id) = request_id.filter(|id| !id.is_empty()) {
        history.select(Opaque::from(id));
    }
    let mut input = ActualInput::default();
    input.set(actual);

    let outcome = workflow::update_actual(service, &ConsoleNotifier, &history, &input).await;
    if let UpdateOutcome::Updated {
        refreshed: Some(entries),
    } = outcome
    {
        history.replace(entries);
        print_history(&history);
    }
    Ok(())
}
