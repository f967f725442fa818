//! `history` subcommand.

use bike_core::api::PredictionService;
use bike_core::history::History;
use bike_core::workflow;

/// One line per entry; the selected entry is marked with `*`.
pub fn format_history(history: &History) -> Vec<String> {
    history
        .entries()
        .iter()
        .map(|entry| {
            let marker = if history.is_selected(&entry.request_id) { '*' } else { ' ' };
            format!("{} {} | {}", marker, entry.title(), entry.summary())
        })
        .collect()
}

pub fn print_history(history: &History) {
    if history.is_empty() {
        return;
    }
    println!("История:");
    for line in format_history(history) {
        println!("{}", line);
    }
}

pub async fn run_history<S: PredictionService>(service: &S) -> anyhow::Result<()> {
    if let Some(entries) = workflow::fetch_history(service).await {
        let mut history = History::default();
        history.replace(entries);
        print_history(&history);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::history::HistoryEntry;
    use bike_core::opaque::Opaque;
    use serde_json::json;

    #[test]
    fn test_format_history_marks_selection() {
        let mut history = History::default();
        history.replace(vec![
            HistoryEntry {
                request_id: Opaque::from("a1"),
                prediction: Opaque(json!(120)),
                actual: None,
            },
            HistoryEntry {
                request_id: Opaque::from("b2"),
                prediction: Opaque(json!(64.5)),
                actual: Some(Opaque(json!(70))),
            },
        ]);
        history.select(Opaque::from("b2"));

        assert_eq!(
            format_history(&history),
            vec![
                "  Request ID: a1 | Прогноз: 120, Фактическое: Нет".to_string(),
                "* Request ID: b2 | Прогноз: 64.5, Фактическое: 70".to_string(),
            ]
        );
    }
}
