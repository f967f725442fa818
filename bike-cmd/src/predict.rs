//! `predict` subcommand.

use crate::PredictArgs;
use bike_core::api::PredictionService;
use bike_core::form::{Field, PredictionForm};
use bike_core::workflow;

impl PredictArgs {
    /// Given values in form order, season first.
    fn values(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    Field::Season => &self.season,
                    Field::Month => &self.mnth,
                    Field::Hour => &self.hr,
                    Field::Weekday => &self.weekday,
                    Field::Temperature => &self.temp,
                    Field::Weather => &self.weathersit,
                    Field::Humidity => &self.hum,
                    Field::WindSpeed => &self.windspeed,
                    Field::Holiday => &self.holiday,
                    Field::WorkingDay => &self.workingday,
                };
                value.as_deref().map(|v| (field, v))
            })
            .collect()
    }
}

/// Fill a form from the arguments as if the operator had typed them.
pub fn form_from_args(args: &PredictArgs) -> PredictionForm {
    let mut form = PredictionForm::new();
    for (field, value) in args.values() {
        form.change(field, value);
    }
    form
}

/// Reject a month the season does not offer.
fn check_month(form: &PredictionForm) -> anyhow::Result<()> {
    let month = &form.data.mnth;
    if month.is_empty() {
        return Ok(());
    }
    let allowed = form.available_months();
    if !allowed.iter().any(|m| m.to_string() == *month) {
        anyhow::bail!(
            "Month {} is not available for season {:?} (allowed: {:?})",
            month,
            form.data.season,
            allowed
        );
    }
    Ok(())
}

/// Validate the arguments and request a prediction.
///
/// A failed request is logged by the workflow and leaves nothing printed.
pub async fn run_predict<S: PredictionService>(service: &S, args: &PredictArgs) -> anyhow::Result<()> {
    let mut form = form_from_args(args);
    check_month(&form)?;

    let Some(payload) = form.submission() else {
        for (field, message) in form.errors.iter() {
            eprintln!("{}: {}", field.label(), message);
        }
        anyhow::bail!("Prediction form is incomplete");
    };

    if let Some(prediction) = workflow::request_prediction(service, &payload).await {
        if prediction.is_truthy() {
            println!("Прогноз: {}", prediction);
        }
    }
    Ok(())
}
