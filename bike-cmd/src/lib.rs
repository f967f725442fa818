//! Command implementations for the bike rental prediction CLI.
//!
//! Each subcommand drives one workflow of the prediction form against the
//! prediction service.

use bike_core::api::{HttpPredictionService, ServiceConfig};
use bike_core::notice::{Notice, Notifier};
use clap::{Args, Subcommand};

pub mod history;
pub mod predict;
pub mod update;

/// Prediction inputs. Every field is optional here; the required ones are
/// checked the same way the form checks them.
#[derive(Args, Debug, Default, Clone)]
pub struct PredictArgs {
    /// Season code: 1 spring, 2 summer, 3 autumn, 4 winter
    #[arg(long)]
    pub season: Option<String>,

    /// Month number; must belong to the season
    #[arg(long)]
    pub mnth: Option<String>,

    /// Hour of day (0-23)
    #[arg(long)]
    pub hr: Option<String>,

    /// Day of week, 0 = Monday
    #[arg(long)]
    pub weekday: Option<String>,

    /// Temperature in °C
    #[arg(long)]
    pub temp: Option<String>,

    /// Weather: 1 clear, 2 cloudy, 3 rain, 4 heavy rain
    #[arg(long)]
    pub weathersit: Option<String>,

    /// Humidity in percent
    #[arg(long)]
    pub hum: Option<String>,

    /// Wind speed in m/s
    #[arg(long)]
    pub windspeed: Option<String>,

    /// "true" or "false"
    #[arg(long)]
    pub holiday: Option<String>,

    /// "true" or "false"
    #[arg(long)]
    pub workingday: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Request a rental prediction
    Predict(PredictArgs),

    /// List previous prediction requests
    History,

    /// Record the observed rentals for a previous request
    UpdateActual {
        /// Request ID from the history list
        #[arg(short = 'r', long)]
        request_id: Option<String>,

        /// Observed number of rentals
        #[arg(short = 'a', long)]
        actual: String,
    },
}

/// Prints notices to stdout; a terminal line needs no acknowledgement.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("{}", notice);
    }
}

pub async fn run(config: ServiceConfig, command: Command) -> anyhow::Result<()> {
    log::debug!("Prediction service at {}", config.base_url);
    let service = HttpPredictionService::new(config);
    match command {
        Command::Predict(args) => predict::run_predict(&service, &args).await,
        Command::History => history::run_history(&service).await,
        Command::UpdateActual { request_id, actual } => {
            update::run_update_actual(&service, request_id.as_deref(), &actual).await
        }
    }
}
