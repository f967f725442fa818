//! Bike Rental Demand Prediction Form
//!
//! Collects the prediction inputs, asks the prediction service for a
//! forecast, lists past requests and lets the operator attach the observed
//! rentals to one of them.
//!
//! The service address defaults to `http://localhost:5000` and can be
//! overridden per browser through the `bike_predict_api_base` localStorage key.

use bike_form_ui::browser;
use bike_form_ui::components::PredictionForm;
use bike_form_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bike-predict-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = browser::service_config();
        log::info!("Prediction service: {}", config.base_url);
        AppState::new(config)
    });

    rsx! {
        PredictionForm {}
    }
}
