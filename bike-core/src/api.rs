//! Wire types and client for the prediction service.
//!
//! The service exposes three endpoints:
//! - `POST /predict` with the form values, answering `{prediction, request_id}`
//! - `GET /predict`, answering `{history: [...]}`
//! - `POST /update-actual` with `{request_id, actual_rentals}`

use crate::error::Result;
use crate::form::FormData;
use crate::history::HistoryEntry;
use crate::opaque::Opaque;
use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
use crate::error::ServiceError;
#[cfg(feature = "api")]
use log::{debug, info};
#[cfg(feature = "api")]
use reqwest::Client;

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const PREDICT_PATH: &str = "/predict";
pub const UPDATE_ACTUAL_PATH: &str = "/update-actual";

/// Where the prediction service lives.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an endpoint path such as `/predict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Successful answer to a prediction request.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Opaque,
    #[serde(default)]
    pub request_id: Option<Opaque>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Body of an actual-value update.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UpdateActualRequest {
    pub request_id: Opaque,
    pub actual_rentals: String,
}

/// The three calls the form makes. Implemented over HTTP by
/// [`HttpPredictionService`] and by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(&self, form: &FormData) -> Result<PredictResponse>;

    async fn history(&self) -> Result<Vec<HistoryEntry>>;

    async fn update_actual(&self, request: &UpdateActualRequest) -> Result<()>;
}

/// reqwest-backed client. Cheap to clone; clones share one connection pool.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: Client,
    config: ServiceConfig,
}

#[cfg(feature = "api")]
impl HttpPredictionService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ServiceError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(feature = "api")]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, form: &FormData) -> Result<PredictResponse> {
        let url = self.config.endpoint(PREDICT_PATH);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(form).send().await?;
        Self::check_status(&response)?;
        let body: PredictResponse = response.json().await?;
        info!("POST {} - prediction {}", PREDICT_PATH, body.prediction);
        Ok(body)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        let url = self.config.endpoint(PREDICT_PATH);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::check_status(&response)?;
        let body: HistoryResponse = response.json().await?;
        info!("GET {} - {} history entries", PREDICT_PATH, body.history.len());
        Ok(body.history)
    }

    async fn update_actual(&self, request: &UpdateActualRequest) -> Result<()> {
        let url = self.config.endpoint(UPDATE_ACTUAL_PATH);
        debug!("POST {} for request {}", url, request.request_id);
        let response = self.client.post(&url).json(request).send().await?;
        Self::check_status(&response)?;
        info!("POST {} - updated {}", UPDATE_ACTUAL_PATH, request.request_id);
        Ok(())
    }
}
