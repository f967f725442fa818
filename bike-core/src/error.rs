//! Error types for prediction service calls

use thiserror::Error;

/// Failure of a call to the prediction service
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ServiceError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status
    #[error("Bad response status: {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape
    #[error("Failed to parse HTTP response: {0}")]
    Decode(String),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ServiceError::Status {
                status: status.as_u16(),
            }
        } else {
            ServiceError::Request(err.to_string())
        }
    }
}

/// Type alias for Results using ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;
