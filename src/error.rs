//! Error types for the Cartola API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CartolaError>;

#[derive(Error, Debug)]
pub enum CartolaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Key not found in payload: {key}")]
    MissingKey { key: String },

    #[error("Unexpected shape at key {key}: expected {expected}, found {found}")]
    UnexpectedShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Record {index} is not an object (found {found})")]
    InvalidRecord { index: usize, found: &'static str },

    #[error("Cartola API returned no data")]
    EmptyPayload,
}

impl CartolaError {
    /// True for failures raised while talking to the remote service.
    pub fn is_transport(&self) -> bool {
        matches!(self, CartolaError::Http(_) | CartolaError::Json(_))
    }

    /// True for failures caused by a payload that does not have the expected layout.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            CartolaError::MissingKey { .. }
                | CartolaError::UnexpectedShape { .. }
                | CartolaError::InvalidRecord { .. }
                | CartolaError::EmptyPayload
        )
    }
}
