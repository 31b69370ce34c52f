//! Error types for the weather crate.

use thiserror::Error;

/// Errors raised while fetching or aggregating weather history.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Samples and timestamps do not line up one to one.
    #[error("Got {samples} samples for {timestamps} timestamps")]
    LengthMismatch { samples: usize, timestamps: usize },

    /// A timestamp could not be parsed.
    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    /// A data provider failed to deliver.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The location lacks data required for the request.
    #[error("Incomplete site information: {0}")]
    IncompleteSite(String),

    /// Persisted or fetched JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn provider(msg: impl Into<String>) -> Self {
        WeatherError::Provider(msg.into())
    }
}

/// Result type for weather operations
pub type Result<T> = std::result::Result<T, WeatherError>;
