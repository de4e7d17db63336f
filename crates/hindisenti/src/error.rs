//! Error types for sentiment API calls
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Input sentence is empty")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
