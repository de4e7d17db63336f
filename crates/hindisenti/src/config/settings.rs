//! Client settings for the remote sentiment endpoint

use lazy_static::lazy_static;
use std::env;
use std::time::Duration;

use super::i18n::Language;
use crate::error::{Result, SentimentError};

/// Hosted prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "https://ItsMeArm00n-hindisenti.hf.space/predict";

/// Hosting page of the remote service; visiting it restarts a sleeping instance
pub const DEFAULT_WAKE_URL: &str = "https://ItsMeArm00n-hindisenti.hf.space";

/// Deadline for a single prediction call
pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

/// Configuration for the sentiment client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub wake_url: String,
    pub lang: Language,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl ClientConfig {
    /// Create a config for a custom endpoint, other settings from the environment
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Build a config from an arbitrary variable source
    ///
    /// Reads `HINDISENTI_ENDPOINT`, `HINDISENTI_TIMEOUT_MS`, `HINDISENTI_WAKE_URL`
    /// and `HINDISENTI_LANG`. Unset or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint: lookup("HINDISENTI_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_millis(
                lookup("HINDISENTI_TIMEOUT_MS")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
            wake_url: lookup("HINDISENTI_WAKE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_WAKE_URL.to_string()),
            lang: lookup("HINDISENTI_LANG")
                .map(|v| Language::from_str(&v))
                .unwrap_or_default(),
        }
    }

    /// Set the prediction endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the wake URL
    pub fn with_wake_url(mut self, wake_url: impl Into<String>) -> Self {
        self.wake_url = wake_url.into();
        self
    }

    /// Set the message language
    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    /// Check that the endpoint and wake URL are http(s) and the deadline is non-zero
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("endpoint", &self.endpoint), ("wake_url", &self.wake_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SentimentError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }
        if self.timeout.is_zero() {
            return Err(SentimentError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

lazy_static! {
    /// Global client configuration read once from the environment
    pub static ref DEFAULT_CONFIG: ClientConfig = ClientConfig::default();
}
