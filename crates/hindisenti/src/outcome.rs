//! Outcome of a single timed prediction call

use serde::Serialize;
use std::fmt;

use crate::config::{get_message, Language};
use crate::error::SentimentError;
use crate::label::SentimentLabel;

/// A recognized label together with the value the API actually returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub label: SentimentLabel,
    /// Value of the `prediction` field as received, casing preserved
    pub raw: String,
}

impl Prediction {
    /// Validate a raw `prediction` value against the label set
    pub fn from_raw(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        SentimentLabel::parse(&raw).map(|label| Self { label, raw })
    }
}

/// How one call resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CallOutcome {
    Success(Prediction),
    MalformedResponse,
    NetworkFailure,
    Timeout,
}

impl CallOutcome {
    /// Classify a transport-level error
    pub fn from_error(err: &SentimentError) -> Self {
        match err {
            SentimentError::Timeout(_) => Self::Timeout,
            _ => Self::NetworkFailure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Timeout and malformed responses both raise the wake-the-API alert
    pub fn shows_alert(&self) -> bool {
        matches!(self, Self::Timeout | Self::MalformedResponse)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Success(p) => Some(p),
            _ => None,
        }
    }

    /// Value held for display after resolution
    pub fn result(&self) -> PredictionResult {
        match self {
            Self::Success(p) => PredictionResult::Label(p.label),
            _ => PredictionResult::Error,
        }
    }

    /// Inline result text shown to the user
    pub fn message(&self, lang: Language) -> String {
        match self {
            Self::Success(p) => format!("{}: {}", get_message("sentiment", lang), p.raw),
            Self::MalformedResponse => get_message("error_unexpected_response", lang).to_string(),
            Self::Timeout => get_message("error_timeout", lang).to_string(),
            Self::NetworkFailure => get_message("error_asleep", lang).to_string(),
        }
    }

    /// Short machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::MalformedResponse => "malformed_response",
            Self::NetworkFailure => "network_failure",
            Self::Timeout => "timeout",
        }
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Language::English))
    }
}

/// Prediction shown on the result card: a label, or the error sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionResult {
    Label(SentimentLabel),
    Error,
}

impl PredictionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label(label) => label.as_str(),
            Self::Error => "error",
        }
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn success(raw: &str) -> CallOutcome {
        CallOutcome::Success(Prediction::from_raw(raw).unwrap())
    }

    #[test]
    fn test_success_message_keeps_api_casing() {
        assert_eq!(success("positive").message(Language::English), "Sentiment: positive");
        assert_eq!(success("POSITIVE").message(Language::English), "Sentiment: POSITIVE");
        assert_eq!(
            success("POSITIVE").result(),
            PredictionResult::Label(SentimentLabel::Positive)
        );
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        let timeout = CallOutcome::Timeout.message(Language::English);
        let asleep = CallOutcome::NetworkFailure.message(Language::English);
        let malformed = CallOutcome::MalformedResponse.message(Language::English);

        assert!(timeout.contains("timeout"));
        assert!(asleep.contains("asleep"));
        assert!(malformed.contains("Unexpected response"));
        assert_ne!(timeout, asleep);
        assert_ne!(timeout, malformed);
        assert_ne!(asleep, malformed);
    }

    #[test]
    fn test_alert_only_for_timeout_and_malformed() {
        assert!(CallOutcome::Timeout.shows_alert());
        assert!(CallOutcome::MalformedResponse.shows_alert());
        assert!(!CallOutcome::NetworkFailure.shows_alert());
        assert!(!success("neutral").shows_alert());
    }

    #[test]
    fn test_failures_hold_error_sentinel() {
        for outcome in [
            CallOutcome::Timeout,
            CallOutcome::MalformedResponse,
            CallOutcome::NetworkFailure,
        ] {
            assert_eq!(outcome.result(), PredictionResult::Error);
            assert_eq!(outcome.result().as_str(), "error");
        }
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            CallOutcome::from_error(&SentimentError::Timeout(Duration::from_secs(8))),
            CallOutcome::Timeout
        );
        assert_eq!(
            CallOutcome::from_error(&SentimentError::Status(503)),
            CallOutcome::NetworkFailure
        );
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let value = serde_json::to_value(success("Negative")).unwrap();
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["label"], "negative");
        assert_eq!(value["raw"], "Negative");

        let value = serde_json::to_value(CallOutcome::Timeout).unwrap();
        assert_eq!(value["outcome"], "timeout");
    }
}
