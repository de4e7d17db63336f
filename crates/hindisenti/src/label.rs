//! Closed set of sentiment labels returned by the remote classifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four labels the classifier can return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "neutral (low confidence)")]
    NeutralLowConfidence,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 4] = [
        Self::Positive,
        Self::Negative,
        Self::Neutral,
        Self::NeutralLowConfidence,
    ];

    /// Match a raw API value against the label set, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            "neutral (low confidence)" => Some(Self::NeutralLowConfidence),
            _ => None,
        }
    }

    /// Canonical lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::NeutralLowConfidence => "neutral (low confidence)",
        }
    }

    /// CSS-style class of the result card
    pub fn display_class(&self) -> &'static str {
        match self {
            Self::Positive => "result-positive",
            Self::Negative => "result-negative",
            Self::Neutral => "result-neutral",
            Self::NeutralLowConfidence => "result-neutral-low",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Positive => BadgeVariant::Default,
            Self::Negative => BadgeVariant::Destructive,
            Self::Neutral => BadgeVariant::Secondary,
            Self::NeutralLowConfidence => BadgeVariant::Outline,
        }
    }

    pub fn is_low_confidence(&self) -> bool {
        matches!(self, Self::NeutralLowConfidence)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual style of the label badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}
