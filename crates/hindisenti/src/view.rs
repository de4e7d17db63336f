//! Presentation model for the result card and the alert modal

use crate::config::{get_message, ClientConfig, Language};
use crate::label::BadgeVariant;
use crate::outcome::{CallOutcome, PredictionResult};

/// Flags backing the prediction form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Inline result text; empty when nothing is displayed
    pub result: String,
    pub prediction: Option<PredictionResult>,
    pub loading: bool,
    pub show_alert: bool,
}

impl ViewState {
    /// Clear the previous result and mark a request as outstanding
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.result.clear();
        self.prediction = None;
        self.show_alert = false;
    }

    /// Record a resolved call
    pub fn apply(&mut self, outcome: &CallOutcome, lang: Language) {
        self.loading = false;
        self.result = outcome.message(lang);
        self.prediction = Some(outcome.result());
        self.show_alert = outcome.shows_alert();
    }

    pub fn dismiss_alert(&mut self) {
        self.show_alert = false;
    }

    /// Submit control is disabled while a request is outstanding
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Result card, if there is a result to show
    pub fn card(&self, lang: Language) -> Option<ResultCard> {
        if self.result.is_empty() {
            return None;
        }
        let label = self.prediction.and_then(|p| p.label());
        Some(ResultCard {
            title: get_message("analysis_result", lang).to_string(),
            text: self.result.clone(),
            class: label.map(|l| l.display_class()).unwrap_or(""),
            badge: label.map(|l| Badge {
                text: if l.is_low_confidence() {
                    get_message("low_confidence", lang).to_string()
                } else {
                    l.as_str().to_string()
                },
                variant: l.badge(),
            }),
            hint: label
                .filter(|l| l.is_low_confidence())
                .map(|_| get_message("low_confidence_hint", lang).to_string()),
        })
    }

    /// Alert modal, if it is currently open
    pub fn alert(&self, config: &ClientConfig) -> Option<AlertModal> {
        self.show_alert.then(|| AlertModal::api_timeout(config))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
}

/// Rendered result of one prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub text: String,
    /// Display class, empty for the error sentinel
    pub class: &'static str,
    pub badge: Option<Badge>,
    pub hint: Option<String>,
}

/// Dialog suggesting the user wake the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertModal {
    pub title: String,
    pub description: String,
    pub action_label: String,
    pub action_url: String,
    pub close_label: String,
}

impl AlertModal {
    pub fn api_timeout(config: &ClientConfig) -> Self {
        let lang = config.lang;
        Self {
            title: get_message("alert_title", lang).to_string(),
            description: get_message("alert_description", lang).to_string(),
            action_label: get_message("alert_action", lang).to_string(),
            action_url: config.wake_url.clone(),
            close_label: get_message("alert_close", lang).to_string(),
        }
    }
}
