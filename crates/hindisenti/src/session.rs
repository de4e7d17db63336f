//! Submission state machine: `Idle -> Pending -> Resolved`
//!
//! A new submission while one is pending restarts the cycle. Each submission
//! carries a ticket and only the latest ticket may resolve the session, so a
//! superseded call can never overwrite the display.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::{PredictionRequest, SentimentClient, Transport};
use crate::config::Language;
use crate::error::Result;
use crate::outcome::CallOutcome;
use crate::view::ViewState;

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Pending(Ticket),
    Resolved(CallOutcome),
}

/// Form state for one user
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    state: SessionState,
    issued: u64,
    view: ViewState,
    lang: Language,
}

impl PredictionSession {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SessionState::Pending(_))
    }

    /// Start a submission
    ///
    /// Blank input is rejected and leaves the session untouched.
    pub fn begin(&mut self, sentence: &str) -> Result<(Ticket, PredictionRequest)> {
        let request = PredictionRequest::new(sentence)?;
        self.issued += 1;
        let ticket = Ticket(self.issued);
        if let SessionState::Pending(previous) = self.state {
            debug!("Submission {:?} supersedes {:?}", ticket, previous);
        }
        self.state = SessionState::Pending(ticket);
        self.view.start_loading();
        Ok((ticket, request))
    }

    /// Resolve a submission; returns false if the ticket is no longer current
    pub fn complete(&mut self, ticket: Ticket, outcome: CallOutcome) -> bool {
        if self.state != SessionState::Pending(ticket) {
            debug!("Dropping stale outcome for {:?}", ticket);
            return false;
        }
        self.view.apply(&outcome, self.lang);
        self.state = SessionState::Resolved(outcome);
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.view.dismiss_alert();
    }
}

/// Session shared between concurrent submissions
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<PredictionSession>>,
}

impl SharedSession {
    pub fn new(lang: Language) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PredictionSession::new(lang))),
        }
    }

    /// Copy of the current form flags
    pub async fn view(&self) -> ViewState {
        self.inner.read().await.view().clone()
    }

    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state().clone()
    }

    pub async fn dismiss_alert(&self) {
        self.inner.write().await.dismiss_alert();
    }

    /// Submit a sentence and apply the outcome if no newer submission started meanwhile
    ///
    /// Returns `Ok(None)` when the outcome was superseded. The lock is not held
    /// while the call is in flight.
    pub async fn submit<T: Transport>(
        &self,
        client: &SentimentClient<T>,
        sentence: &str,
    ) -> Result<Option<CallOutcome>> {
        let (ticket, request) = self.inner.write().await.begin(sentence)?;
        let outcome = client.call(&request).await;
        let applied = self.inner.write().await.complete(ticket, outcome.clone());
        Ok(applied.then_some(outcome))
    }
}
