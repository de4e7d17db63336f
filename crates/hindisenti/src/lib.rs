//! hindisenti: client for a hosted Hindi sentiment-classification API
//!
//! This library provides:
//! - A timed prediction request: one POST per submission, raced against a deadline
//! - The closed label set and its display mapping
//! - A submission state machine that drops superseded results
//! - Result card and alert modal presentation, in English and Hindi
//!
//! # Example
//!
//! ```no_run
//! use hindisenti::{ClientConfig, SentimentClient};
//!
//! #[tokio::main]
//! async fn main() -> hindisenti::Result<()> {
//!     let client = SentimentClient::new(ClientConfig::default())?;
//!     let outcome = client.predict("मुझे यह फ़िल्म बहुत पसंद आई").await?;
//!     println!("{}", outcome);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod client;
pub mod label;
pub mod outcome;
pub mod session;
pub mod view;

pub use error::{Result, SentimentError};

pub use config::{
    get_message, get_messages, ClientConfig, Language, DEFAULT_CONFIG, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_MS, DEFAULT_WAKE_URL, MESSAGES_EN, MESSAGES_HI,
};

pub use client::{
    interpret_response, HttpTransport, PredictionRequest, RawResponse, SentimentClient, Transport,
};
pub use label::{BadgeVariant, SentimentLabel};
pub use outcome::{CallOutcome, Prediction, PredictionResult};
pub use session::{PredictionSession, SessionState, SharedSession, Ticket};
pub use view::{AlertModal, Badge, ResultCard, ViewState};
