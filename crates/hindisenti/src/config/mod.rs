//! Configuration module for hindisenti
//!
//! This module contains:
//! - `settings`: endpoint, deadline and wake URL, with environment overrides
//! - `i18n`: English and Hindi messages

mod i18n;
mod settings;

pub use i18n::{get_message, get_messages, Language, MESSAGES_EN, MESSAGES_HI};
pub use settings::{
    ClientConfig, DEFAULT_CONFIG, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, DEFAULT_WAKE_URL,
};
