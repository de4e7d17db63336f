//! User-visible messages in English and Hindi
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Language options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Parse language from string, falling back to English
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hi" | "hindi" | "हिंदी" | "हिन्दी" => Self::Hindi,
            _ => Self::English,
        }
    }

    /// Get language code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }
}

/// English messages
pub static MESSAGES_EN: phf::Map<&'static str, &'static str> = phf_map! {
    "sentiment" => "Sentiment",
    "analysis_result" => "Analysis Result",
    "analyzing" => "Analyzing...",
    "enter_sentence" => "Enter a Hindi sentence",
    "empty_input" => "Please enter a sentence first.",
    "error_unexpected_response" => "Error: Unexpected response from API. Please try again.",
    "error_timeout" => "Error: API timeout. Please try again.",
    "error_asleep" => "\u{26A0}\u{FE0F} The API is taking longer than expected or returned an unexpected response. It may currently be asleep. Please restart it using the [API Source (Hugging Face)] link.",
    "low_confidence" => "Low Confidence",
    "low_confidence_hint" => "The model has low confidence in this prediction. Consider rephrasing or providing more context for better accuracy.",
    "alert_title" => "API Response Timeout",
    "alert_description" => "The API is taking too long. It may be asleep. Please restart it using the link [API Source (Hugging Face)].",
    "alert_action" => "Visit API",
    "alert_close" => "Close",
    "wake_prompt" => "Visit the API now to wake it? (y/n)",
    "wake_sent" => "Wake request sent",
    "wake_failed" => "Wake request failed",
    "interactive_hint" => "Entering interactive mode. Type 'quit' to exit.",
};

/// Hindi messages
pub static MESSAGES_HI: phf::Map<&'static str, &'static str> = phf_map! {
    "sentiment" => "भावना",
    "analysis_result" => "विश्लेषण परिणाम",
    "analyzing" => "विश्लेषण हो रहा है...",
    "enter_sentence" => "एक हिंदी वाक्य लिखें",
    "empty_input" => "कृपया पहले एक वाक्य लिखें।",
    "error_unexpected_response" => "त्रुटि: API से अप्रत्याशित उत्तर मिला। कृपया पुनः प्रयास करें।",
    "error_timeout" => "त्रुटि: API का समय समाप्त हो गया। कृपया पुनः प्रयास करें।",
    "error_asleep" => "\u{26A0}\u{FE0F} API अपेक्षा से अधिक समय ले रहा है या अप्रत्याशित उत्तर दे रहा है। हो सकता है यह अभी सो रहा हो। कृपया [API Source (Hugging Face)] लिंक से इसे पुनः आरंभ करें।",
    "low_confidence" => "कम विश्वास",
    "low_confidence_hint" => "मॉडल को इस अनुमान पर कम विश्वास है। बेहतर सटीकता के लिए वाक्य बदलें या अधिक संदर्भ दें।",
    "alert_title" => "API उत्तर का समय समाप्त",
    "alert_description" => "API बहुत अधिक समय ले रहा है। हो सकता है यह सो रहा हो। कृपया [API Source (Hugging Face)] लिंक से इसे पुनः आरंभ करें।",
    "alert_action" => "API पर जाएँ",
    "alert_close" => "बंद करें",
    "wake_prompt" => "क्या API को जगाने के लिए अभी खोलें? (y/n)",
    "wake_sent" => "जगाने का अनुरोध भेजा गया",
    "wake_failed" => "जगाने का अनुरोध विफल रहा",
    "interactive_hint" => "इंटरैक्टिव मोड। बाहर निकलने के लिए 'quit' लिखें।",
};

/// Get messages dictionary by language
pub fn get_messages(lang: Language) -> &'static phf::Map<&'static str, &'static str> {
    match lang {
        Language::English => &MESSAGES_EN,
        Language::Hindi => &MESSAGES_HI,
    }
}

/// Get a single message by key and language
/// Returns the message if found, otherwise returns the key as a fallback
pub fn get_message<'a>(key: &'a str, lang: Language) -> &'a str {
    match get_messages(lang).get(key) {
        Some(msg) => msg,
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("en"), Language::English);
        assert_eq!(Language::from_str("hi"), Language::Hindi);
        assert_eq!(Language::from_str("Hindi"), Language::Hindi);
        assert_eq!(Language::from_str("fr"), Language::English);
    }

    #[test]
    fn test_get_message() {
        assert_eq!(get_message("alert_action", Language::English), "Visit API");
        assert_eq!(get_message("alert_action", Language::Hindi), "API पर जाएँ");
        assert_eq!(get_message("missing_key", Language::Hindi), "missing_key");
    }

    #[test]
    fn test_tables_have_same_keys() {
        for key in MESSAGES_EN.keys() {
            assert!(MESSAGES_HI.contains_key(key), "missing hindi message: {}", key);
        }
        assert_eq!(MESSAGES_EN.len(), MESSAGES_HI.len());
    }
}
