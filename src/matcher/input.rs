//! Edge validation for hostname input

use crate::error::{Result, TldifyError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a single DNS label
pub const MAX_INPUT_LEN: usize = 63;

static INPUT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-]{0,63}$").expect("INPUT_PATTERN: hardcoded regex is invalid")
});

/// Accept `raw` if it is at most 63 characters of `[a-zA-Z0-9-]`.
///
/// Returns the lowercase form to store, or `None` when the input must be rejected.
pub fn validate_input(raw: &str) -> Option<String> {
    if INPUT_PATTERN.is_match(raw) {
        Some(raw.to_lowercase())
    } else {
        None
    }
}

/// Hostname input validator
///
/// Keystroke input goes through [`validate_input`] and is rejected silently.
/// This wrapper reports why, for one-shot command line use.
#[derive(Debug, Clone, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate and normalize a hostname
    pub fn validate(&self, raw: &str) -> Result<String> {
        let raw = raw.trim();

        if raw.chars().count() > MAX_INPUT_LEN {
            return Err(TldifyError::validation(format!(
                "Hostname too long (max {} characters)",
                MAX_INPUT_LEN
            )));
        }

        if raw.contains('.') {
            return Err(TldifyError::validation(
                "Type the hostname without dots, the TLD is found for you",
            ));
        }

        validate_input(raw).ok_or_else(|| TldifyError::validation("Hostname contains invalid characters"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_and_lowercases() {
        assert_eq!(validate_input("GoogleCom").as_deref(), Some("googlecom"));
        assert_eq!(validate_input("my-site1").as_deref(), Some("my-site1"));
        assert_eq!(validate_input("").as_deref(), Some(""));
    }

    #[test]
    fn test_rejects_bad_characters() {
        assert!(validate_input("google.com").is_none());
        assert!(validate_input("hello world").is_none());
        assert!(validate_input("ünïcode").is_none());
        assert!(validate_input("under_score").is_none());
    }

    #[test]
    fn test_length_limit() {
        let max = "a".repeat(MAX_INPUT_LEN);
        assert!(validate_input(&max).is_some());
        assert!(validate_input(&format!("{max}a")).is_none());
    }

    #[test]
    fn test_validator_messages() {
        let validator = InputValidator::new();

        assert_eq!(validator.validate("  Example ").unwrap(), "example");
        assert!(validator.validate("example.com").unwrap_err().to_string().contains("without dots"));
        assert!(validator.validate(&"x".repeat(64)).unwrap_err().to_string().contains("too long"));
        assert!(validator.validate("a_b").unwrap_err().to_string().contains("invalid characters"));
    }
}
