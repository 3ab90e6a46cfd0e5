//! Error handling for tldify

use thiserror::Error;

/// Main error type for tldify
#[derive(Error, Debug, Clone)]
pub enum TldifyError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("TLD catalog unavailable: {message}")]
    CatalogUnavailable {
        message: String,
        status_code: Option<u16>,
        source_url: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl TldifyError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a catalog-unavailable error
    pub fn catalog_unavailable(
        message: impl Into<String>,
        status_code: Option<u16>,
        source_url: Option<String>,
    ) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
            status_code,
            source_url,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or TLDIFY_* variables", message)
            }
            Self::CatalogUnavailable { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("⚠️  TLD list unavailable{}: {}\n💡 Suggestions are disabled until the list can be loaded", status, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 Try increasing TLDIFY_TIMEOUT_SECS", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Hostnames may only contain letters, digits and '-' (max 63)", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for TldifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for TldifyError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::IO(e) => Self::io(e.to_string(), None),
            other => Self::cli(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TldifyError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::TldifyError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::TldifyError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_unavailable_message() {
        let err = TldifyError::catalog_unavailable("HTTP 503", Some(503), None);
        assert!(err.to_string().contains("HTTP 503"));
        assert!(err.user_message().contains("(503)"));
    }

    #[test]
    fn test_config_error_macro() {
        let err = config_error!("Invalid value for {}: '{}'", "TLDIFY_RETRIES", "many");
        assert!(matches!(err, TldifyError::Config { .. }));
        assert!(err.to_string().contains("TLDIFY_RETRIES"));
    }
}
