//! Core types and structures for tldify

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Domain availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Taken,
    #[default]
    Unknown,
    Error,
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Unknown => write!(f, "unknown"),
            AvailabilityStatus::Error => write!(f, "error"),
        }
    }
}

/// One suggested FQDN derived from the user input and a matching TLD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDomain {
    pub fqdn: String,
    /// Uppercase catalog entry that produced this candidate
    pub tld: String,
    pub available: bool,
    /// True until an existence check for this fqdn has been applied
    pub pending: bool,
    #[serde(default)]
    pub status: AvailabilityStatus,
}

impl CandidateDomain {
    pub fn new(fqdn: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            fqdn: fqdn.into(),
            tld: tld.into(),
            available: false,
            pending: true,
            status: AvailabilityStatus::Unknown,
        }
    }

    /// Record the outcome of an existence check
    pub fn resolve(&mut self, status: AvailabilityStatus) {
        self.pending = false;
        self.available = status == AvailabilityStatus::Available;
        self.status = status;
    }
}

/// Existence check outcome for a single FQDN
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub status: AvailabilityStatus,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Option<Duration>,
    pub error_message: Option<String>,
}

impl DomainAvailability {
    pub fn new(domain: impl Into<String>, status: AvailabilityStatus) -> Self {
        Self {
            domain: domain.into(),
            status,
            checked_at: Utc::now(),
            check_duration: None,
            error_message: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.check_duration = Some(duration);
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Configuration for loading the TLD catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub url: String,
    /// Load from this file instead of `url` when set
    pub file: Option<std::path::PathBuf>,
    pub timeout: Duration,
    pub retry_attempts: usize,
    pub retry_delay: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: crate::catalog::DEFAULT_TLD_URL.to_string(),
            file: None,
            timeout: Duration::from_secs(10),
            retry_attempts: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Configuration for existence checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub enabled: bool,
    pub concurrent_checks: usize,
    pub timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            concurrent_checks: 10,
            timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_defaults() {
        let candidate = CandidateDomain::new("google.com", "COM");
        assert!(candidate.pending);
        assert!(!candidate.available);
        assert_eq!(candidate.status, AvailabilityStatus::Unknown);
    }

    #[test]
    fn test_candidate_resolve() {
        let mut candidate = CandidateDomain::new("google.com", "COM");
        candidate.resolve(AvailabilityStatus::Available);
        assert!(!candidate.pending);
        assert!(candidate.available);

        candidate.resolve(AvailabilityStatus::Unknown);
        assert!(!candidate.pending);
        assert!(!candidate.available);
    }

    #[test]
    fn test_candidate_json_shape() {
        let candidate = CandidateDomain::new("g.oogle", "OOGLE");
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["fqdn"], "g.oogle");
        assert_eq!(json["tld"], "OOGLE");
        assert_eq!(json["pending"], true);
        assert_eq!(json["status"], "unknown");
    }
}
