//! Per-session state: catalog, current input and its candidates

use crate::catalog::TldCatalog;
use crate::matcher::{match_input, validate_input};
use crate::types::{CandidateDomain, DomainAvailability};
use parking_lot::RwLock;
use std::sync::Arc;

/// Session handle shared between the prompt and the main loop
pub type SharedSession = Arc<RwLock<Session>>;

/// Domains to look up for one accepted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub version: u64,
    pub domains: Vec<String>,
}

/// Explicit context object owned by the front end.
///
/// Each accepted input replaces the whole candidate list and bumps `version`.
/// Availability results carry the version they were requested for and are
/// dropped if a newer input has been accepted since.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<TldCatalog>,
    input: String,
    candidates: Vec<CandidateDomain>,
    version: u64,
}

impl Session {
    pub fn new(catalog: TldCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            input: String::new(),
            candidates: Vec::new(),
            version: 0,
        }
    }

    pub fn shared(catalog: TldCatalog) -> SharedSession {
        Arc::new(RwLock::new(Self::new(catalog)))
    }

    pub fn catalog(&self) -> &TldCatalog {
        &self.catalog
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn candidates(&self) -> &[CandidateDomain] {
        &self.candidates
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Accept a new raw input.
    ///
    /// Invalid input is rejected silently: nothing changes and `false` is returned.
    pub fn set_input(&mut self, raw: &str) -> bool {
        let Some(input) = validate_input(raw) else {
            tracing::trace!(raw = %raw, "Rejected input");
            return false;
        };

        self.candidates = match_input(&input, &self.catalog);
        self.input = input;
        self.version += 1;

        tracing::trace!(
            input = %self.input,
            version = %self.version,
            candidates = %self.candidates.len(),
            "Input accepted"
        );
        true
    }

    /// FQDNs of the current candidates, tagged with the current version
    pub fn pending_check(&self) -> CheckRequest {
        CheckRequest {
            version: self.version,
            domains: self.candidates.iter().map(|c| c.fqdn.clone()).collect(),
        }
    }

    /// Apply existence-check results for `version`.
    ///
    /// Returns `false` and leaves the candidates untouched when `version` is stale.
    pub fn apply_availability(&mut self, version: u64, results: &[DomainAvailability]) -> bool {
        if version != self.version {
            tracing::debug!(
                stale_version = %version,
                current_version = %self.version,
                "Discarding stale availability results"
            );
            return false;
        }

        for result in results {
            if let Some(candidate) = self.candidates.iter_mut().find(|c| c.fqdn == result.domain) {
                candidate.resolve(result.status);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AvailabilityStatus;

    fn session() -> Session {
        Session::new(TldCatalog::new(
            vec!["COM".to_string(), "NET".to_string(), "OOGLE".to_string()],
            "Mon, 01 Jan 2024 00:00:00 GMT",
        ))
    }

    #[test]
    fn test_set_input_recomputes() {
        let mut s = session();
        assert!(s.set_input("Google"));
        assert_eq!(s.input(), "google");
        assert_eq!(s.candidates().len(), 1);
        assert_eq!(s.candidates()[0].fqdn, "g.oogle");

        assert!(s.set_input("googlecom"));
        assert_eq!(s.candidates().len(), 1);
        assert_eq!(s.candidates()[0].fqdn, "google.com");
        assert_eq!(s.version(), 2);
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        let mut s = session();
        s.set_input("googlecom");
        let before = s.candidates().to_vec();

        assert!(!s.set_input("google.com"));
        assert!(!s.set_input(&"a".repeat(64)));
        assert_eq!(s.input(), "googlecom");
        assert_eq!(s.candidates(), before.as_slice());
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn test_clearing_input() {
        let mut s = session();
        s.set_input("googlecom");
        assert!(s.set_input(""));
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn test_apply_current_results() {
        let mut s = session();
        s.set_input("googlecom");
        let request = s.pending_check();
        assert_eq!(request.domains, vec!["google.com".to_string()]);

        let results = vec![DomainAvailability::new("google.com", AvailabilityStatus::Taken)];
        assert!(s.apply_availability(request.version, &results));

        let candidate = &s.candidates()[0];
        assert!(!candidate.pending);
        assert!(!candidate.available);
        assert_eq!(candidate.status, AvailabilityStatus::Taken);
    }

    #[test]
    fn test_stale_results_discarded() {
        let mut s = session();
        s.set_input("googlecom");
        let request = s.pending_check();

        s.set_input("googlenet");
        let results = vec![DomainAvailability::new("google.com", AvailabilityStatus::Available)];
        assert!(!s.apply_availability(request.version, &results));
        assert!(s.candidates().iter().all(|c| c.pending));
    }

    #[test]
    fn test_empty_catalog_session() {
        let mut s = Session::new(TldCatalog::empty());
        assert!(s.set_input("googlecom"));
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn test_shared_session() {
        let shared = Session::shared(TldCatalog::new(vec!["COM".to_string()], ""));
        shared.write().set_input("acmecom");
        assert_eq!(shared.read().candidates()[0].fqdn, "acme.com");
    }
}
