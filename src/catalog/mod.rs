//! TLD catalog: the list of currently valid top-level domains
//!
//! The catalog is built once per session and never mutated afterwards.

pub mod loader;

pub use loader::{CatalogLoader, FileCatalogSource, HttpCatalogSource};

use crate::error::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical IANA list, one uppercase TLD per line after a version header
pub const DEFAULT_TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

static TLD_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9-]+$").expect("TLD_ENTRY: hardcoded regex is invalid")
});

/// Raw catalog text as delivered by a source
#[derive(Debug, Clone)]
pub struct RawCatalog {
    pub body: String,
    /// `Last-Modified` value, or empty when the source has none
    pub last_modified: String,
    pub origin: String,
}

/// Trait for places a TLD list can be read from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw list
    async fn fetch(&self) -> Result<RawCatalog>;

    /// Human-readable location (URL or path)
    fn describe(&self) -> String;
}

/// Immutable, ordered set of uppercase TLDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldCatalog {
    tlds: Vec<String>,
    last_updated: String,
    source: String,
}

impl TldCatalog {
    /// Build a catalog from already-uppercase entries. Empty entries are dropped.
    pub fn new(mut tlds: Vec<String>, last_updated: impl Into<String>) -> Self {
        tlds.retain(|t| !t.is_empty());
        Self {
            tlds,
            last_updated: last_updated.into(),
            source: String::new(),
        }
    }

    /// The degraded catalog used when loading fails
    pub fn empty() -> Self {
        Self::new(Vec::new(), "")
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tlds.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    /// Opaque `Last-Modified` value, display only
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for TldCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parse a TLD list.
///
/// The first line is a version header and is always dropped. Blank lines are
/// ignored and entries are upper-cased. Lines that are not made of
/// `[A-Z0-9-]` are skipped.
pub fn parse_catalog(text: &str, last_updated: impl Into<String>) -> TldCatalog {
    let mut lines = text.split('\n');
    lines.next();

    let mut tlds = Vec::new();
    for line in lines {
        let entry = line.strip_suffix('\r').unwrap_or(line).to_uppercase();
        if entry.is_empty() {
            continue;
        }
        if !TLD_ENTRY.is_match(&entry) {
            tracing::warn!(entry = %entry, "Skipping malformed TLD catalog entry");
            continue;
        }
        tlds.push(entry);
    }

    TldCatalog::new(tlds, last_updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_dropped() {
        let catalog = parse_catalog("# header\nCOM\nNET\n", "");
        assert_eq!(catalog.tlds(), &["COM".to_string(), "NET".to_string()]);
    }

    #[test]
    fn test_first_line_dropped_even_if_it_looks_like_a_tld() {
        let catalog = parse_catalog("ORG\nCOM\n", "");
        assert_eq!(catalog.tlds(), &["COM".to_string()]);
    }

    #[test]
    fn test_blank_and_crlf_lines() {
        let catalog = parse_catalog("# Version 2024\r\nCOM\r\n\r\n\nio\r\n", "Tue, 01 Oct 2024 07:07:01 GMT");
        assert_eq!(catalog.tlds(), &["COM".to_string(), "IO".to_string()]);
        assert_eq!(catalog.last_updated(), "Tue, 01 Oct 2024 07:07:01 GMT");
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let catalog = parse_catalog("# header\nCOM\nNOT A TLD\nXN--P1AI\n", "");
        assert_eq!(catalog.tlds(), &["COM".to_string(), "XN--P1AI".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_catalog("", "").is_empty());
        assert!(parse_catalog("# only header", "").is_empty());
    }

    #[test]
    fn test_new_drops_empty_entries() {
        let catalog = TldCatalog::new(vec![String::new(), "COM".to_string(), String::new()], "");
        assert_eq!(catalog.tlds(), &["COM".to_string()]);
        assert!(crate::matcher::match_input("google", &catalog).is_empty());
    }
}
