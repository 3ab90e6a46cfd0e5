//! Suffix matcher: turns a partial hostname into candidate FQDNs
//!
//! Every call recomputes the full candidate list from `(input, catalog)`.
//! Nothing is cached between calls.

pub mod input;

pub use input::{validate_input, InputValidator, MAX_INPUT_LEN};

use crate::catalog::TldCatalog;
use crate::types::CandidateDomain;

/// Produce one candidate per catalog TLD that is a case-insensitive suffix of `input`.
///
/// Candidates keep catalog order. A TLD that is itself a suffix of another
/// matching TLD (`CO` and `COM`) yields its own candidate.
pub fn match_input(input: &str, catalog: &TldCatalog) -> Vec<CandidateDomain> {
    if input.is_empty() {
        return Vec::new();
    }

    let upper = input.to_uppercase();

    catalog
        .iter()
        .filter(|tld| upper.ends_with(tld))
        .map(|tld| CandidateDomain::new(candidate_fqdn(input, &upper, tld), tld))
        .collect()
}

/// Place the dot in front of the matched TLD.
///
/// Only the trailing occurrence of the lowercase TLD is replaced. When the
/// input does not literally end with the lowercase TLD (mixed-case input),
/// it is returned as is.
fn candidate_fqdn(input: &str, upper: &str, tld: &str) -> String {
    let lower = tld.to_lowercase();

    if upper == tld {
        return format!("{}.{}", input, lower);
    }

    match input.strip_suffix(lower.as_str()) {
        Some(label) => format!("{}.{}", label, lower),
        None => input.to_string(),
    }
}
