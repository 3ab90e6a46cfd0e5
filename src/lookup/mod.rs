//! Existence checking for candidate domains
//!
//! A resolvable name is treated as taken. This is a heuristic, not a
//! registration check.

pub mod resolver;

pub use resolver::{DnsExistenceChecker, NameResolver, SystemResolver};

use crate::types::DomainAvailability;
use async_trait::async_trait;
use futures::future::join_all;

/// Trait for existence-check collaborators
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    /// Check one FQDN. Failures are reported in the result, never as an error.
    async fn check(&self, fqdn: &str) -> DomainAvailability;

    /// Check a batch; results keep the order of `fqdns`
    async fn check_all(&self, fqdns: &[String]) -> Vec<DomainAvailability> {
        join_all(fqdns.iter().map(|fqdn| self.check(fqdn))).await
    }
}
