//! Name-resolution existence checker

use super::ExistenceCheck;
use crate::error::{Result, TldifyError};
use crate::matcher::MAX_INPUT_LEN;
use crate::types::{AvailabilityStatus, CheckConfig, DomainAvailability};
use async_trait::async_trait;
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::lookup_host;
use tokio::sync::Semaphore;
use tokio::time::timeout;

static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-]+$").expect("LABEL_PATTERN: hardcoded regex is invalid")
});

/// Host name resolution backend
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Number of addresses `fqdn` resolves to
    async fn resolve(&self, fqdn: &str) -> io::Result<usize>;
}

/// The operating system's resolver, via `getaddrinfo`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl NameResolver for SystemResolver {
    async fn resolve(&self, fqdn: &str) -> io::Result<usize> {
        Ok(lookup_host((fqdn, 0)).await?.count())
    }
}

/// Resolver failures that say nothing about the name itself
fn is_transient(err: &io::Error) -> bool {
    if matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    ) {
        return true;
    }
    let message = err.to_string().to_lowercase();
    message.contains("temporary failure") || message.contains("try again")
}

/// Resolves each FQDN and treats a resolvable name as taken
pub struct DnsExistenceChecker {
    config: CheckConfig,
    semaphore: Semaphore,
    resolver: Arc<dyn NameResolver>,
}

impl DnsExistenceChecker {
    /// Create a new checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a new checker with custom configuration
    pub fn with_config(config: CheckConfig) -> Self {
        Self::with_resolver(config, Arc::new(SystemResolver))
    }

    /// Create a checker backed by a specific resolver
    pub fn with_resolver(config: CheckConfig, resolver: Arc<dyn NameResolver>) -> Self {
        let semaphore = Semaphore::new(config.concurrent_checks.max(1));
        Self {
            config,
            semaphore,
            resolver,
        }
    }

    /// Same constraints as user input, applied per label, 63 characters overall
    fn validate_fqdn(fqdn: &str) -> Result<()> {
        if fqdn.is_empty() || fqdn.len() > MAX_INPUT_LEN {
            return Err(TldifyError::validation(format!(
                "Domain must be 1-{} characters",
                MAX_INPUT_LEN
            )));
        }

        if fqdn.split('.').any(|label| !LABEL_PATTERN.is_match(label)) {
            return Err(TldifyError::validation("Domain contains invalid characters"));
        }

        Ok(())
    }

    async fn resolve(&self, fqdn: &str) -> Result<AvailabilityStatus> {
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            TldifyError::internal(format!("Failed to acquire semaphore: {}", e))
        })?;

        let secs = self.config.timeout.as_secs();
        let lookup = timeout(self.config.timeout, self.resolver.resolve(fqdn))
            .await
            .map_err(|_| TldifyError::timeout(format!("DNS lookup for {}", fqdn), secs))?;

        match lookup {
            Ok(0) => Ok(AvailabilityStatus::Available),
            Ok(_) => Ok(AvailabilityStatus::Taken),
            Err(e) if is_transient(&e) => Err(TldifyError::network(
                format!("DNS lookup for {} failed: {}", fqdn, e),
                None,
                None,
            )),
            Err(e) => {
                tracing::trace!(domain = %fqdn, error = %e, "Name did not resolve");
                Ok(AvailabilityStatus::Available)
            }
        }
    }
}

impl Default for DnsExistenceChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExistenceCheck for DnsExistenceChecker {
    async fn check(&self, fqdn: &str) -> DomainAvailability {
        let start = Instant::now();

        if let Err(e) = Self::validate_fqdn(fqdn) {
            tracing::debug!(domain = %fqdn, error = %e, "Skipping lookup for invalid domain");
            return DomainAvailability::new(fqdn, AvailabilityStatus::Error).with_error(e.to_string());
        }

        let result = match self.resolve(fqdn).await {
            Ok(status) => DomainAvailability::new(fqdn, status),
            Err(e) => {
                tracing::warn!(domain = %fqdn, error = %e, "Existence check inconclusive");
                DomainAvailability::new(fqdn, AvailabilityStatus::Unknown).with_error(e.to_string())
            }
        };
        let duration = start.elapsed();

        tracing::debug!(
            domain = %fqdn,
            method = "dns",
            status = %result.status,
            duration_ms = %duration.as_millis(),
            "Existence check completed"
        );

        result.with_duration(duration)
    }

    async fn check_all(&self, fqdns: &[String]) -> Vec<DomainAvailability> {
        let batch_start = Instant::now();
        let results = join_all(fqdns.iter().map(|fqdn| self.check(fqdn))).await;

        let taken = results.iter().filter(|r| r.status == AvailabilityStatus::Taken).count();
        let unresolved = results
            .iter()
            .filter(|r| matches!(r.status, AvailabilityStatus::Unknown | AvailabilityStatus::Error))
            .count();

        tracing::info!(
            domains_requested = %fqdns.len(),
            taken = %taken,
            unresolved = %unresolved,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch existence check completed"
        );

        results
    }
}
