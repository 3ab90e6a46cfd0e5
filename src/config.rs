//! Runtime settings from `TLDIFY_*` environment variables (and `.env`)

use crate::config_error;
use crate::error::Result;
use crate::registrar::DEFAULT_REGISTRAR;
use crate::types::{CatalogConfig, CheckConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_TLD_URL: &str = "TLDIFY_TLD_URL";
pub const ENV_CATALOG_FILE: &str = "TLDIFY_CATALOG_FILE";
pub const ENV_TIMEOUT_SECS: &str = "TLDIFY_TIMEOUT_SECS";
pub const ENV_RETRIES: &str = "TLDIFY_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "TLDIFY_RETRY_DELAY_MS";
pub const ENV_REGISTRAR: &str = "TLDIFY_REGISTRAR";
pub const ENV_CHECK: &str = "TLDIFY_CHECK";
pub const ENV_LOOKUP_TIMEOUT_SECS: &str = "TLDIFY_LOOKUP_TIMEOUT_SECS";
pub const ENV_CONCURRENCY: &str = "TLDIFY_CONCURRENCY";

/// All runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub check: CheckConfig,
    /// Registrar host used for deep links
    pub registrar: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            check: CheckConfig::default(),
            registrar: DEFAULT_REGISTRAR.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(url) = get(ENV_TLD_URL) {
            settings.catalog.url = url;
        }
        settings.catalog.file = get(ENV_CATALOG_FILE).map(PathBuf::from);
        if let Some(secs) = parse_var::<u64>(ENV_TIMEOUT_SECS, get(ENV_TIMEOUT_SECS))? {
            settings.catalog.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(retries) = parse_var::<usize>(ENV_RETRIES, get(ENV_RETRIES))? {
            settings.catalog.retry_attempts = retries;
        }
        if let Some(ms) = parse_var::<u64>(ENV_RETRY_DELAY_MS, get(ENV_RETRY_DELAY_MS))? {
            settings.catalog.retry_delay = Duration::from_millis(ms);
        }

        if let Some(registrar) = get(ENV_REGISTRAR) {
            settings.registrar = registrar;
        }

        if let Some(check) = get(ENV_CHECK) {
            settings.check.enabled = parse_bool(ENV_CHECK, &check)?;
        }
        if let Some(secs) = parse_var::<u64>(ENV_LOOKUP_TIMEOUT_SECS, get(ENV_LOOKUP_TIMEOUT_SECS))? {
            settings.check.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(n) = parse_var::<usize>(ENV_CONCURRENCY, get(ENV_CONCURRENCY))? {
            if n == 0 {
                return Err(config_error!("{} must be at least 1", ENV_CONCURRENCY));
            }
            settings.check.concurrent_checks = n;
        }

        Ok(settings)
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Result<Option<T>> {
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| config_error!("Invalid value for {}: '{}'", key, v))
        })
        .transpose()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(config_error!("Invalid value for {}: '{}'", key, value)),
    }
}
