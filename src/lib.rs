//! tldify - find the top-level domains that complete a hostname
//!
//! Type `googlecom` and get `google.com`; type `google` and get `g.oogle`.
//! The TLD list is loaded once per session and every keystroke recomputes
//! the candidate list from scratch.

pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;
pub mod matcher;
pub mod prompt;
pub mod registrar;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use catalog::{parse_catalog, CatalogLoader, TldCatalog};
pub use config::Settings;
pub use error::{Result, TldifyError};
pub use lookup::{DnsExistenceChecker, ExistenceCheck};
pub use matcher::{match_input, validate_input};
pub use registrar::registrar_link;
pub use session::{Session, SharedSession};
pub use types::{AvailabilityStatus, CandidateDomain, CatalogConfig, CheckConfig, DomainAvailability};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
