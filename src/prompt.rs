//! Terminal front end: live TLD suggestions while typing

use crate::config::Settings;
use crate::error::Result;
use crate::lookup::ExistenceCheck;
use crate::registrar::registrar_link;
use crate::session::SharedSession;
use crate::types::{AvailabilityStatus, CandidateDomain};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, InquireError, Text};
use std::sync::Arc;
use std::time::Duration;

/// Feeds every keystroke into the session and returns the fresh candidates
#[derive(Clone)]
pub struct TldAutocomplete {
    session: SharedSession,
}

impl TldAutocomplete {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

impl Autocomplete for TldAutocomplete {
    fn get_suggestions(&mut self, input: &str) -> std::result::Result<Vec<String>, CustomUserError> {
        let mut session = self.session.write();
        // Rejected input keeps the previous suggestions
        session.set_input(input);
        Ok(session.candidates().iter().map(|c| c.fqdn.clone()).collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> std::result::Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Spinner on stderr for slow steps
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Render candidates one per line with their registrar links
pub fn render_candidates(candidates: &[CandidateDomain], registrar: &str) -> String {
    if candidates.is_empty() {
        return "no matching tld\n".to_string();
    }

    let mut out = String::new();
    for candidate in candidates {
        let link = registrar_link(registrar, &candidate.fqdn).unwrap_or_default();
        let status = if candidate.pending {
            String::new()
        } else {
            match candidate.status {
                AvailabilityStatus::Available => "✅ available".to_string(),
                AvailabilityStatus::Taken => "❌ taken".to_string(),
                AvailabilityStatus::Unknown | AvailabilityStatus::Error => "⚠️  unknown".to_string(),
            }
        };
        out.push_str(&format!("{:<28} {:<14} {}\n", candidate.fqdn, status, link));
    }
    out
}

/// Footer line showing the catalog's age
pub fn catalog_footer(last_updated: &str) -> String {
    if last_updated.is_empty() {
        "TLD's updated at unknown".to_string()
    } else {
        format!("TLD's updated at {}", last_updated)
    }
}

/// Run existence checks for the current candidates and apply them to the session.
///
/// When `only` is given, just that candidate is checked, and nothing at all
/// if it is not among the current candidates.
pub async fn check_candidates(
    session: &SharedSession,
    checker: &dyn ExistenceCheck,
    only: Option<&str>,
) -> bool {
    let mut request = session.read().pending_check();
    if let Some(fqdn) = only {
        if !request.domains.iter().any(|d| d == fqdn) {
            tracing::debug!(domain = %fqdn, "Selected name is not a current candidate");
            return false;
        }
        request.domains = vec![fqdn.to_string()];
    }
    if request.domains.is_empty() {
        return false;
    }

    let results = checker.check_all(&request.domains).await;
    session.write().apply_availability(request.version, &results)
}

/// Interactive hostname prompt loop
pub struct InteractivePrompt {
    session: SharedSession,
    settings: Settings,
    checker: Option<Arc<dyn ExistenceCheck>>,
}

impl InteractivePrompt {
    pub fn new(session: SharedSession, settings: Settings) -> Self {
        Self {
            session,
            settings,
            checker: None,
        }
    }

    pub fn with_checker(mut self, checker: Arc<dyn ExistenceCheck>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Prompt until the user cancels with Esc or Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let help = format!(
            "Type a hostname, ↑↓ to browse, Tab to complete, Esc to quit · {}",
            catalog_footer(self.session.read().catalog().last_updated())
        );

        loop {
            let answer = Text::new("Hostname:")
                .with_placeholder("google")
                .with_autocomplete(TldAutocomplete::new(Arc::clone(&self.session)))
                .with_help_message(&help)
                .with_page_size(10)
                .prompt();

            match answer {
                Ok(value) => self.report(value.trim()).await,
                Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                    tracing::debug!("Prompt closed by user");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn report(&self, value: &str) {
        let selected = value.contains('.').then_some(value);
        if selected.is_none() {
            self.session.write().set_input(value);
        }

        if let Some(checker) = &self.checker {
            let pb = spinner("Checking names...");
            check_candidates(&self.session, checker.as_ref(), selected).await;
            pb.finish_and_clear();
        }

        let candidates: Vec<CandidateDomain> = {
            let session = self.session.read();
            session
                .candidates()
                .iter()
                .filter(|c| selected.map_or(true, |fqdn| c.fqdn == fqdn))
                .cloned()
                .collect()
        };

        println!();
        print!("{}", render_candidates(&candidates, &self.settings.registrar));
        println!();
    }
}
