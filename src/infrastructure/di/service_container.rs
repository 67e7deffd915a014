//! Service container for dependency injection
//!
//! Wires up collaborators shared by all command handlers.

use std::sync::Arc;

use crate::application::services::{GreetingService, HelloService, MailService};
use crate::config::Settings;
use crate::domain::Language;
use crate::infrastructure::mail_store::InMemoryMailStore;
use crate::infrastructure::traits::{LogControl, MailStore};

/// Container holding the collaborators handlers run against.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Mailbox backing the `mail` commands
    pub mail_store: Arc<dyn MailStore>,

    /// Process-wide log verbosity
    pub log: Arc<dyn LogControl>,
}

impl ServiceContainer {
    /// Create a container with the sample mailbox.
    pub fn new(settings: Settings, log: Arc<dyn LogControl>) -> Self {
        Self::with_deps(
            settings,
            Arc::new(InMemoryMailStore::with_sample_data()),
            log,
        )
    }

    /// Create a container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        mail_store: Arc<dyn MailStore>,
        log: Arc<dyn LogControl>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            mail_store,
            log,
        }
    }

    pub fn greeting_service(&self, greeting: &str) -> GreetingService {
        GreetingService::new(greeting)
    }

    pub fn hello_service(&self, language: Language) -> HelloService {
        HelloService::new(language)
    }

    pub fn mail_service(&self) -> MailService {
        MailService::new(self.mail_store.clone())
    }
}
