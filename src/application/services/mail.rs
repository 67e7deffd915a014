//! Mail service
//!
//! Fetches and deletes messages from an injected mail store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ApplicationResult;
use crate::domain::{DomainError, Mail};
use crate::infrastructure::traits::MailStore;

/// Service for mail operations (fetch, delete).
pub struct MailService {
    store: Arc<dyn MailStore>,
}

impl MailService {
    pub fn new(store: Arc<dyn MailStore>) -> Self {
        Self { store }
    }

    /// Fetch all messages, oldest first.
    pub fn fetch(&self) -> ApplicationResult<Vec<Mail>> {
        debug!("Fetching mail");
        Ok(self.store.fetch())
    }

    /// Delete up to `count` messages from the front of the mailbox.
    ///
    /// Returns the number of messages actually removed.
    pub fn delete(&self, count: i64) -> ApplicationResult<usize> {
        debug!("Deleting messages");
        let count = usize::try_from(count).map_err(|_| DomainError::NegativeCount(count))?;
        let removed = self.store.delete(count);
        info!("Done! {} remaining messages", self.store.len());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::sample_mail;
    use crate::infrastructure::InMemoryMailStore;

    fn service_with_sample() -> (MailService, Arc<InMemoryMailStore>) {
        let store = Arc::new(InMemoryMailStore::new(sample_mail()));
        (MailService::new(store.clone()), store)
    }

    #[test]
    fn given_sample_mailbox_when_fetching_then_returns_all_messages() {
        let (service, _) = service_with_sample();

        let mail = service.fetch().unwrap();

        assert_eq!(mail.len(), 10);
        assert_eq!(mail[0].sender, "alice@example.com");
    }

    #[test]
    fn given_sample_mailbox_when_deleting_then_removes_from_front() {
        let (service, store) = service_with_sample();
        let original = sample_mail();

        let removed = service.delete(5).unwrap();

        assert_eq!(removed, 5);
        assert_eq!(store.fetch(), original[5..].to_vec());
    }

    #[test]
    fn given_count_larger_than_mailbox_when_deleting_then_removes_everything() {
        let (service, store) = service_with_sample();

        let removed = service.delete(42).unwrap();

        assert_eq!(removed, 10);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn given_negative_count_when_deleting_then_errors_without_mutating() {
        let (service, store) = service_with_sample();

        let result = service.delete(-1);

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::NegativeCount(-1)))
        ));
        assert_eq!(store.len(), 10);
    }
}
