//! In-memory mail store

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{sample_mail, Mail};
use crate::infrastructure::traits::MailStore;

/// Mailbox held in process memory. Each instance owns its own messages.
#[derive(Debug, Default)]
pub struct InMemoryMailStore {
    messages: Mutex<Vec<Mail>>,
}

impl InMemoryMailStore {
    pub fn new(messages: Vec<Mail>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }

    /// Store pre-filled with the built-in sample messages.
    pub fn with_sample_data() -> Self {
        Self::new(sample_mail())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Mail>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MailStore for InMemoryMailStore {
    fn fetch(&self) -> Vec<Mail> {
        self.lock().clone()
    }

    fn delete(&self, count: usize) -> usize {
        let mut messages = self.lock();
        let removed = count.min(messages.len());
        messages.drain(..removed);
        removed
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_store_when_fetching_twice_then_returns_identical_sequence() {
        let store = InMemoryMailStore::with_sample_data();

        let first = store.fetch();
        let second = store.fetch();

        assert_eq!(first, second);
    }

    #[test]
    fn given_empty_store_when_deleting_then_removes_nothing() {
        let store = InMemoryMailStore::default();

        assert_eq!(store.delete(3), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn given_store_when_deleting_zero_then_keeps_everything() {
        let store = InMemoryMailStore::with_sample_data();

        assert_eq!(store.delete(0), 0);
        assert_eq!(store.len(), 10);
    }
}
