//! Collaborator boundary traits for testability
//!
//! These traits abstract the state the CLI core touches but does not own,
//! allowing handlers to be tested with fresh or recording implementations.

use crate::domain::Mail;

/// Ordered mailbox backing the `mail` commands.
pub trait MailStore: Send + Sync {
    /// Snapshot of all messages, oldest first.
    fn fetch(&self) -> Vec<Mail>;

    /// Remove up to `count` messages from the front, returning how many were removed.
    fn delete(&self, count: usize) -> usize;

    /// Number of messages currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle on the process-wide log verbosity.
pub trait LogControl: Send + Sync {
    /// Raise verbosity to the most detailed level.
    fn enable_debug(&self);

    /// Whether debug output is currently enabled.
    fn is_debug(&self) -> bool;
}
