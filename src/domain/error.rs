//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of CLI and I/O concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("This is an example error message")]
    ExampleFailure,

    #[error("unknown language: {value}")]
    UnknownLanguage { value: String },

    #[error("cannot delete a negative number of messages: {0}")]
    NegativeCount(i64),
}
