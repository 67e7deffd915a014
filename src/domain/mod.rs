//! Domain layer: entities and business rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod mail_data;

pub use entities::{Language, Mail};
pub use error::DomainError;
pub use mail_data::sample_mail;
