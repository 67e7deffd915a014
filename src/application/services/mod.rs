//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on collaborator traits (MailStore) and write their
//! user-facing output to a caller-supplied writer.

mod greeting;
mod hello;
mod mail;

pub use greeting::GreetingService;
pub use hello::HelloService;
pub use mail::MailService;
