//! Infrastructure layer: collaborator implementations and DI container
//!
//! This layer implements the collaborator traits and wires up services.

pub mod di;
pub mod logging;
pub mod mail_store;
pub mod traits;

pub use di::ServiceContainer;
pub use logging::TracingLogControl;
pub use mail_store::InMemoryMailStore;
