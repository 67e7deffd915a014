//! CLI layer: option validation, command registry, dispatch and exit codes

pub mod adapter;
pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod output;
pub mod registry;
pub mod validators;

pub use adapter::{execute, Context};
pub use commands::build_registry;
pub use dispatcher::{Dispatcher, Inputs, ParsedInvocation, Resolution};
pub use error::{CliError, CliResult, ControlExit, RegistryError, ValidationError};
pub use registry::{CommandRegistry, CommandSpec, OptionKind, OptionSpec};
