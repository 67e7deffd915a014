//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// A raw option value rejected before any handler runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for '--{option}': {reason}")]
pub struct ValidationError {
    pub option: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Mandatory option absent after defaults and validators ran.
    pub fn missing(option: impl Into<String>) -> Self {
        Self::new(option, "missing required option")
    }
}

/// Inconsistent command table, detected while registering commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate command '{0}'")]
    DuplicateCommand(String),

    #[error("duplicate option '--{option}' in command '{command}'")]
    DuplicateOption { command: String, option: String },

    #[error("duplicate short flag '-{short}' in command '{command}'")]
    DuplicateShort { command: String, short: char },

    #[error("command group '{0}' has no subcommands")]
    EmptyGroup(String),

    #[error("command '{0}' has no handler")]
    MissingHandler(String),
}

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    MissingSubcommand(String),

    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error when it aborts dispatch.
    ///
    /// Handler failures do not go through here; the adapter maps all of
    /// them to `FAILURE`.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) | CliError::Usage(_) | CliError::MissingSubcommand(_) => {
                crate::exitcode::USAGE
            }
            CliError::Registry(_) => crate::exitcode::SOFTWARE,
            CliError::Application(ApplicationError::Config { .. }) => crate::exitcode::CONFIG,
            CliError::Application(_) | CliError::Io(_) => crate::exitcode::FAILURE,
        }
    }
}

/// Early termination that is not a failure: help or version was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlExit {
    Help(String),
    Version(String),
}

impl ControlExit {
    pub fn text(&self) -> &str {
        match self {
            ControlExit::Help(text) | ControlExit::Version(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_validation_error_when_displayed_then_names_option() {
        let err = ValidationError::new("language", "'french' is not one of english, spanish");
        assert_eq!(
            err.to_string(),
            "invalid value for '--language': 'french' is not one of english, spanish"
        );
    }

    #[test]
    fn given_dispatch_errors_when_mapping_exit_codes_then_usage_errors_are_two() {
        assert_eq!(
            CliError::from(ValidationError::missing("name")).exit_code(),
            exitcode::USAGE
        );
        assert_eq!(CliError::Usage("bad".into()).exit_code(), exitcode::USAGE);
        assert_eq!(
            CliError::MissingSubcommand("help".into()).exit_code(),
            exitcode::USAGE
        );
    }

    #[test]
    fn given_domain_error_when_mapping_exit_code_then_is_failure() {
        let err = CliError::from(DomainError::ExampleFailure);
        assert_eq!(err.exit_code(), exitcode::FAILURE);
    }

    #[test]
    fn given_registry_error_when_mapping_exit_code_then_is_software() {
        let err = CliError::from(RegistryError::EmptyGroup("mail".into()));
        assert_eq!(err.exit_code(), exitcode::SOFTWARE);
    }
}
