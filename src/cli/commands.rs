//! Command table and handlers
//!
//! `greet` and `hello` are single commands that run directly; `mail` and
//! `config` are groups that need a subcommand.

use clap_complete::{generate, Shell};

use crate::application::ApplicationError;
use crate::cli::adapter::Context;
use crate::cli::dispatcher::Inputs;
use crate::cli::error::{CliError, CliResult, RegistryError};
use crate::cli::registry::{CommandRegistry, CommandSpec, OptionSpec};
use crate::cli::validators::{self, Value};
use crate::config::{global_config_path, Settings};
use crate::domain::{DomainError, Language};
use crate::infrastructure::ServiceContainer;

pub const APP_NAME: &str = "my-cli";

const ABOUT: &str =
    "A CLI application demonstrating single commands, subcommand groups and validated options.";

const SHELLS: &[&str] = &["bash", "elvish", "fish", "powershell", "zsh"];

/// Build the full command table for the application.
///
/// Option defaults for `--greeting` and `--language` come from the settings.
pub fn build_registry(services: &ServiceContainer) -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new(APP_NAME, env!("CARGO_PKG_VERSION"), ABOUT);
    registry
        .register(greet_command(services))?
        .register(hello_command(services))?
        .register(mail_command(services))?
        .register(config_command())?
        .register(completion_command())?;
    Ok(registry)
}

fn debug_option(services: &ServiceContainer) -> OptionSpec {
    OptionSpec::flag("debug", "Print debug messages")
        .eager()
        .validator(validators::debug_flag(services.log.clone()))
}

fn greet_command(services: &ServiceContainer) -> CommandSpec {
    CommandSpec::new("greet", "Greet a list of people", greet)
        .option(
            OptionSpec::list("names", "Comma-separated list of names")
                .short('n')
                .required()
                .validator(validators::comma_list()),
        )
        .option(
            OptionSpec::value("greeting", "Greeting")
                .short('g')
                .default(Value::Str(services.settings.greeting.clone())),
        )
        .option(debug_option(services))
}

fn hello_command(services: &ServiceContainer) -> CommandSpec {
    CommandSpec::new("hello", "Greet someone in various languages", hello)
        .option(
            OptionSpec::value("name", "Name to greet")
                .short('n')
                .required(),
        )
        .option(
            OptionSpec::value("language", "Language for greeting")
                .short('l')
                .default(Value::Str(services.settings.language.as_str().to_string()))
                .validator(validators::choice(Language::NAMES)),
        )
        .option(debug_option(services))
}

fn mail_command(services: &ServiceContainer) -> CommandSpec {
    CommandSpec::group("mail", "Manage and interact with email messages")
        .subcommand(CommandSpec::new("fetch", "Fetch mail", mail_fetch).option(debug_option(services)))
        .subcommand(
            CommandSpec::new("delete", "Delete mail", mail_delete)
                .option(
                    OptionSpec::value("count", "Number of messages to delete")
                        .short('c')
                        .default(Value::Int(1))
                        .validator(validators::integer()),
                )
                .option(debug_option(services)),
        )
        .subcommand(CommandSpec::new("error", "Show example error", mail_error))
}

fn config_command() -> CommandSpec {
    CommandSpec::group("config", "Manage settings")
        .subcommand(CommandSpec::new("show", "Show effective settings", config_show))
        .subcommand(CommandSpec::new("path", "Show config file path", config_path))
        .subcommand(CommandSpec::new("init", "Print a config file template", config_init))
}

fn completion_command() -> CommandSpec {
    CommandSpec::new("completion", "Generate shell completions", completion).option(
        OptionSpec::value("shell", "Shell type")
            .short('s')
            .required()
            .validator(validators::choice(SHELLS)),
    )
}

fn greet(inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let names = inputs.list("names")?;
    let greeting = inputs.string("greeting")?;
    ctx.services.greeting_service(greeting).greet(names, ctx.out)?;
    Ok(())
}

fn hello(inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let language: Language = inputs.string("language")?.parse()?;
    let name = inputs.string("name")?;
    ctx.services.hello_service(language).hello(name, ctx.out)?;
    Ok(())
}

fn mail_fetch(_inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let mail = ctx.services.mail_service().fetch()?;
    writeln!(ctx.out, "{} new messages!\n", mail.len())?;
    for m in &mail {
        writeln!(ctx.out, "{}", m)?;
    }
    Ok(())
}

fn mail_delete(inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let count = inputs.int("count")?;
    let removed = ctx.services.mail_service().delete(count)?;
    writeln!(ctx.out, "Deleted {} messages", removed)?;
    Ok(())
}

fn mail_error(_inputs: &Inputs, _ctx: &mut Context<'_>) -> CliResult<()> {
    Err(DomainError::ExampleFailure.into())
}

fn config_show(_inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let toml = ctx.services.settings.to_toml()?;
    write!(ctx.out, "{}", toml)?;
    Ok(())
}

fn config_path(_inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "cannot determine config directory".to_string(),
    })?;
    writeln!(ctx.out, "{}", path.display())?;
    Ok(())
}

fn config_init(_inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    write!(ctx.out, "{}", Settings::template())?;
    Ok(())
}

fn completion(inputs: &Inputs, ctx: &mut Context<'_>) -> CliResult<()> {
    let shell: Shell = inputs.string("shell")?.parse().map_err(CliError::Usage)?;
    let mut cmd = ctx.registry.to_command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, ctx.out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::InMemoryMailStore;
    use crate::util::testing::RecordingLogControl;

    fn services() -> ServiceContainer {
        ServiceContainer::with_deps(
            Settings::default(),
            Arc::new(InMemoryMailStore::with_sample_data()),
            Arc::new(RecordingLogControl::default()),
        )
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        let registry = build_registry(&services()).unwrap();
        registry.to_command().debug_assert();
    }

    #[test]
    fn given_settings_when_building_registry_then_defaults_follow_settings() {
        let mut settings = Settings::default();
        settings.greeting = "Howdy".into();
        settings.language = Language::Spanish;
        let services = ServiceContainer::with_deps(
            settings,
            Arc::new(InMemoryMailStore::default()),
            Arc::new(RecordingLogControl::default()),
        );

        let registry = build_registry(&services).unwrap();

        let greeting = registry
            .find(&["greet"])
            .and_then(|c| c.find_option("greeting"))
            .and_then(|o| o.default.clone());
        let language = registry
            .find(&["hello"])
            .and_then(|c| c.find_option("language"))
            .and_then(|o| o.default.clone());
        assert_eq!(greeting, Some(Value::Str("Howdy".into())));
        assert_eq!(language, Some(Value::Str("spanish".into())));
    }

    #[test]
    fn given_registry_when_inspecting_then_mail_is_a_group_and_hello_is_direct() {
        let registry = build_registry(&services()).unwrap();

        let mail = registry.find(&["mail"]).unwrap();
        let hello = registry.find(&["hello"]).unwrap();

        assert!(mail.requires_subcommand);
        assert!(mail.handler.is_none());
        assert!(!hello.requires_subcommand);
        assert!(hello.handler.is_some());
    }
}
