//! Command registry
//!
//! Declarative description of every command: names, options, defaults,
//! validators and the handler to run. The table is plain data assembled at
//! startup and compiled into a `clap::Command` tree for tokenising.

use std::collections::HashSet;
use std::fmt;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cli::adapter::Context;
use crate::cli::dispatcher::Inputs;
use crate::cli::error::{CliResult, RegistryError, ValidationError};
use crate::cli::validators::{passthrough, RawValue, Validator, Value};

/// Domain handler bound to a runnable command.
pub type Handler = fn(&Inputs, &mut Context<'_>) -> CliResult<()>;

/// How an option consumes command-line tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean switch, no value
    Flag,
    /// Exactly one value; the last occurrence wins
    Value,
    /// One value per occurrence, may repeat
    List,
}

/// One command-line option.
#[derive(Clone)]
pub struct OptionSpec {
    pub long: &'static str,
    pub short: Option<char>,
    pub help: &'static str,
    pub kind: OptionKind,
    pub default: Option<Value>,
    pub validator: Option<Validator>,
    pub required: bool,
    /// Eager options are validated before all others.
    pub eager: bool,
}

impl OptionSpec {
    fn new(long: &'static str, help: &'static str, kind: OptionKind) -> Self {
        Self {
            long,
            short: None,
            help,
            kind,
            default: None,
            validator: None,
            required: false,
            eager: false,
        }
    }

    pub fn flag(long: &'static str, help: &'static str) -> Self {
        Self::new(long, help, OptionKind::Flag)
    }

    pub fn value(long: &'static str, help: &'static str) -> Self {
        Self::new(long, help, OptionKind::Value)
    }

    pub fn list(long: &'static str, help: &'static str) -> Self {
        Self::new(long, help, OptionKind::List)
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    /// Turn the raw tokens for this option into its final value.
    ///
    /// Absent options take their default without running the validator.
    /// An option left without a value is missing.
    pub fn resolve(&self, raw: RawValue) -> Result<Value, ValidationError> {
        if raw == RawValue::Absent {
            if let Some(default) = &self.default {
                return Ok(default.clone());
            }
        }
        let value = match &self.validator {
            Some(validator) => validator(self.long, raw)?,
            None => passthrough(raw),
        };
        value.ok_or_else(|| ValidationError::missing(self.long))
    }

    fn to_arg(&self) -> Arg {
        let help = match &self.default {
            Some(default) => format!("{} [default: {}]", self.help, default),
            None => self.help.to_string(),
        };
        let mut arg = Arg::new(self.long).long(self.long).help(help);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        arg = match self.kind {
            OptionKind::Flag => arg.action(ArgAction::SetTrue),
            OptionKind::Value => arg
                .action(ArgAction::Set)
                .num_args(1)
                .value_parser(value_parser!(String)),
            OptionKind::List => arg
                .action(ArgAction::Append)
                .num_args(1)
                .value_parser(value_parser!(String)),
        };
        arg.required(self.required)
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("long", &self.long)
            .field("short", &self.short)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("has_validator", &self.validator.is_some())
            .field("required", &self.required)
            .field("eager", &self.eager)
            .finish()
    }
}

/// A command, either runnable (has a handler) or a group of subcommands.
#[derive(Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub requires_subcommand: bool,
    pub options: Vec<OptionSpec>,
    pub subcommands: Vec<CommandSpec>,
    pub handler: Option<Handler>,
}

impl CommandSpec {
    /// Runnable command: runs `handler` directly, defaults apply when no options are given.
    pub fn new(name: &'static str, about: &'static str, handler: Handler) -> Self {
        Self {
            name,
            about,
            requires_subcommand: false,
            options: Vec::new(),
            subcommands: Vec::new(),
            handler: Some(handler),
        }
    }

    /// Group command: invoking it without a subcommand shows help.
    pub fn group(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            requires_subcommand: true,
            options: Vec::new(),
            subcommands: Vec::new(),
            handler: None,
        }
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn subcommand(mut self, command: CommandSpec) -> Self {
        self.subcommands.push(command);
        self
    }

    pub fn find_option(&self, long: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.long == long)
    }

    /// Consistency check for this command and everything below it.
    ///
    /// `inherited` holds the options of every enclosing group. Option values
    /// are keyed by long name along the whole command path, so a subcommand
    /// may not reuse a long or short name one of its ancestors declares.
    fn check(&self, qualified: &str, inherited: &[&OptionSpec]) -> Result<(), RegistryError> {
        let mut longs: HashSet<&str> = inherited.iter().map(|o| o.long).collect();
        longs.insert("help");
        let mut shorts: HashSet<char> = inherited.iter().filter_map(|o| o.short).collect();
        shorts.insert('h');
        for option in &self.options {
            if !longs.insert(option.long) {
                return Err(RegistryError::DuplicateOption {
                    command: qualified.to_string(),
                    option: option.long.to_string(),
                });
            }
            if let Some(short) = option.short {
                if !shorts.insert(short) {
                    return Err(RegistryError::DuplicateShort {
                        command: qualified.to_string(),
                        short,
                    });
                }
            }
        }

        if self.requires_subcommand {
            if self.subcommands.is_empty() {
                return Err(RegistryError::EmptyGroup(qualified.to_string()));
            }
        } else if self.handler.is_none() {
            return Err(RegistryError::MissingHandler(qualified.to_string()));
        }

        check_unique_names(&self.subcommands, Some(qualified))?;
        let scope: Vec<&OptionSpec> = inherited.iter().copied().chain(&self.options).collect();
        for sub in &self.subcommands {
            sub.check(&format!("{} {}", qualified, sub.name), &scope)?;
        }
        Ok(())
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.name)
            .about(self.about)
            .args(self.options.iter().map(OptionSpec::to_arg));
        if self.requires_subcommand {
            cmd = cmd
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommands(self.subcommands.iter().map(CommandSpec::to_command));
        }
        cmd
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("requires_subcommand", &self.requires_subcommand)
            .field("options", &self.options)
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}

fn check_unique_names(commands: &[CommandSpec], parent: Option<&str>) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for command in commands {
        if !seen.insert(command.name) {
            let name = match parent {
                Some(parent) => format!("{} {}", parent, command.name),
                None => command.name.to_string(),
            };
            return Err(RegistryError::DuplicateCommand(name));
        }
    }
    Ok(())
}

/// Root of the command table. Read-only once startup registration is done.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    pub name: &'static str,
    pub version: &'static str,
    pub about: &'static str,
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new(name: &'static str, version: &'static str, about: &'static str) -> Self {
        Self {
            name,
            version,
            about,
            commands: Vec::new(),
        }
    }

    /// Add a top-level command after checking it for consistency.
    pub fn register(&mut self, command: CommandSpec) -> Result<&mut Self, RegistryError> {
        if self.commands.iter().any(|c| c.name == command.name) {
            return Err(RegistryError::DuplicateCommand(command.name.to_string()));
        }
        command.check(command.name, &[])?;
        self.commands.push(command);
        Ok(self)
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Every command along `path`, outermost first.
    pub fn resolve_path<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<&CommandSpec>> {
        let mut specs = self.commands.as_slice();
        let mut resolved = Vec::with_capacity(path.len());
        for name in path {
            let spec = specs.iter().find(|c| c.name == name.as_ref())?;
            resolved.push(spec);
            specs = &spec.subcommands;
        }
        Some(resolved)
    }

    /// The command at the end of `path`.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&CommandSpec> {
        self.resolve_path(path)?.last().copied()
    }

    /// Compile the table into a clap command tree.
    pub fn to_command(&self) -> Command {
        Command::new(self.name)
            .version(self.version)
            .about(self.about)
            .disable_version_flag(true)
            .arg(
                Arg::new("version")
                    .short('v')
                    .long("version")
                    .action(ArgAction::Version)
                    .help("Show version"),
            )
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommands(self.commands.iter().map(CommandSpec::to_command))
    }

    /// Usage line for the command at `path`.
    pub fn usage<S: AsRef<str>>(&self, path: &[S]) -> String {
        let bin_name = std::iter::once(self.name)
            .chain(path.iter().map(AsRef::as_ref))
            .collect::<Vec<_>>()
            .join(" ");
        let mut cmd = match self.find(path) {
            Some(spec) => spec.to_command(),
            None => self.to_command(),
        }
        .bin_name(bin_name);
        cmd.render_usage().to_string()
    }
}
