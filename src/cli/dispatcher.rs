//! Dispatcher
//!
//! Resolves an argument vector against the command registry: clap tokenises
//! and checks the grammar, then every option of the resolved command path is
//! validated (eager options first, the rest in declaration order) into an
//! [`Inputs`] record for the handler.

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::ArgMatches;
use tracing::{debug, trace};

use crate::cli::error::{CliError, CliResult, ControlExit, ValidationError};
use crate::cli::registry::{CommandRegistry, CommandSpec, OptionKind, OptionSpec};
use crate::cli::validators::{RawValue, Value};

/// Command path and raw option tokens of one process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Command names, outermost first (e.g. `["mail", "delete"]`)
    pub command_path: Vec<String>,
    /// Raw tokens keyed by option long name
    pub raw_options: BTreeMap<String, RawValue>,
}

/// Result of tokenising: either a command to validate or an early exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Invocation(ParsedInvocation),
    Control(ControlExit),
}

/// Normalized option values handed to a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    values: BTreeMap<String, Value>,
}

impl Inputs {
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Switch value; absent switches are off.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn string(&self, name: &str) -> CliResult<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::new(name, "expected a string value").into())
    }

    pub fn int(&self, name: &str) -> CliResult<i64> {
        self.get(name)
            .and_then(Value::as_int)
            .ok_or_else(|| ValidationError::new(name, "expected an integer value").into())
    }

    pub fn list(&self, name: &str) -> CliResult<&[String]> {
        self.get(name)
            .and_then(Value::as_list)
            .ok_or_else(|| ValidationError::new(name, "expected a list of values").into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A fully validated command ready to run.
#[derive(Debug)]
pub struct Invocation<'r> {
    pub command_path: Vec<String>,
    pub command: &'r CommandSpec,
    pub inputs: Inputs,
}

/// Outcome of a successful resolution.
#[derive(Debug)]
pub enum Resolution<'r> {
    Run(Invocation<'r>),
    Control(ControlExit),
}

pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Parse and validate in one step.
    pub fn resolve<I, T>(&self, args: I) -> CliResult<Resolution<'r>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.parse(args)? {
            Parsed::Control(control) => Ok(Resolution::Control(control)),
            Parsed::Invocation(parsed) => self.validate(parsed).map(Resolution::Run),
        }
    }

    /// Tokenise `args` (program name first) and collect raw option values.
    ///
    /// Unknown flags, flags missing their value, missing required options and
    /// missing subcommands fail here, before any validator runs.
    pub fn parse<I, T>(&self, args: I) -> CliResult<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.registry.to_command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => return self.classify(e),
        };

        let mut command_path = Vec::new();
        let mut raw_options = BTreeMap::new();
        let mut specs = self.registry.commands();
        let mut current = &matches;
        while let Some((name, sub_matches)) = current.subcommand() {
            let spec = specs
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| CliError::Usage(format!("unrecognized command '{}'", name)))?;
            for option in &spec.options {
                raw_options.insert(option.long.to_string(), raw_value(option, sub_matches));
            }
            command_path.push(name.to_string());
            specs = &spec.subcommands;
            current = sub_matches;
        }
        debug!("resolved command path: {:?}", command_path);

        Ok(Parsed::Invocation(ParsedInvocation {
            command_path,
            raw_options,
        }))
    }

    /// Run every option's validator and build the handler's input record.
    pub fn validate(&self, parsed: ParsedInvocation) -> CliResult<Invocation<'r>> {
        let path = self
            .registry
            .resolve_path(parsed.command_path.as_slice())
            .ok_or_else(|| {
                CliError::Usage(format!(
                    "unrecognized command '{}'",
                    parsed.command_path.join(" ")
                ))
            })?;
        let command = path
            .last()
            .copied()
            .ok_or_else(|| CliError::Usage("no command given".to_string()))?;

        let (eager, rest): (Vec<&OptionSpec>, Vec<&OptionSpec>) = path
            .iter()
            .flat_map(|spec| spec.options.iter())
            .partition(|option| option.eager);

        let mut raw_options = parsed.raw_options;
        let mut inputs = Inputs::default();
        for option in eager.into_iter().chain(rest) {
            let raw = raw_options
                .remove(option.long)
                .unwrap_or(RawValue::Absent);
            trace!("validating --{}: {:?}", option.long, raw);
            let value = option.resolve(raw)?;
            inputs.insert(option.long, value);
        }

        Ok(Invocation {
            command_path: parsed.command_path,
            command,
            inputs,
        })
    }

    fn classify(&self, e: clap::Error) -> CliResult<Parsed> {
        match e.kind() {
            ErrorKind::DisplayHelp => Ok(Parsed::Control(ControlExit::Help(
                e.render().to_string(),
            ))),
            ErrorKind::DisplayVersion => Ok(Parsed::Control(ControlExit::Version(format!(
                "{} version {}\n",
                self.registry.name, self.registry.version
            )))),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Err(CliError::MissingSubcommand(e.render().to_string()))
            }
            _ => Err(CliError::Usage(e.render().to_string())),
        }
    }
}

fn raw_value(option: &OptionSpec, matches: &ArgMatches) -> RawValue {
    match option.kind {
        OptionKind::Flag => RawValue::Flag(matches.get_flag(option.long)),
        OptionKind::Value => matches
            .get_one::<String>(option.long)
            .cloned()
            .map(RawValue::Single)
            .unwrap_or(RawValue::Absent),
        OptionKind::List => matches
            .get_many::<String>(option.long)
            .map(|values| RawValue::Many(values.cloned().collect()))
            .unwrap_or(RawValue::Absent),
    }
}
