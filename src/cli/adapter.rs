//! Handler adapter and exit-code mapping
//!
//! The single place where outcomes become process exit codes:
//!
//! | outcome                                   | output              | code |
//! |-------------------------------------------|---------------------|------|
//! | handler returns `Ok`                      | handler's own       | 0    |
//! | handler returns any error                 | error on stderr     | 1    |
//! | unknown flag / missing or invalid option  | usage on stderr     | 2    |
//! | group command without subcommand         | help on stderr      | 2    |
//! | `--help` / `--version`                    | text on stdout      | 0    |

use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, error};

use crate::cli::dispatcher::{Dispatcher, Invocation, Parsed};
use crate::cli::error::{CliError, ControlExit};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::exitcode;
use crate::infrastructure::ServiceContainer;

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub services: &'a ServiceContainer,
    pub registry: &'a CommandRegistry,
    pub out: &'a mut dyn Write,
}

/// Run one invocation end to end and return the process exit code.
///
/// `args` starts with the program name. Handler output and help/version
/// text go to `out`; usage errors go to `err`.
pub fn execute<I, T>(
    registry: &CommandRegistry,
    services: &ServiceContainer,
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let dispatcher = Dispatcher::new(registry);

    let parsed = match dispatcher.parse(args) {
        Ok(Parsed::Invocation(parsed)) => parsed,
        Ok(Parsed::Control(control)) => return control_exit(&control, out),
        Err(e) => return dispatch_failure(&e, err),
    };

    let command_path = parsed.command_path.clone();
    let invocation = match dispatcher.validate(parsed) {
        Ok(invocation) => invocation,
        Err(e @ CliError::Validation(_)) => {
            output::error(err, &e);
            output::hint(err, registry.usage(command_path.as_slice()).trim_end());
            output::hint(err, "For more information, try '--help'.");
            return e.exit_code();
        }
        Err(e) => return dispatch_failure(&e, err),
    };

    let mut ctx = Context {
        services,
        registry,
        out,
    };
    invoke(&invocation, &mut ctx, err)
}

/// Call the bound handler inside the failure boundary.
///
/// Every handler error maps to `FAILURE`; handlers cannot pick their own code.
/// The error is logged and also written to `err` so it survives `log_level = "off"`.
pub fn invoke(invocation: &Invocation<'_>, ctx: &mut Context<'_>, err: &mut dyn Write) -> i32 {
    let Some(handler) = invocation.command.handler else {
        error!(
            "command '{}' has no handler",
            invocation.command_path.join(" ")
        );
        return exitcode::SOFTWARE;
    };

    debug!("running '{}'", invocation.command_path.join(" "));
    let result = handler(&invocation.inputs, ctx);
    ctx.out.flush().ok();
    match result {
        Ok(()) => exitcode::OK,
        Err(e) => {
            error!("{}", e);
            output::error(err, &e);
            exitcode::FAILURE
        }
    }
}

fn control_exit(control: &ControlExit, out: &mut dyn Write) -> i32 {
    output::raw(out, control.text());
    exitcode::OK
}

fn dispatch_failure(e: &CliError, err: &mut dyn Write) -> i32 {
    match e {
        // clap already rendered the message together with usage or help
        CliError::Usage(text) | CliError::MissingSubcommand(text) => output::raw(err, text),
        other => output::error(err, other),
    }
    e.exit_code()
}
