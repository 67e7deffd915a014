use std::io::{self, Write};
use std::process;
use std::sync::Arc;

use my_cli::cli::{self, output};
use my_cli::config::Settings;
use my_cli::exitcode;
use my_cli::infrastructure::logging::init_logging;
use my_cli::infrastructure::ServiceContainer;

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&mut io::stderr(), &e);
            process::exit(exitcode::CONFIG);
        }
    };

    let log = Arc::new(init_logging(&settings.log_level));
    let services = ServiceContainer::new(settings, log);

    let registry = match cli::build_registry(&services) {
        Ok(registry) => registry,
        Err(e) => {
            output::error(&mut io::stderr(), &e);
            process::exit(exitcode::SOFTWARE);
        }
    };

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let code = cli::execute(
        &registry,
        &services,
        std::env::args_os(),
        &mut stdout,
        &mut stderr,
    );
    stdout.flush().ok();
    process::exit(code);
}
