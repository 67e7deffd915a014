//! Process-wide logging setup
//!
//! Installs a stderr `fmt` subscriber behind a reloadable level filter so the
//! `--debug` option can raise verbosity after startup.

use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, Registry};

use crate::infrastructure::traits::LogControl;

/// Log control backed by the global tracing subscriber's reload handle.
pub struct TracingLogControl {
    handle: reload::Handle<LevelFilter, Registry>,
}

impl LogControl for TracingLogControl {
    fn enable_debug(&self) {
        if let Err(e) = self.handle.modify(|filter| *filter = LevelFilter::DEBUG) {
            eprintln!("Error: Failed to raise log level: {}", e);
        }
    }

    fn is_debug(&self) -> bool {
        self.handle
            .with_current(|filter| *filter >= LevelFilter::DEBUG)
            .unwrap_or(false)
    }
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse::<LevelFilter>().ok()
}

/// Install the global subscriber at `level` and return its control handle.
///
/// Unknown level names fall back to `info`.
pub fn init_logging(level: &str) -> TracingLogControl {
    let (filter, fallback) = match parse_level(level) {
        Some(filter) => (filter, false),
        None => (LevelFilter::INFO, true),
    };

    let (filter_layer, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });

    if fallback {
        warn!("Unknown log level '{}', using info", level);
    }

    TracingLogControl { handle }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("info", Some(LevelFilter::INFO))]
    #[case("DEBUG", Some(LevelFilter::DEBUG))]
    #[case(" trace ", Some(LevelFilter::TRACE))]
    #[case("off", Some(LevelFilter::OFF))]
    #[case("loud", None)]
    fn given_level_name_when_parsing_then_maps_to_filter(
        #[case] input: &str,
        #[case] expected: Option<LevelFilter>,
    ) {
        assert_eq!(parse_level(input), expected);
    }
}
