use std::env;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{debug, info, Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::{filter::filter_fn, fmt, prelude::*, EnvFilter, Layer};

use crate::infrastructure::traits::LogControl;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = [""];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| !name.is_empty() && metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Log control that records calls instead of touching the global subscriber.
///
/// `events` collects a marker per `enable_debug` call so tests can check
/// ordering against other recorded validator runs.
#[derive(Debug, Default)]
pub struct RecordingLogControl {
    enabled: AtomicUsize,
    events: Mutex<Vec<String>>,
}

impl RecordingLogControl {
    /// How many times debug mode was requested.
    pub fn enable_count(&self) -> usize {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Append a marker to the shared event log.
    pub fn record(&self, event: impl Into<String>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogControl for RecordingLogControl {
    fn enable_debug(&self) {
        self.enabled.fetch_add(1, Ordering::SeqCst);
        self.record("debug enabled");
    }

    fn is_debug(&self) -> bool {
        self.enable_count() > 0
    }
}

/// One tracing event seen by a [`CapturingLayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

/// Layer that keeps every event's level and message in memory.
///
/// Install it with `tracing::subscriber::with_default` so only the current
/// thread is captured and the global test subscriber stays untouched.
#[derive(Debug, Clone, Default)]
pub struct CapturingLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturingLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events at `level` whose message contains `needle`.
    pub fn matching(&self, level: Level, needle: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level && e.message.contains(needle))
            .collect()
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message,
            });
    }
}
