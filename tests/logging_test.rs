//! Process-wide logging setup.
//!
//! `init_logging` installs the global subscriber, which can happen once per
//! process, so this binary holds a single test.

use tracing::Level;

use my_cli::infrastructure::logging::init_logging;
use my_cli::infrastructure::traits::LogControl;

#[test]
fn given_info_logging_when_enabling_debug_then_debug_events_pass() {
    // Arrange
    let log = init_logging("info");
    assert!(!log.is_debug());
    assert!(tracing::enabled!(Level::INFO));
    assert!(!tracing::enabled!(Level::DEBUG));

    // Act
    log.enable_debug();

    // Assert
    assert!(log.is_debug());
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));
}
