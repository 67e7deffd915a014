//! Error conversion helpers for console I/O
//!
//! Provides an extension trait for attaching context to write failures.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{greeting} {name}").with_context("write greeting")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_wraps_as_operation_failed() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));

        let err = result.with_context("write greeting").unwrap_err();

        assert_eq!(err.to_string(), "operation failed: write greeting");
    }
}
