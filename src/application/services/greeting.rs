//! Greeting service for the `greet` command

use std::io::Write;

use colored::Colorize;
use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};

/// Greets a list of people with a fixed greeting word.
pub struct GreetingService {
    greeting: String,
}

impl GreetingService {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    /// Write `"<greeting> <name>"` once per name, in input order.
    pub fn greet(&self, names: &[String], out: &mut dyn Write) -> ApplicationResult<()> {
        debug!("Using greeting {}", self.greeting.cyan());
        for name in names {
            writeln!(out, "{} {}", self.greeting, name).with_context("write greeting")?;
        }
        Ok(())
    }
}
