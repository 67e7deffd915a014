//! Hello service for the `hello` command

use std::io::Write;

use colored::Colorize;
use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Language;

/// Greets a single person in a configured language.
pub struct HelloService {
    language: Language,
}

impl HelloService {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Write the language's greeting followed by `name`.
    pub fn hello(&self, name: &str, out: &mut dyn Write) -> ApplicationResult<()> {
        debug!("Using language {}", self.language.as_str().cyan());
        writeln!(out, "{} {}", self.language.greeting(), name).with_context("write greeting")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Language::English, "Hello World\n")]
    #[case(Language::Spanish, "Hola World\n")]
    fn given_language_when_saying_hello_then_uses_its_greeting(
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let service = HelloService::new(language);
        let mut out = Vec::new();

        service.hello("World", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
