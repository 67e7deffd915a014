//! Domain entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single mail message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub sender: String,
    pub recipient: String,
    pub title: String,
    pub message: String,
}

impl Mail {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mail(sender={}, recipient={}, title={}, message={})",
            quoted(&self.sender),
            quoted(&self.recipient),
            quoted(&self.title),
            quoted(&self.message)
        )
    }
}

/// Quote a field for display.
///
/// Single quotes unless the text contains a single quote and no double
/// quote. Backslashes, control whitespace and the chosen quote are escaped.
fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Languages the `hello` command can greet in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Accepted spellings on the command line, in display order.
    pub const NAMES: &'static [&'static str] = &["english", "spanish"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    /// Greeting word for this language.
    pub fn greeting(&self) -> &'static str {
        match self {
            Language::English => "Hello",
            Language::Spanish => "Hola",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            other => Err(DomainError::UnknownLanguage {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn given_language_names_when_parsing_then_every_name_round_trips() {
        for name in Language::NAMES {
            let language: Language = name.parse().unwrap();
            assert_eq!(language.as_str(), *name);
        }
    }

    #[test]
    fn given_unknown_language_when_parsing_then_errors() {
        let result = "french".parse::<Language>();
        assert_eq!(
            result,
            Err(DomainError::UnknownLanguage {
                value: "french".to_string()
            })
        );
    }

    #[test]
    fn given_languages_when_looking_up_greeting_then_returns_word() {
        assert_eq!(Language::English.greeting(), "Hello");
        assert_eq!(Language::Spanish.greeting(), "Hola");
    }

    #[test]
    fn given_mail_when_displayed_then_shows_all_fields() {
        let mail = Mail::new("a@x.com", "b@x.com", "Hi", "Body");
        assert_eq!(
            mail.to_string(),
            "Mail(sender='a@x.com', recipient='b@x.com', title='Hi', message='Body')"
        );
    }

    #[rstest]
    #[case("We're on track", "\"We're on track\"")]
    #[case("say \"hi\"", "'say \"hi\"'")]
    #[case("it's \"x\"", "'it\\'s \"x\"'")]
    #[case("a\\b\nc", "'a\\\\b\\nc'")]
    fn given_field_with_quotes_when_quoting_then_picks_quote_char(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(quoted(input), expected);
    }

    #[test]
    fn given_message_with_apostrophe_when_displayed_then_uses_double_quotes() {
        let mail = Mail::new("a@x.com", "b@x.com", "Meeting", "Don't forget");
        assert_eq!(
            mail.to_string(),
            "Mail(sender='a@x.com', recipient='b@x.com', title='Meeting', message=\"Don't forget\")"
        );
    }
}
