//! Option validators
//!
//! A validator turns the raw tokens clap matched for one option into a
//! normalized [`Value`], or rejects them with a [`ValidationError`].
//! Returning `Ok(None)` means "no value": the dispatcher then treats the
//! option as missing.

use std::fmt;
use std::sync::Arc;

use colored::Colorize;
use itertools::Itertools;
use tracing::debug;

use crate::cli::error::ValidationError;
use crate::infrastructure::traits::LogControl;

/// Raw tokens for one option, as matched on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Absent,
    Flag(bool),
    Single(String),
    Many(Vec<String>),
}

/// Normalized option value handed to handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join(",")),
        }
    }
}

pub type ValidatorFn =
    dyn Fn(&str, RawValue) -> Result<Option<Value>, ValidationError> + Send + Sync;

/// Shared validator. Receives the option's long name for error messages.
pub type Validator = Arc<ValidatorFn>;

/// Conversion applied when an option declares no validator.
pub fn passthrough(raw: RawValue) -> Option<Value> {
    match raw {
        RawValue::Absent => None,
        RawValue::Flag(b) => Some(Value::Bool(b)),
        RawValue::Single(s) => Some(Value::Str(s)),
        RawValue::Many(items) => Some(Value::List(items)),
    }
}

/// Comma-separated or repeated list.
///
/// A single token containing `,` is split and each part trimmed; repeated
/// tokens are returned unsplit. Empty parts and duplicates are kept.
pub fn comma_list() -> Validator {
    Arc::new(split_comma_list)
}

pub fn split_comma_list(option: &str, raw: RawValue) -> Result<Option<Value>, ValidationError> {
    let tokens = match raw {
        RawValue::Absent => return Ok(Some(Value::List(Vec::new()))),
        RawValue::Single(token) => vec![token],
        RawValue::Many(tokens) => tokens,
        RawValue::Flag(_) => {
            return Err(ValidationError::new(option, "expected a list of values"));
        }
    };

    if tokens.len() == 1 && tokens[0].contains(',') {
        let parts = tokens[0]
            .split(',')
            .map(|part| part.trim().to_string())
            .collect();
        return Ok(Some(Value::List(parts)));
    }
    Ok(Some(Value::List(tokens)))
}

/// One of a fixed set of names (case-sensitive).
pub fn choice(allowed: &'static [&'static str]) -> Validator {
    Arc::new(move |option: &str, raw: RawValue| match raw {
        RawValue::Absent => Ok(None),
        RawValue::Single(value) if allowed.contains(&value.as_str()) => {
            Ok(Some(Value::Str(value)))
        }
        RawValue::Single(value) => Err(ValidationError::new(
            option,
            format!("'{}' is not one of {}", value, allowed.iter().join(", ")),
        )),
        _ => Err(ValidationError::new(option, "expected a single value")),
    })
}

/// Signed integer.
pub fn integer() -> Validator {
    Arc::new(|option: &str, raw: RawValue| match raw {
        RawValue::Absent => Ok(None),
        RawValue::Single(value) => value
            .trim()
            .parse::<i64>()
            .map(|n| Some(Value::Int(n)))
            .map_err(|_| ValidationError::new(option, format!("'{}' is not a valid integer", value))),
        _ => Err(ValidationError::new(option, "expected a single value")),
    })
}

/// `--debug` switch.
///
/// Not pure: when set, raises the process-wide log level to debug and emits
/// one "Debug mode enabled" line before returning the flag unchanged.
pub fn debug_flag(log: Arc<dyn LogControl>) -> Validator {
    Arc::new(move |option: &str, raw: RawValue| match raw {
        RawValue::Flag(enabled) => {
            if enabled {
                log.enable_debug();
                debug!("{}", "Debug mode enabled".yellow());
            }
            Ok(Some(Value::Bool(enabled)))
        }
        RawValue::Absent => Ok(Some(Value::Bool(false))),
        _ => Err(ValidationError::new(option, "expected a switch")),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::util::testing::RecordingLogControl;

    fn list(items: &[&str]) -> Option<Value> {
        Some(Value::List(items.iter().map(|s| s.to_string()).collect()))
    }

    #[rstest]
    #[case("a,b,c", &["a", "b", "c"])]
    #[case(" Alice , Bob ,Charlie", &["Alice", "Bob", "Charlie"])]
    #[case("a,,a", &["a", "", "a"])]
    #[case("Alice", &["Alice"])]
    fn given_single_token_when_splitting_then_splits_on_commas(
        #[case] token: &str,
        #[case] expected: &[&str],
    ) {
        let result = split_comma_list("names", RawValue::Many(vec![token.to_string()])).unwrap();
        assert_eq!(result, list(expected));
    }

    #[test]
    fn given_repeated_tokens_when_splitting_then_returns_them_unsplit() {
        let raw = RawValue::Many(vec!["a".into(), "b,c".into()]);

        let result = split_comma_list("names", raw).unwrap();

        assert_eq!(result, list(&["a", "b,c"]));
    }

    #[test]
    fn given_absent_list_when_splitting_then_returns_empty_list() {
        let result = split_comma_list("names", RawValue::Absent).unwrap();
        assert_eq!(result, list(&[]));
    }

    #[test]
    fn given_unknown_choice_when_validating_then_names_value_and_allowed_set() {
        let validator = choice(&["english", "spanish"]);

        let err = validator("language", RawValue::Single("french".into())).unwrap_err();

        assert_eq!(err.option, "language");
        assert!(err.reason.contains("'french'"));
        assert!(err.reason.contains("english, spanish"));
    }

    #[test]
    fn given_known_choice_when_validating_then_returns_it() {
        let validator = choice(&["english", "spanish"]);

        let value = validator("language", RawValue::Single("spanish".into())).unwrap();

        assert_eq!(value, Some(Value::Str("spanish".into())));
    }

    #[rstest]
    #[case("5", Some(Value::Int(5)))]
    #[case("-3", Some(Value::Int(-3)))]
    fn given_numeric_token_when_validating_integer_then_parses(
        #[case] token: &str,
        #[case] expected: Option<Value>,
    ) {
        let result = integer()("count", RawValue::Single(token.into())).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn given_non_numeric_token_when_validating_integer_then_errors() {
        let err = integer()("count", RawValue::Single("five".into())).unwrap_err();
        assert_eq!(err.reason, "'five' is not a valid integer");
    }

    #[test]
    fn given_debug_set_when_validating_then_enables_debug_once() {
        let log = Arc::new(RecordingLogControl::default());
        let validator = debug_flag(log.clone());

        let value = validator("debug", RawValue::Flag(true)).unwrap();

        assert_eq!(value, Some(Value::Bool(true)));
        assert_eq!(log.enable_count(), 1);
        assert!(log.is_debug());
    }

    #[test]
    fn given_debug_unset_when_validating_then_leaves_log_level_alone() {
        let log = Arc::new(RecordingLogControl::default());
        let validator = debug_flag(log.clone());

        let value = validator("debug", RawValue::Flag(false)).unwrap();

        assert_eq!(value, Some(Value::Bool(false)));
        assert_eq!(log.enable_count(), 0);
    }
}
