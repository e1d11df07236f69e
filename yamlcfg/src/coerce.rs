//! Coercion of raw values into the four supported output types.
//!
//! A null or missing value always coerces to the target's zero value. Strings
//! are parsed, and parse failures are returned as the parser reported them.

use crate::error::{Error, Result};
use crate::value::ConfigValue;
use std::fmt;

/// Types that a configuration value can be coerced into.
pub trait FromValue: Sized + Default {
    /// Name used in conversion errors.
    const TYPE_NAME: &'static str;

    /// Coerce a resolved value. `None` means the path did not resolve.
    fn from_value(value: Option<&ConfigValue>) -> Result<Self>;
}

fn unsupported<T: FromValue>(value: &ConfigValue) -> Error {
    Error::ConversionError {
        key: String::new(),
        found: value.value_type(),
        type_name: T::TYPE_NAME,
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: Option<&ConfigValue>) -> Result<Self> {
        match value {
            None | Some(ConfigValue::Null) => Ok(String::new()),
            Some(ConfigValue::String(s)) => Ok(s.clone()),
            Some(ConfigValue::Integer(n)) => Ok(n.to_string()),
            Some(ConfigValue::Float(f)) => Ok(f.to_string()),
            Some(ConfigValue::Bool(b)) => Ok(b.to_string()),
            Some(other @ (ConfigValue::Array(_) | ConfigValue::Object(_))) => {
                Err(unsupported::<Self>(other))
            }
        }
    }
}

impl FromValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_value(value: Option<&ConfigValue>) -> Result<Self> {
        match value {
            None | Some(ConfigValue::Null) => Ok(0),
            Some(ConfigValue::Integer(n)) => Ok(*n),
            Some(ConfigValue::String(s)) => Ok(s.parse::<i64>()?),
            Some(
                other @ (ConfigValue::Float(_)
                | ConfigValue::Bool(_)
                | ConfigValue::Array(_)
                | ConfigValue::Object(_)),
            ) => Err(unsupported::<Self>(other)),
        }
    }
}

impl FromValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: Option<&ConfigValue>) -> Result<Self> {
        match value {
            None | Some(ConfigValue::Null) => Ok(0.0),
            Some(ConfigValue::Float(f)) => Ok(*f),
            Some(ConfigValue::Integer(n)) => Ok(*n as f64),
            Some(ConfigValue::String(s)) => Ok(s.parse::<f64>()?),
            Some(other @ (ConfigValue::Bool(_) | ConfigValue::Array(_) | ConfigValue::Object(_))) => {
                Err(unsupported::<Self>(other))
            }
        }
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: Option<&ConfigValue>) -> Result<Self> {
        match value {
            None | Some(ConfigValue::Null) => Ok(false),
            Some(ConfigValue::Bool(b)) => Ok(*b),
            Some(ConfigValue::String(s)) => Ok(parse_bool(s)?),
            Some(
                other @ (ConfigValue::Integer(_)
                | ConfigValue::Float(_)
                | ConfigValue::Array(_)
                | ConfigValue::Object(_)),
            ) => Err(unsupported::<Self>(other)),
        }
    }
}

/// Error returned by [`parse_bool`] for a string outside the accepted tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoolError {
    input: String,
}

impl ParseBoolError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid boolean literal '{}'", self.input)
    }
}

impl std::error::Error for ParseBoolError {}

/// Parse a boolean from `true`/`false`/`t`/`f`/`1`/`0`, ignoring ASCII case.
pub fn parse_bool(s: &str) -> std::result::Result<bool, ParseBoolError> {
    const TRUE: [&str; 3] = ["true", "t", "1"];
    const FALSE: [&str; 3] = ["false", "f", "0"];

    if TRUE.iter().any(|t| t.eq_ignore_ascii_case(s)) {
        Ok(true)
    } else if FALSE.iter().any(|t| t.eq_ignore_ascii_case(s)) {
        Ok(false)
    } else {
        Err(ParseBoolError { input: s.to_string() })
    }
}
