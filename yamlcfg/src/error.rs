//! Error types for the yamlcfg library.

use crate::coerce::ParseBoolError;
use crate::value::ValueType;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for yamlcfg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading a document or reading typed values from it.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Unable to load config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document could not be parsed into a mapping.
    #[error("Unable to parse {format} document at {path}: {source}")]
    ParseError {
        format: String,
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No formatter compiled into this build handles the file's extension.
    #[error("Invalid or unsupported configuration format for file: {0}")]
    UnsupportedFormat(PathBuf),

    /// The value at `key` has a type that cannot be converted to `type_name`.
    #[error("Cannot convert {found} at '{key}' into {type_name}")]
    ConversionError {
        key: String,
        found: ValueType,
        type_name: &'static str,
    },

    /// A string value did not parse as an integer.
    #[error(transparent)]
    InvalidInteger(#[from] ParseIntError),

    /// A string value did not parse as a float.
    #[error(transparent)]
    InvalidFloat(#[from] ParseFloatError),

    /// A string value did not parse as a boolean.
    #[error(transparent)]
    InvalidBool(#[from] ParseBoolError),
}

impl Error {
    /// Add key context to a ConversionError.
    ///
    /// Any other variant is returned unchanged, so parse errors keep their
    /// original message.
    pub fn with_key(self, key: impl Into<String>) -> Self {
        if let Error::ConversionError { found, type_name, .. } = self {
            Error::ConversionError { key: key.into(), found, type_name }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_key_conversion_error() {
        let err = Error::ConversionError {
            key: String::new(),
            found: ValueType::Mapping,
            type_name: "i64",
        };
        let result = err.with_key("rootobj");
        match result {
            Error::ConversionError { key, found, .. } => {
                assert_eq!(key, "rootobj");
                assert_eq!(found, ValueType::Mapping);
            }
            _ => panic!("expected ConversionError"),
        }
    }

    #[test]
    fn test_with_key_other_error() {
        let err = Error::UnsupportedFormat(PathBuf::from("settings.ini"));
        let result = err.with_key("ignored");
        assert!(matches!(result, Error::UnsupportedFormat(p) if p == PathBuf::from("settings.ini")));
    }

    #[test]
    fn test_conversion_error_message_names_both_types() {
        let err = Error::ConversionError {
            key: "rootarray".into(),
            found: ValueType::Sequence,
            type_name: "bool",
        };
        assert_eq!(
            err.to_string(),
            "Cannot convert Sequence at 'rootarray' into bool"
        );
    }

    #[test]
    fn test_parse_errors_are_transparent() {
        let source = "abc".parse::<i64>().unwrap_err();
        let expected = source.to_string();
        let err: Error = source.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_error_names_path() {
        let err = Error::Io {
            path: PathBuf::from("/missing/config.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("/missing/config.yaml"));
        assert!(message.contains("no such file"));
    }
}
