//! Core configuration types and methods.

use crate::coerce::FromValue;
use crate::error::{Error, Result};
use crate::fetched::Fetched;
use crate::formatter::{self, yaml::YamlFormatter, Formatter};
use crate::path;
use crate::value::{ConfigValue, Mapping, ValueType};
use std::path::Path;

/// An immutable view over one mapping of a parsed document.
///
/// Each `Config` owns its mapping. Fetching a nested mapping yields a new,
/// independent `Config`, so views can be cloned and shared across threads
/// without tying them to the document they came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    values: Mapping,
}

impl Config {
    /// Create a new Config that owns `values`.
    pub fn new(values: Mapping) -> Self {
        Self { values }
    }

    /// Load a configuration from a specific file path.
    ///
    /// The format is picked from the file extension; anything that is not a
    /// known extension is read as YAML.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let formatter = formatter::for_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_document(&contents, formatter, path)
    }

    /// Load a configuration from a specific file path without blocking the runtime.
    #[cfg(feature = "tokio")]
    pub async fn load_file_async(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let formatter = formatter::for_path(path)?;
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse_document(&contents, formatter, path)
    }

    /// Parse an in-memory YAML document.
    pub fn load_str(content: &str) -> Result<Self> {
        Self::load_str_with(content, &YamlFormatter)
    }

    /// Parse an in-memory document with the given formatter.
    pub fn load_str_with(content: &str, formatter: &dyn Formatter) -> Result<Self> {
        Self::parse_document(content, formatter, Path::new("<content>"))
    }

    fn parse_document(content: &str, formatter: &dyn Formatter, path: &Path) -> Result<Self> {
        let data = formatter.deserialize(content).map_err(|e| match e {
            Error::ParseError { format, source, .. } => Error::ParseError {
                format,
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        let config = match data {
            ConfigValue::Object(values) => Self::new(values),
            ConfigValue::Null => Self::default(),
            other => {
                return Err(Error::ParseError {
                    format: formatter.name().to_uppercase(),
                    path: path.to_path_buf(),
                    source: format!(
                        "document root is a {}, expected a mapping",
                        other.value_type()
                    )
                    .into(),
                })
            }
        };

        tracing::debug!(
            path = %path.display(),
            format = formatter.name(),
            keys = config.len(),
            "loaded configuration"
        );

        Ok(config)
    }

    /// Get the raw value at a dotted path, without any conversion.
    pub fn raw(&self, key: &str) -> Option<&ConfigValue> {
        let value = path::resolve(key, &self.values);
        if value.is_none() {
            tracing::trace!(key, "path did not resolve");
        }
        value
    }

    /// Classify the value at a dotted path.
    ///
    /// Missing paths and null values both report `ValueType::Absent`.
    pub fn type_of(&self, key: &str) -> ValueType {
        ValueType::of(self.raw(key))
    }

    /// Fetch the value at a dotted path, wrapping mappings as `Config` views.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlcfg::{Config, ValueType};
    ///
    /// let config = Config::load_str("server:\n  tls:\n    enabled: true").unwrap();
    /// let server = config.fetch("server");
    /// assert_eq!(server.value_type(), ValueType::Mapping);
    ///
    /// let server = server.into_config().unwrap();
    /// assert!(server.get_bool("tls.enabled").unwrap());
    /// ```
    pub fn fetch(&self, key: &str) -> Fetched {
        Fetched::from_raw(self.raw(key))
    }

    /// Get a value coerced to `T`. Missing paths yield `T::default()`.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T> {
        T::from_value(self.raw(key)).map_err(|e| e.with_key(key))
    }

    /// Get a value as a string. Integers, floats and booleans are rendered
    /// in their canonical text form.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Get a value as an integer, parsing strings in base 10.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    /// Get a value as a float. Integers widen; strings are parsed.
    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    /// Get a value as a boolean. Strings accept `true`/`false`/`t`/`f`/`1`/`0`
    /// in any case.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top-level keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The mapping backing this view.
    pub fn as_mapping(&self) -> &Mapping {
        &self.values
    }
}

impl From<Mapping> for Config {
    fn from(values: Mapping) -> Self {
        Self::new(values)
    }
}

impl TryFrom<ConfigValue> for Config {
    type Error = Error;

    fn try_from(value: ConfigValue) -> Result<Self> {
        match value {
            ConfigValue::Object(values) => Ok(Self::new(values)),
            other => Err(Error::ConversionError {
                key: String::new(),
                found: other.value_type(),
                type_name: "Config",
            }),
        }
    }
}

/// Load a configuration file. Shorthand for [`Config::load_file`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    Config::load_file(path)
}
