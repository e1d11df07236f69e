//! Generic document values and their type tags.
//!
//! Every formatter lowers its parser's tree into `ConfigValue`, so the
//! navigator and the typed getters only ever match on this one enum.

use std::collections::HashMap;
use std::fmt;

/// A mapping node: string keys to nested values.
pub type Mapping = HashMap<String, ConfigValue>;

/// A value parsed out of a configuration document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigValue {
    /// Null literal (`~`, `null`, or an empty value)
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed 64-bit integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<ConfigValue>),
    /// Key-value mapping
    Object(Mapping),
}

impl ConfigValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the mapping if this is an Object.
    pub fn as_object(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the sequence if this is an Array.
    pub fn as_array(&self) -> Option<&Vec<ConfigValue>> {
        match self {
            ConfigValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Classify this value. Null is reported as `ValueType::Absent`.
    pub fn value_type(&self) -> ValueType {
        match self {
            ConfigValue::Null => ValueType::Absent,
            ConfigValue::Bool(_) => ValueType::Bool,
            ConfigValue::Integer(_) => ValueType::Integer,
            ConfigValue::Float(_) => ValueType::Float,
            ConfigValue::String(_) => ValueType::String,
            ConfigValue::Array(_) => ValueType::Sequence,
            ConfigValue::Object(_) => ValueType::Mapping,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Integer(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Float(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::String(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::String(v.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(v: Vec<T>) -> Self {
        ConfigValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for ConfigValue {
    fn from(v: Mapping) -> Self {
        ConfigValue::Object(v)
    }
}

/// The dynamic type of a resolved path.
///
/// Never stored alongside a value; always derived from it at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Integer,
    Float,
    Bool,
    Sequence,
    Mapping,
    /// The path did not resolve, or resolved to a null literal.
    Absent,
}

impl ValueType {
    /// Classify an optional lookup result.
    pub fn of(value: Option<&ConfigValue>) -> Self {
        value.map_or(ValueType::Absent, ConfigValue::value_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::Bool => "Bool",
            ValueType::Sequence => "Sequence",
            ValueType::Mapping => "Mapping",
            ValueType::Absent => "Absent",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
