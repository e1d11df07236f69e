//! Materialized lookup results.

use crate::config::Config;
use crate::value::{ConfigValue, ValueType};

/// The result of [`Config::fetch`].
///
/// Mappings come back as their own [`Config`] view, and sequences are
/// rebuilt element by element so that any mapping inside them is a view too.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Absent,
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Sequence(Vec<Fetched>),
    Mapping(Config),
}

impl Fetched {
    /// Materialize a raw lookup result.
    pub fn from_raw(value: Option<&ConfigValue>) -> Self {
        match value {
            None | Some(ConfigValue::Null) => Fetched::Absent,
            Some(ConfigValue::String(s)) => Fetched::String(s.clone()),
            Some(ConfigValue::Integer(n)) => Fetched::Integer(*n),
            Some(ConfigValue::Float(f)) => Fetched::Float(*f),
            Some(ConfigValue::Bool(b)) => Fetched::Bool(*b),
            // element i maps to element i
            Some(ConfigValue::Array(items)) => {
                Fetched::Sequence(items.iter().map(|v| Fetched::from_raw(Some(v))).collect())
            }
            Some(ConfigValue::Object(map)) => Fetched::Mapping(Config::new(map.clone())),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Fetched::Absent => ValueType::Absent,
            Fetched::String(_) => ValueType::String,
            Fetched::Integer(_) => ValueType::Integer,
            Fetched::Float(_) => ValueType::Float,
            Fetched::Bool(_) => ValueType::Bool,
            Fetched::Sequence(_) => ValueType::Sequence,
            Fetched::Mapping(_) => ValueType::Mapping,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Fetched::Absent)
    }

    /// Returns the nested view if this is a Mapping.
    pub fn as_config(&self) -> Option<&Config> {
        match self {
            Fetched::Mapping(config) => Some(config),
            _ => None,
        }
    }

    /// Consume this result, returning the nested view if it is a Mapping.
    pub fn into_config(self) -> Option<Config> {
        match self {
            Fetched::Mapping(config) => Some(config),
            _ => None,
        }
    }

    /// Returns the elements if this is a Sequence.
    pub fn as_sequence(&self) -> Option<&[Fetched]> {
        match self {
            Fetched::Sequence(items) => Some(items),
            _ => None,
        }
    }
}
