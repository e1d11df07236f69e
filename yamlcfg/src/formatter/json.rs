//! JSON and JSON5 format support.

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::value::{ConfigValue, Mapping};

/// Formatter for JSON, JSON5, and JSONC files.
///
/// Uses the `jzon` crate (no serde dependency). JSON5/JSONC support is
/// best-effort.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn extensions(&self) -> &[&str] {
        &["json", "json5", "jsonc"]
    }

    fn deserialize(&self, content: &str) -> Result<ConfigValue> {
        let value = jzon::parse(content).map_err(|e| Error::ParseError {
            format: "JSON".to_string(),
            path: std::path::PathBuf::from("<content>"),
            source: e.to_string().into(),
        })?;
        Ok(jzon_to_config_value(&value))
    }

    fn name(&self) -> &str {
        "json"
    }
}

fn jzon_to_config_value(value: &jzon::JsonValue) -> ConfigValue {
    use jzon::JsonValue;

    match value {
        JsonValue::Null => ConfigValue::Null,
        JsonValue::Boolean(b) => ConfigValue::Bool(*b),
        JsonValue::Number(_) => match (value.as_i64(), value.as_f64()) {
            (Some(i), _) => ConfigValue::Integer(i),
            (None, Some(f)) => ConfigValue::Float(f),
            (None, None) => ConfigValue::Null,
        },
        JsonValue::Short(s) => ConfigValue::String(s.to_string()),
        JsonValue::String(s) => ConfigValue::String(s.clone()),
        JsonValue::Array(arr) => ConfigValue::Array(arr.iter().map(jzon_to_config_value).collect()),
        JsonValue::Object(obj) => {
            let map: Mapping = obj
                .iter()
                .map(|(k, v)| (k.to_string(), jzon_to_config_value(v)))
                .collect();
            ConfigValue::Object(map)
        }
    }
}
