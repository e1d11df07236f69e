//! TOML format support.

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::value::{ConfigValue, Mapping};

/// Formatter for TOML files.
///
/// Uses the `toml_edit` crate (no serde dependency). Datetimes become
/// strings; inline tables and arrays of tables become mappings and
/// sequences of mappings.
pub struct TomlFormatter;

impl Formatter for TomlFormatter {
    fn extensions(&self) -> &[&str] {
        &["toml"]
    }

    fn deserialize(&self, content: &str) -> Result<ConfigValue> {
        use toml_edit::DocumentMut;

        let doc: DocumentMut =
            content
                .parse()
                .map_err(|e: toml_edit::TomlError| Error::ParseError {
                    format: "TOML".to_string(),
                    path: std::path::PathBuf::from("<content>"),
                    source: e.to_string().into(),
                })?;

        Ok(toml_item_to_config_value(doc.as_item()))
    }

    fn name(&self) -> &str {
        "toml"
    }
}

fn table_to_mapping<'a>(
    entries: impl Iterator<Item = (&'a str, &'a toml_edit::Item)>,
) -> ConfigValue {
    let map: Mapping = entries
        .map(|(k, v)| (k.to_string(), toml_item_to_config_value(v)))
        .collect();
    ConfigValue::Object(map)
}

fn toml_item_to_config_value(item: &toml_edit::Item) -> ConfigValue {
    use toml_edit::Item;

    match item {
        Item::None => ConfigValue::Null,
        Item::Value(v) => toml_value_to_config_value(v),
        Item::Table(t) => table_to_mapping(t.iter()),
        Item::ArrayOfTables(arr) => {
            ConfigValue::Array(arr.iter().map(|t| table_to_mapping(t.iter())).collect())
        }
    }
}

fn toml_value_to_config_value(value: &toml_edit::Value) -> ConfigValue {
    use toml_edit::Value;

    match value {
        Value::String(s) => ConfigValue::String(s.value().to_string()),
        Value::Integer(i) => ConfigValue::Integer(*i.value()),
        Value::Float(f) => ConfigValue::Float(*f.value()),
        Value::Boolean(b) => ConfigValue::Bool(*b.value()),
        Value::Datetime(dt) => ConfigValue::String(dt.value().to_string()),
        Value::Array(arr) => {
            ConfigValue::Array(arr.iter().map(toml_value_to_config_value).collect())
        }
        Value::InlineTable(t) => {
            let map: Mapping = t
                .iter()
                .map(|(k, v)| (k.to_string(), toml_value_to_config_value(v)))
                .collect();
            ConfigValue::Object(map)
        }
    }
}
