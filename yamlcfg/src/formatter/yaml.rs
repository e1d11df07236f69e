//! YAML format support.

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::value::{ConfigValue, Mapping};

/// Formatter for YAML files.
///
/// Uses the `yaml-rust2` crate (no serde dependency). Handles multi-document
/// files by using the first document. Converts non-string keys to strings.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn deserialize(&self, content: &str) -> Result<ConfigValue> {
        use yaml_rust2::YamlLoader;

        let docs = YamlLoader::load_from_str(content).map_err(|e| Error::ParseError {
            format: "YAML".to_string(),
            path: std::path::PathBuf::from("<content>"),
            source: e.to_string().into(),
        })?;

        match docs.into_iter().next() {
            Some(doc) => Ok(yaml_to_config_value(doc)),
            None => Ok(ConfigValue::Object(Mapping::new())),
        }
    }

    fn name(&self) -> &str {
        "yaml"
    }
}

/// Parse a YAML real, including the `.inf` and `.nan` spellings.
fn parse_real(s: &str) -> Option<f64> {
    match s {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        _ => s.parse::<f64>().ok(),
    }
}

fn yaml_to_config_value(yaml: yaml_rust2::Yaml) -> ConfigValue {
    use yaml_rust2::Yaml;

    match yaml {
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => ConfigValue::Null,
        Yaml::Boolean(b) => ConfigValue::Bool(b),
        Yaml::Integer(i) => ConfigValue::Integer(i),
        Yaml::Real(s) => match parse_real(&s) {
            Some(f) => ConfigValue::Float(f),
            None => ConfigValue::String(s),
        },
        Yaml::String(s) => ConfigValue::String(s),
        Yaml::Array(arr) => ConfigValue::Array(arr.into_iter().map(yaml_to_config_value).collect()),
        Yaml::Hash(map) => {
            let obj: Mapping = map
                .into_iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        Yaml::String(s) => s,
                        Yaml::Integer(i) => i.to_string(),
                        Yaml::Real(r) => r,
                        Yaml::Boolean(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, yaml_to_config_value(v)))
                })
                .collect();
            ConfigValue::Object(obj)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provides() {
        let f = YamlFormatter;
        assert!(f.provides("config.yaml"));
        assert!(f.provides("config.yml"));
        assert!(!f.provides("config.json"));
    }

    #[test]
    fn test_deserialize() {
        let f = YamlFormatter;
        let result = f.deserialize("name: test\nport: 8080").unwrap();
        assert_eq!(result.get("name"), Some(&ConfigValue::String("test".into())));
        assert_eq!(result.get("port"), Some(&ConfigValue::Integer(8080)));
    }

    #[test]
    fn test_deserialize_empty() {
        let f = YamlFormatter;
        let result = f.deserialize("").unwrap();
        assert!(result.as_object().is_some());
    }

    #[test]
    fn test_deserialize_error() {
        let f = YamlFormatter;
        let err = f.deserialize("---\n- :\n  a: [}").unwrap_err();
        assert!(matches!(err, Error::ParseError { ref format, .. } if format == "YAML"));
    }

    #[test]
    fn test_deserialize_all_value_types() {
        let f = YamlFormatter;
        let yaml = "null_val: null\ntilde: ~\nbool_val: true\nint_val: 42\nfloat_val: 3.15\nstr_val: hello\nquoted: \"true\"";
        let result = f.deserialize(yaml).unwrap();
        assert_eq!(result.get("null_val"), Some(&ConfigValue::Null));
        assert_eq!(result.get("tilde"), Some(&ConfigValue::Null));
        assert_eq!(result.get("bool_val"), Some(&ConfigValue::Bool(true)));
        assert_eq!(result.get("int_val"), Some(&ConfigValue::Integer(42)));
        assert_eq!(result.get("float_val"), Some(&ConfigValue::Float(3.15)));
        assert_eq!(result.get("str_val"), Some(&ConfigValue::String("hello".into())));
        assert_eq!(result.get("quoted"), Some(&ConfigValue::String("true".into())));
    }

    #[test]
    fn test_deserialize_special_reals() {
        let f = YamlFormatter;
        let result = f.deserialize("pos: .inf\nneg: -.inf\nnan: .nan").unwrap();
        assert_eq!(result.get("pos"), Some(&ConfigValue::Float(f64::INFINITY)));
        assert_eq!(result.get("neg"), Some(&ConfigValue::Float(f64::NEG_INFINITY)));
        assert!(matches!(result.get("nan"), Some(ConfigValue::Float(f)) if f.is_nan()));
    }

    #[test]
    fn test_deserialize_non_string_keys() {
        let f = YamlFormatter;
        let yaml = "42: int_key\ntrue: bool_key\n3.15: float_key";
        let result = f.deserialize(yaml).unwrap();
        assert_eq!(result.get("42"), Some(&ConfigValue::String("int_key".into())));
        assert_eq!(result.get("true"), Some(&ConfigValue::String("bool_key".into())));
        assert_eq!(result.get("3.15"), Some(&ConfigValue::String("float_key".into())));
    }

    #[test]
    fn test_deserialize_aliases_resolve() {
        let f = YamlFormatter;
        let yaml = "base: &base\n  host: localhost\ncopy: *base";
        let result = f.deserialize(yaml).unwrap();
        assert_eq!(
            result.get("copy").and_then(|c| c.get("host")),
            Some(&ConfigValue::String("localhost".into()))
        );
    }

    #[test]
    fn test_deserialize_array() {
        let f = YamlFormatter;
        let result = f.deserialize("- 1\n- 2\n- 3").unwrap();
        assert_eq!(result.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_only_first_document_is_used() {
        let f = YamlFormatter;
        let result = f.deserialize("first: 1\n---\nsecond: 2").unwrap();
        assert!(result.get("first").is_some());
        assert!(result.get("second").is_none());
    }
}
