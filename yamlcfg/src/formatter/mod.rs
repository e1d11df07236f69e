//! Document format abstraction.
//!
//! A `Formatter` turns the raw text of a document into a `ConfigValue` tree.
//! YAML is always available; the other formats sit behind cargo features.
//!
//! Built-in formatters:
//! - `YamlFormatter` — `.yaml`, `.yml`, and any extension no other formatter claims
//! - `JsonFormatter` — `.json`, `.json5`, `.jsonc` (behind `json` feature)
//! - `TomlFormatter` — `.toml` (behind `toml` feature)

pub mod yaml;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "toml")]
pub mod toml;

use crate::error::{Error, Result};
use crate::value::ConfigValue;
use std::path::Path;

/// A parser for one document format.
///
/// Formatters are stateless. They only read documents; writing is not
/// supported.
pub trait Formatter: Send + Sync + 'static {
    /// Whether this formatter can handle the given source identifier.
    ///
    /// Typically checks the file extension against `extensions()`.
    fn provides(&self, identifier: &str) -> bool {
        extension_matches(identifier, self.extensions())
    }

    /// File extensions this formatter handles (without the leading dot).
    fn extensions(&self) -> &[&str];

    /// Parse a content string into a `ConfigValue`.
    fn deserialize(&self, content: &str) -> Result<ConfigValue>;

    /// Human-readable name for error messages.
    fn name(&self) -> &str;
}

/// Extensions that belong to formats which may not be compiled in.
const FEATURE_GATED: &[&str] = &["json", "json5", "jsonc", "toml"];

fn formatters() -> Vec<&'static dyn Formatter> {
    let mut list: Vec<&'static dyn Formatter> = Vec::new();
    #[cfg(feature = "json")]
    list.push(&json::JsonFormatter);
    #[cfg(feature = "toml")]
    list.push(&toml::TomlFormatter);
    list.push(&yaml::YamlFormatter);
    list
}

/// Pick the formatter for a file path by its extension.
///
/// Paths without a recognised extension are treated as YAML. An extension
/// that belongs to a format disabled at compile time is an error rather
/// than being silently parsed as YAML.
pub fn for_path(path: &Path) -> Result<&'static dyn Formatter> {
    let identifier = path.to_string_lossy();

    if let Some(formatter) = formatters().into_iter().find(|f| f.provides(&identifier)) {
        return Ok(formatter);
    }

    if extension_matches(&identifier, FEATURE_GATED) {
        return Err(Error::UnsupportedFormat(path.to_path_buf()));
    }

    Ok(&yaml::YamlFormatter)
}

/// Check whether an identifier's file extension matches any of the given extensions.
///
/// The comparison ignores ASCII case, so `settings.YML` is YAML.
pub fn extension_matches(identifier: &str, extensions: &[&str]) -> bool {
    let path = Path::new(identifier);
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e,
        None => return false,
    };
    extensions.iter().any(|supported| supported.eq_ignore_ascii_case(ext))
}
