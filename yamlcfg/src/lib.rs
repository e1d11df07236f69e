//! # yamlcfg
//!
//! Typed, dotted-path lookups over YAML configuration documents.
//!
//! A document is parsed once into an immutable tree. Values are then read
//! with paths such as `"rootobj.subobj1.aBool"` and coerced to a string,
//! integer, float or boolean. A path that does not resolve is not an error:
//! every getter returns the type's zero value for it.
//!
//! ## Features
//!
//! - **Dot-notation access**: nested mappings are walked segment by segment
//! - **Typed getters**: `get_string`, `get_int`, `get_float`, `get_bool`
//! - **Views**: fetching a mapping returns an independent `Config`
//! - **Formats**: YAML always; JSON (`json` feature) and TOML (`toml` feature)
//! - **Async loading**: `Config::load_file_async` (`tokio` feature)
//!
//! ## Examples
//!
//! ```no_run
//! use yamlcfg::load_file;
//!
//! fn main() -> yamlcfg::Result<()> {
//!     let config = load_file("settings.yaml")?;
//!
//!     let name = config.get_string("app.name")?;
//!     let port = config.get_int("server.port")?;
//!     let verbose = config.get_bool("logging.verbose")?;
//!     println!("{name} on {port} (verbose: {verbose})");
//!
//!     Ok(())
//! }
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod fetched;
pub mod formatter;
pub mod path;
pub mod value;

pub use coerce::{FromValue, ParseBoolError};
pub use config::{load_file, Config};
pub use error::{Error, Result};
pub use fetched::Fetched;
pub use formatter::Formatter;
pub use value::{ConfigValue, Mapping, ValueType};
