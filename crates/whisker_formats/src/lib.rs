//! # whisker_formats
//!
//! Data format support for whisker.
//!
//! Each format registers one getter per node type it defines, so that
//! `serde_json` and `serde_yaml` trees can be used directly as render
//! contexts:
//!
//! - [`JsonFormat`]: `serde_json::Value`, `serde_json::Map`, [`JsonProperty`]
//! - [`YamlFormat`]: `serde_yaml::Value`, `serde_yaml::Mapping`
//!
//! Strings holding ISO-8601 date-times classify as
//! [`Value::DateTime`](whisker_core::Value::DateTime) in UTC.
//!
//! ## Example
//!
//! ```rust
//! use whisker_core::{ContextStack, Lookup, Path, Value};
//! use whisker_formats::{standard_registry, DataDocument, DataFormat};
//!
//! let doc = DataDocument::from_str(r#"{ "foo": { "bar": "x" } }"#, DataFormat::Json).unwrap();
//! let registry = standard_registry();
//! let stack = ContextStack::with_root(doc.as_node());
//!
//! let found = stack.resolve(&Path::parse("foo.bar").unwrap(), &registry, false);
//! assert_eq!(found, Lookup::Found(Value::from("x")));
//! ```

pub mod document;
pub mod error;
pub mod json;
pub mod temporal;
pub mod yaml;

pub use document::{DataDocument, DataFormat};
pub use error::{FormatError, FormatResult};
pub use json::{JsonFormat, JsonProperty};
pub use yaml::YamlFormat;

use whisker_core::GetterRegistry;

/// A registry with the value model, JSON and YAML support installed.
pub fn standard_registry() -> GetterRegistry {
    GetterRegistry::new()
        .with_format(JsonFormat)
        .with_format(YamlFormat)
}
