//! Loading data documents from text or files.

use std::any::Any;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;
use whisker_core::Value;

use crate::error::{FormatError, FormatResult};
use crate::{json, yaml};

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Pick the format from a file's extension.
    pub fn from_path(path: &Path) -> FormatResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| FormatError::UnsupportedExtension(path.to_path_buf()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed data tree usable as a root context.
#[derive(Debug, Clone, PartialEq)]
pub enum DataDocument {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
}

impl DataDocument {
    /// Parse `text` as `format`.
    ///
    /// YAML merge keys (`<<`) are applied.
    pub fn from_str(text: &str, format: DataFormat) -> FormatResult<Self> {
        match format {
            DataFormat::Json => Ok(Self::Json(serde_json::from_str(text)?)),
            DataFormat::Yaml => {
                let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
                value.apply_merge()?;
                Ok(Self::Yaml(value))
            }
        }
    }

    /// Read and parse a data file, choosing the format by extension.
    pub fn load(path: &Path) -> FormatResult<Self> {
        let format = DataFormat::from_path(path)?;
        debug!("Loading {} data from {:?}", format, path);
        let content = fs::read_to_string(path)?;
        Self::from_str(&content, format)
    }

    pub fn format(&self) -> DataFormat {
        match self {
            Self::Json(_) => DataFormat::Json,
            Self::Yaml(_) => DataFormat::Yaml,
        }
    }

    /// The underlying node, for use as the root of a context stack.
    pub fn as_node(&self) -> &dyn Any {
        match self {
            Self::Json(value) => value as &dyn Any,
            Self::Yaml(value) => value as &dyn Any,
        }
    }

    /// Classify the whole document into the value model.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Json(value) => json::classify(value),
            Self::Yaml(value) => yaml::classify(value),
        }
    }
}
