//! Render settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

/// Default limit on nested context frames, root included.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options that affect how a template is rendered.
///
/// Settings can be built in code or read from TOML:
///
/// ```toml
/// ignore_case = true
/// max_depth = 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Match keys case-insensitively.
    pub ignore_case: bool,
    /// Maximum number of context frames, root included.
    pub max_depth: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ignore_case: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse settings from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> TemplateResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can render anything at all.
    ///
    /// The root occupies one frame, so `max_depth` must be at least 1.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.max_depth == 0 {
            return Err(TemplateError::InvalidSetting {
                name: "max_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> TemplateResult<Self> {
        debug!("Loading render settings from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
