//! Helper and rendering configuration
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields a working configuration.
//!
//! ```toml
//! type_policy = "lenient"
//! legacy_aliases = false
//! output_marker = "@generated:"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default magic comment marking a template that produces a file
pub const DEFAULT_OUTPUT_MARKER: &str = "@rustf.generated:";

/// How string helpers treat arguments that are neither strings nor missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypePolicy {
    /// Reject with `Error::TypeMismatch`
    #[default]
    Strict,
    /// Stringify numbers and booleans; arrays and objects are still rejected
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    pub type_policy: TypePolicy,
    /// Also register every built-in helper under its `_`-prefixed legacy name
    pub legacy_aliases: bool,
    pub output_marker: String,
    /// HTML-escape `{{ }}` output. Off for source code generation.
    pub escape_html: bool,
    /// Fail on unresolved template variables instead of passing them as missing
    pub strict_mode: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            type_policy: TypePolicy::Strict,
            legacy_aliases: true,
            output_marker: DEFAULT_OUTPUT_MARKER.to_string(),
            escape_html: false,
            strict_mode: false,
        }
    }
}

impl HelperConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HelperConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse helper config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref)?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => {
                Error::config(format!("{} (in '{}')", msg, path_ref.display()))
            }
            other => other,
        })?;

        log::debug!("Loaded helper configuration from: {}", path_ref.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.output_marker.trim().is_empty() {
            return Err(Error::config("output_marker must not be empty"));
        }
        Ok(())
    }
}
