use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by template helpers and the rendering host
///
/// A missing argument is never an error: every helper has a fallback branch
/// for it. What remains are template-authoring mistakes, reported with the
/// helper name and the offending input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{helper}: invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        helper: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{helper}: expected a string argument, got {value}")]
    TypeMismatch { helper: String, value: String },

    #[error("Helper '{0}' not found")]
    HelperNotFound(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_pattern(
        helper: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPattern {
            helper: helper.into(),
            pattern: pattern.into(),
            source,
        }
    }

    pub fn type_mismatch(helper: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::TypeMismatch {
            helper: helper.into(),
            value: value.to_string(),
        }
    }

    pub fn helper_not_found(name: impl Into<String>) -> Self {
        Self::HelperNotFound(name.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Name of the helper that raised this error, if any
    pub fn helper(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { helper, .. } | Self::TypeMismatch { helper, .. } => {
                Some(helper)
            }
            Self::HelperNotFound(name) => Some(name),
            _ => None,
        }
    }
}
