//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed site data.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("configuration is not a mapping")]
    NotAMapping,

    #[error("invalid navigation entry at {location}: {message}")]
    InvalidNavEntry { location: String, message: String },

    #[error("uses the deprecated 'pages' key; rename it to 'nav'")]
    LegacyNavigation,

    #[error("'{key}' must be a {expected}")]
    InvalidField { key: String, expected: String },
}

impl DomainError {
    pub(crate) fn nav(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNavEntry {
            location: location.into(),
            message: message.into(),
        }
    }
}
