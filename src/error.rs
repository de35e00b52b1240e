//! Error types for fynesse.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Result type alias for workflow stage operations.
pub type StageResult<T> = std::result::Result<T, StageError>;

/// Errors that can occur while loading or reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// None of the candidate files existed, or none contributed a key.
    #[error("{}", missing_message(.checked))]
    Missing {
        /// Every candidate location, highest priority first
        checked: Vec<String>,
    },

    /// A candidate file exists but is not valid YAML.
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        /// The offending file
        path: PathBuf,
        /// Underlying parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// A candidate file parsed, but its top level is not a mapping.
    #[error("Configuration file {} must contain a mapping at the top level", .path.display())]
    NotAMapping {
        /// The offending file
        path: PathBuf,
    },

    /// A source produced a top-level key that is not a string.
    #[error("Configuration source {origin} has a non-string top-level key: {key}")]
    InvalidKey {
        /// Name of the offending source
        origin: String,
        /// Debug rendering of the key
        key: String,
    },

    /// A candidate file exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// The offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Failed to deserialize a value into the requested type.
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(String),

    /// Failed to load configuration from a custom source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),
}

fn missing_message(checked: &[String]) -> String {
    if checked.is_empty() {
        return "No configuration found: no sources were checked.".to_string();
    }
    format!(
        "No configuration file found at either {}.",
        checked.join(" or ")
    )
}

/// The workflow stage an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Getting the data in.
    Access,
    /// Understanding the data.
    Assess,
    /// Answering the question.
    Address,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Assess => write!(f, "assess"),
            Self::Address => write!(f, "address"),
        }
    }
}

/// Errors returned by workflow stages.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The operation has no implementation yet.
    #[error("{stage}::{operation} is not implemented")]
    NotImplemented {
        /// Stage the operation belongs to
        stage: Stage,
        /// Operation name
        operation: &'static str,
    },

    /// A stage needed configuration it could not read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A stage received data it cannot work with.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StageError {
    /// Create a not-implemented error for `stage::operation`.
    pub fn not_implemented(stage: Stage, operation: &'static str) -> Self {
        Self::NotImplemented { stage, operation }
    }

    /// Returns `true` if this is the placeholder signal rather than a real failure.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}
