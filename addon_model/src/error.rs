//! Errors raised while reading content records and project files.

use std::path::PathBuf;

/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced by the content model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A dotted version string did not parse into three non-negative integers.
    #[error("invalid {field} \"{value}\": {reason}")]
    InvalidVersion {
        /// Which configuration field held the version.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A project file could not be parsed.
    #[error("failed to parse project file: {0}")]
    ProjectParse(#[from] toml::de::Error),

    /// A project could not be rendered as TOML.
    #[error("failed to write project file: {0}")]
    ProjectWrite(#[from] toml::ser::Error),

    /// Reading or writing a project file failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
