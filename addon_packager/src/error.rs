//! Errors raised during an export.

use addon_model::ModelError;

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;

/// Everything that can stop an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A manifest version string is malformed.
    #[error("format error: {0}")]
    Format(#[from] ModelError),

    /// A content record holds a value the pack format cannot express.
    #[error("validation error in {record}: {field} {reason}")]
    Validation {
        /// The offending record, e.g. `item my_addon:sword`.
        record: String,
        field: &'static str,
        reason: String,
    },

    /// The archive layout could not be produced.
    #[error("packaging error: {0}")]
    Packaging(#[from] PackagingError),

    /// A document failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the archive to disk failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the package layout or archive writer.
#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    /// Two documents resolved to the same archive path.
    #[error("duplicate archive path {0}")]
    DuplicatePath(String),

    /// A requested pack root ended up without its manifest.
    #[error("pack root {0} is missing its manifest")]
    MissingRoot(String),

    /// A document targets a pack root the add-on type excludes.
    #[error("pack root {0} is not part of this export")]
    UnexpectedRoot(String),

    /// A document path is not a safe relative archive path.
    #[error("invalid archive path {0}")]
    InvalidPath(String),

    /// The zip writer failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
