//! Zip serialization of a laid-out package.

use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::result::ZipError;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::Package;
use crate::error::{ExportResult, PackagingError};

/// Extension of add-on archives.
pub const ARCHIVE_EXTENSION: &str = "mcaddon";

/// An in-memory `.mcaddon` archive (a standard zip container).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    file_name: String,
    bytes: Vec<u8>,
}

impl Archive {
    /// Zip every directory and document of the package.
    ///
    /// Entries carry a fixed timestamp, so equal packages give equal bytes.
    pub fn from_package(package: &Package) -> ExportResult<Self> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for dir in package.directories() {
            writer
                .add_directory(dir.as_str(), entry_options())
                .map_err(PackagingError::from)?;
        }

        for document in package.documents() {
            writer
                .start_file(document.path.as_str(), entry_options())
                .map_err(PackagingError::from)?;
            writer.write_all(&document.content).map_err(archive_write)?;
        }

        let bytes = writer.finish().map_err(PackagingError::from)?.into_inner();

        Ok(Self {
            file_name: format!("{}.{ARCHIVE_EXTENSION}", package.slug()),
            bytes,
        })
    }

    /// Suggested file name, `<slug>.mcaddon`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Raw archive bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the archive in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the archive holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Save the archive into `dir` under its suggested file name.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> ExportResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "archive saved");
        Ok(path)
    }
}

/// Entry write failure, reported as an archive error.
fn archive_write(err: io::Error) -> PackagingError {
    PackagingError::Archive(ZipError::Io(err))
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}
