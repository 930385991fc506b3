//! Pack manifest configuration and version triples.

use serde::{Deserialize, Serialize};

use crate::content::non_empty;
use crate::error::{ModelError, ModelResult};
use crate::kinds::AddonType;

/// Pack name used when none is given.
pub const DEFAULT_PACK_NAME: &str = "My Addon";

/// Author listed when none is given.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A `major.minor.patch` version as the pack format stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionTriple(pub [u32; 3]);

impl VersionTriple {
    /// Parse a dotted triple such as `1.20.0`.
    ///
    /// Exactly three segments are accepted and each must be a non-negative
    /// decimal integer. `field` names the source in the error.
    pub fn parse(field: &'static str, value: &str) -> ModelResult<Self> {
        let invalid = |reason: String| ModelError::InvalidVersion {
            field,
            value: value.to_string(),
            reason,
        };

        let segments: Vec<&str> = value.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(invalid(format!(
                "expected three dot-separated numbers, found {}",
                segments.len()
            )));
        }

        let mut parts = [0u32; 3];
        for (slot, segment) in parts.iter_mut().zip(&segments) {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!("\"{segment}\" is not a non-negative integer")));
            }
            *slot = segment
                .parse()
                .map_err(|_| invalid(format!("\"{segment}\" is out of range")))?;
        }

        Ok(Self(parts))
    }

    /// The three components.
    pub fn parts(&self) -> [u32; 3] {
        self.0
    }
}

impl std::fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [major, minor, patch] = self.0;
        write!(f, "{major}.{minor}.{patch}")
    }
}

/// Settings for the pack manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub pack_name: String,
    pub pack_description: String,
    /// Dotted triple, e.g. `1.0.0`.
    pub pack_version: String,
    /// Dotted triple, e.g. `1.20.0`.
    pub min_engine_version: String,
    pub author: String,
    pub addon_type: AddonType,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            pack_name: DEFAULT_PACK_NAME.to_string(),
            pack_description: String::new(),
            pack_version: "1.0.0".to_string(),
            min_engine_version: "1.20.0".to_string(),
            author: String::new(),
            addon_type: AddonType::Complete,
        }
    }
}

impl ManifestConfig {
    /// Create a configuration for the named pack.
    pub fn new(pack_name: impl Into<String>) -> Self {
        Self {
            pack_name: pack_name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.pack_description = description.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the pack version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.pack_version = version.into();
        self
    }

    /// Set the minimum engine version string.
    pub fn with_min_engine_version(mut self, version: impl Into<String>) -> Self {
        self.min_engine_version = version.into();
        self
    }

    /// Set which packs to produce.
    pub fn with_addon_type(mut self, addon_type: AddonType) -> Self {
        self.addon_type = addon_type;
        self
    }

    /// Pack name with the empty-field default applied.
    pub fn effective_pack_name(&self) -> &str {
        non_empty(&self.pack_name, DEFAULT_PACK_NAME)
    }

    /// Author with the empty-field default applied.
    pub fn effective_author(&self) -> &str {
        non_empty(&self.author, DEFAULT_AUTHOR)
    }

    /// Parsed pack version.
    pub fn parsed_pack_version(&self) -> ModelResult<VersionTriple> {
        VersionTriple::parse("pack_version", &self.pack_version)
    }

    /// Parsed minimum engine version.
    pub fn parsed_min_engine_version(&self) -> ModelResult<VersionTriple> {
        VersionTriple::parse("min_engine_version", &self.min_engine_version)
    }

    /// Filesystem-safe rendering of the pack name.
    pub fn slug(&self) -> String {
        slugify(self.effective_pack_name())
    }
}

/// Lowercase `name`, replacing every character outside `[A-Za-z0-9]` with `_`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
