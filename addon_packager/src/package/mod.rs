//! Package layout: places documents under the behavior and resource roots.
//!
//! Each pack kind gets its own root directory named after the pack slug
//! (`<slug>_BP`, `<slug>_RP`). Only the kinds the add-on type asks for get a
//! root, and every root must end up holding a manifest.

mod archive;

pub use archive::*;

use addon_model::AddonType;
use std::collections::HashSet;
use tracing::debug;

use crate::documents::Document;
use crate::error::{ExportResult, PackagingError};

/// File name of a pack's manifest inside its root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// The two pack kinds an add-on is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackKind {
    /// Server-side content.
    Behavior,
    /// Client-side assets.
    Resources,
}

impl PackKind {
    /// Suffix appended to the slug to name the root.
    pub fn suffix(&self) -> &'static str {
        match self {
            PackKind::Behavior => "_BP",
            PackKind::Resources => "_RP",
        }
    }

    /// Root directory name for the given slug.
    pub fn root(&self, slug: &str) -> String {
        format!("{slug}{}", self.suffix())
    }

    /// Whether an add-on of this type contains the pack.
    pub fn is_part_of(&self, addon_type: AddonType) -> bool {
        match self {
            PackKind::Behavior => addon_type.includes_behavior(),
            PackKind::Resources => addon_type.includes_resources(),
        }
    }

    /// Pack kinds an add-on type produces, behavior first.
    pub fn for_addon(addon_type: AddonType) -> Vec<PackKind> {
        [PackKind::Behavior, PackKind::Resources]
            .into_iter()
            .filter(|kind| kind.is_part_of(addon_type))
            .collect()
    }
}

/// A document together with where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDocument {
    pub pack: PackKind,
    /// Path relative to the pack root, e.g. `items/sword.json`.
    pub path: String,
    pub document: Document,
}

impl PlacedDocument {
    /// Place `document` at `path` inside `pack`.
    pub fn new(pack: PackKind, path: impl Into<String>, document: Document) -> Self {
        Self {
            pack,
            path: path.into(),
            document,
        }
    }
}

/// A serialized document at its full archive path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedDocument {
    pub path: String,
    pub content: Vec<u8>,
}

/// The laid-out add-on, ready to be archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    slug: String,
    roots: Vec<String>,
    directories: Vec<String>,
    documents: Vec<PackagedDocument>,
}

impl Package {
    /// Slug the roots are named after.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Root directories, behavior first.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Empty directories to create alongside the documents.
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// Documents in placement order.
    pub fn documents(&self) -> &[PackagedDocument] {
        &self.documents
    }

    /// Look up a document by its full path.
    pub fn get(&self, path: &str) -> Option<&PackagedDocument> {
        self.documents.iter().find(|d| d.path == path)
    }

    /// All document paths in placement order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.path.as_str())
    }
}

/// Collects documents into pack roots and checks the result.
#[derive(Debug)]
pub struct PackageAssembler {
    slug: String,
    addon_type: AddonType,
    seen: HashSet<String>,
    directories: Vec<String>,
    documents: Vec<PackagedDocument>,
}

impl PackageAssembler {
    /// Start laying out an add-on whose roots are named after `slug`.
    pub fn new(slug: impl Into<String>, addon_type: AddonType) -> Self {
        Self {
            slug: slug.into(),
            addon_type,
            seen: HashSet::new(),
            directories: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Lay out a full set of documents in one go.
    pub fn assemble(
        slug: impl Into<String>,
        addon_type: AddonType,
        documents: impl IntoIterator<Item = PlacedDocument>,
    ) -> ExportResult<Package> {
        let mut assembler = Self::new(slug, addon_type);
        for placed in documents {
            assembler.add(placed)?;
        }
        assembler.finish()
    }

    /// Serialize a document into its pack root.
    pub fn add(&mut self, placed: PlacedDocument) -> ExportResult<()> {
        let path = self.full_path(placed.pack, &placed.path)?;
        if !self.seen.insert(path.clone()) {
            return Err(PackagingError::DuplicatePath(path).into());
        }

        let content = placed.document.to_bytes()?;
        debug!(path = %path, kind = placed.document.kind(), bytes = content.len(), "placed document");

        self.documents.push(PackagedDocument { path, content });
        Ok(())
    }

    /// Reserve an empty directory inside a pack root.
    pub fn add_directory(&mut self, pack: PackKind, path: &str) -> ExportResult<()> {
        let path = self.full_path(pack, path.trim_end_matches('/'))?;
        if !self.seen.insert(format!("{path}/")) {
            return Err(PackagingError::DuplicatePath(path).into());
        }
        self.directories.push(path);
        Ok(())
    }

    /// Check every requested root has its manifest and hand out the package.
    pub fn finish(self) -> ExportResult<Package> {
        let roots: Vec<String> = PackKind::for_addon(self.addon_type)
            .into_iter()
            .map(|kind| kind.root(&self.slug))
            .collect();

        for root in &roots {
            if !self.seen.contains(&format!("{root}/{MANIFEST_FILE}")) {
                return Err(PackagingError::MissingRoot(root.clone()).into());
            }
        }

        Ok(Package {
            slug: self.slug,
            roots,
            directories: self.directories,
            documents: self.documents,
        })
    }

    fn full_path(&self, pack: PackKind, relative: &str) -> Result<String, PackagingError> {
        let root = pack.root(&self.slug);
        if !pack.is_part_of(self.addon_type) {
            return Err(PackagingError::UnexpectedRoot(root));
        }

        let safe = !relative.is_empty()
            && !relative.starts_with('/')
            && !relative.contains('\\')
            && relative
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !safe {
            return Err(PackagingError::InvalidPath(relative.to_string()));
        }

        Ok(format!("{root}/{relative}"))
    }
}
