//! # Addon Packager
//!
//! Builds an add-on archive from content records. Given a manifest
//! configuration, creatures and items, it synthesizes every pack document
//! and lays them out under a behavior root and a resource root.
//!
//! ## Core Components
//!
//! - **ids**: unique identifiers for manifest headers and modules
//! - **documents**: typed pack documents (manifests, entity and item
//!   behaviors, client entities, shaped recipes, the item texture index)
//! - **package**: path layout, archive serialization and delivery
//! - **export**: the `export_package` entry point and the manifest preview
//!
//! An export is a pure function of its inputs apart from identifier
//! generation. Nothing is cached between calls.

pub mod documents;
pub mod error;
pub mod export;
pub mod ids;
pub mod package;
mod validate;

pub use documents::*;
pub use error::*;
pub use export::*;
pub use ids::*;
pub use package::*;
