//! # Addon Model
//!
//! The content records an add-on pack is built from: custom creatures, custom
//! items with their crafting grids, and the pack manifest configuration.
//! This crate only describes content. Turning it into pack documents is the
//! job of `addon_packager`.

pub mod content;
pub mod error;
pub mod kinds;
pub mod project;
pub mod templates;

pub use content::*;
pub use error::*;
pub use kinds::*;
pub use project::*;
