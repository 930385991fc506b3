//! Typed pack documents.
//!
//! Each document kind is a plain serde struct mirroring the JSON the pack
//! format expects. [`Document`] closes the set so the package layer can
//! place and serialize any of them the same way.

mod entity;
mod item;
mod manifest;
mod recipe;
mod texture;

pub use entity::*;
pub use item::*;
pub use manifest::*;
pub use recipe::*;
pub use texture::*;

use serde::Serialize;

use crate::error::ExportResult;

/// Any document that can appear in a pack.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Manifest(ManifestDoc),
    EntityBehavior(EntityBehaviorDoc),
    ClientEntity(ClientEntityDoc),
    ItemBehavior(ItemBehaviorDoc),
    Recipe(RecipeDoc),
    ItemTextures(ItemTextureDoc),
}

impl Document {
    /// Pretty-printed JSON bytes.
    pub fn to_bytes(&self) -> ExportResult<Vec<u8>> {
        match self {
            Document::Manifest(doc) => pretty(doc),
            Document::EntityBehavior(doc) => pretty(doc),
            Document::ClientEntity(doc) => pretty(doc),
            Document::ItemBehavior(doc) => pretty(doc),
            Document::Recipe(doc) => pretty(doc),
            Document::ItemTextures(doc) => pretty(doc),
        }
    }

    /// Short name of the document kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Manifest(_) => "manifest",
            Document::EntityBehavior(_) => "entity_behavior",
            Document::ClientEntity(_) => "client_entity",
            Document::ItemBehavior(_) => "item_behavior",
            Document::Recipe(_) => "recipe",
            Document::ItemTextures(_) => "item_textures",
        }
    }
}

fn pretty<T: Serialize>(doc: &T) -> ExportResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use addon_model::Item;

    #[test]
    fn test_bytes_are_pretty_json() {
        let doc = Document::ItemBehavior(ItemBehaviorDoc::from_item(&Item::new("a:gem")));
        let bytes = doc.to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("{\n  \"format_version\""));
        assert_eq!(doc.kind(), "item_behavior");
    }
}
