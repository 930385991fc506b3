//! Item texture atlas index.

use addon_model::Item;
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{ExportResult, PackagingError};

/// Atlas every item texture is registered in.
pub const ITEM_ATLAS: &str = "atlas.items";

/// `textures/item_texture.json` in the resource pack.
///
/// Only paths are written. The image files themselves are supplied
/// separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTextureDoc {
    pub resource_pack_name: String,
    pub texture_name: &'static str,
    /// Item local name -> texture entry.
    pub texture_data: BTreeMap<String, TextureEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureEntry {
    pub textures: String,
}

impl ItemTextureDoc {
    /// Index every item's texture path. Returns `None` when there are no items.
    ///
    /// Two items sharing a local name would share one texture entry, so that
    /// fails with [`PackagingError::DuplicatePath`].
    pub fn from_items(pack_name: &str, items: &[Item]) -> ExportResult<Option<Self>> {
        if items.is_empty() {
            return Ok(None);
        }

        let mut texture_data = BTreeMap::new();
        for item in items {
            let name = item.local_name();
            match texture_data.entry(name.to_string()) {
                Entry::Occupied(_) => {
                    return Err(PackagingError::DuplicatePath(item_texture_path(name)).into());
                }
                Entry::Vacant(slot) => {
                    slot.insert(TextureEntry {
                        textures: item_texture_path(name),
                    });
                }
            }
        }

        Ok(Some(Self {
            resource_pack_name: pack_name.to_string(),
            texture_name: ITEM_ATLAS,
            texture_data,
        }))
    }
}

/// Texture path of the item with the given local name.
pub fn item_texture_path(local_name: &str) -> String {
    format!("textures/items/{local_name}")
}
