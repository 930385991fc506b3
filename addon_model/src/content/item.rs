//! Custom item definitions and their crafting grids.

use serde::{Deserialize, Serialize};

use super::{local_name, non_empty, ContentId};
use crate::kinds::ItemCategory;

/// Identifier used when an item has none.
pub const DEFAULT_ITEM_IDENTIFIER: &str = "custom_item";

/// Display name used when an item has none.
pub const DEFAULT_ITEM_NAME: &str = "Custom Item";

/// Number of slots in the 3x3 crafting grid.
pub const CRAFTING_SLOTS: u8 = 9;

/// Stack size bounds accepted by the pack format.
pub const MAX_STACK_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=64;

/// Largest damage value an item may carry.
pub const MAX_ITEM_DAMAGE: u32 = 100;

/// Largest nutrition value a food item may restore.
pub const MAX_FOOD_RESTORATION: u32 = 20;

/// One ingredient placed in the crafting grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingIngredient {
    /// Row-major slot index, 0..=8.
    pub slot: u8,
    /// Namespaced ingredient identifier, e.g. `minecraft:stick`.
    pub item: String,
}

impl CraftingIngredient {
    /// Place `item` in `slot`.
    pub fn new(slot: u8, item: impl Into<String>) -> Self {
        Self {
            slot,
            item: item.into(),
        }
    }

    /// Grid row of the slot.
    pub fn row(&self) -> usize {
        usize::from(self.slot / 3)
    }

    /// Grid column of the slot.
    pub fn column(&self) -> usize {
        usize::from(self.slot % 3)
    }
}

/// A user-authored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: ContentId,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub category: ItemCategory,
    pub max_stack_size: u32,
    #[serde(default)]
    pub damage: u32,
    /// 0 means unbreakable.
    #[serde(default)]
    pub durability: u32,
    #[serde(default)]
    pub is_food: bool,
    /// Only meaningful when `is_food` is set.
    #[serde(default)]
    pub food_restoration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_url: Option<String>,
    #[serde(default)]
    pub description: String,
    // Kept last: TOML writes arrays of tables after plain keys.
    #[serde(default)]
    pub crafting_recipe: Vec<CraftingIngredient>,
}

impl Item {
    /// Create an item with the builder defaults.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            id: ContentId::new(),
            identifier: identifier.into(),
            display_name: String::new(),
            category: ItemCategory::Items,
            max_stack_size: 64,
            damage: 0,
            durability: 0,
            is_food: false,
            food_restoration: 0,
            texture_url: None,
            description: String::new(),
            crafting_recipe: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the maximum stack size.
    pub fn with_max_stack_size(mut self, size: u32) -> Self {
        self.max_stack_size = size;
        self
    }

    /// Set the damage.
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Set the durability.
    pub fn with_durability(mut self, durability: u32) -> Self {
        self.durability = durability;
        self
    }

    /// Mark as food restoring `nutrition`.
    pub fn with_food(mut self, nutrition: u32) -> Self {
        self.is_food = true;
        self.food_restoration = nutrition;
        self
    }

    /// Place an ingredient in the crafting grid.
    pub fn with_ingredient(mut self, slot: u8, item: impl Into<String>) -> Self {
        self.crafting_recipe.push(CraftingIngredient::new(slot, item));
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Identifier with the empty-field default applied.
    pub fn effective_identifier(&self) -> &str {
        non_empty(&self.identifier, DEFAULT_ITEM_IDENTIFIER)
    }

    /// Display name with the empty-field default applied.
    pub fn effective_display_name(&self) -> &str {
        non_empty(&self.display_name, DEFAULT_ITEM_NAME)
    }

    /// Local part of the identifier, used for file and texture names.
    pub fn local_name(&self) -> &str {
        local_name(self.effective_identifier(), DEFAULT_ITEM_IDENTIFIER)
    }

    /// Check if the item can be crafted.
    pub fn has_recipe(&self) -> bool {
        !self.crafting_recipe.is_empty()
    }

    /// Nutrition to emit, if any.
    ///
    /// The food flag alone is not enough: a food item restoring nothing
    /// gets no food component.
    pub fn nutrition(&self) -> Option<u32> {
        (self.is_food && self.food_restoration > 0).then_some(self.food_restoration)
    }
}
