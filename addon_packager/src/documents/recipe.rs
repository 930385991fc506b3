//! Shaped crafting recipes.
//!
//! A recipe is stored as up to nine slot placements on a 3x3 grid. The pack
//! format wants three row strings plus a key table instead:
//! 1. Start from three rows of blanks (a single space per cell)
//! 2. Walk the placements in the order given
//! 3. The first time an ingredient appears, give it the next free symbol
//!    from `A`..`I`; later placements of the same ingredient reuse it
//! 4. Write the symbol into the cell at `(slot / 3, slot % 3)`
//!
//! The key table therefore has exactly one entry per distinct ingredient.
//! Nine slots can hold at most nine distinct ingredients, so the alphabet
//! never runs out for a valid grid.

use addon_model::{CraftingIngredient, Item, CRAFTING_SLOTS};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{ExportError, ExportResult};

/// Format version of recipe documents.
pub const RECIPE_FORMAT_VERSION: &str = "1.20.0";

/// Key symbols in allocation order.
pub const PATTERN_SYMBOLS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// An empty grid cell.
pub const BLANK: char = ' ';

/// Why a crafting grid cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("slot {0} is outside the 3x3 grid")]
    SlotOutOfRange(u8),

    #[error("more than {} distinct ingredients", PATTERN_SYMBOLS.len())]
    AlphabetExhausted,
}

/// A grid encoded as pattern rows plus a symbol key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedPattern {
    pub rows: [String; 3],
    /// Symbol -> ingredient identifier.
    pub key: BTreeMap<char, String>,
}

impl ShapedPattern {
    /// Encode slot placements into pattern rows and a minimal key.
    pub fn encode(recipe: &[CraftingIngredient]) -> Result<Self, PatternError> {
        let mut grid = [[BLANK; 3]; 3];
        let mut assigned: HashMap<&str, char> = HashMap::new();
        let mut key = BTreeMap::new();

        for ingredient in recipe {
            if ingredient.slot >= CRAFTING_SLOTS {
                return Err(PatternError::SlotOutOfRange(ingredient.slot));
            }

            let symbol = match assigned.get(ingredient.item.as_str()) {
                Some(symbol) => *symbol,
                None => {
                    let symbol = *PATTERN_SYMBOLS
                        .get(assigned.len())
                        .ok_or(PatternError::AlphabetExhausted)?;
                    assigned.insert(ingredient.item.as_str(), symbol);
                    key.insert(symbol, ingredient.item.clone());
                    symbol
                }
            };

            grid[ingredient.row()][ingredient.column()] = symbol;
        }

        Ok(Self {
            rows: grid.map(|row| row.iter().collect()),
            key,
        })
    }
}

/// `recipes/<name>_recipe.json` in the behavior pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDoc {
    pub format_version: &'static str,
    #[serde(rename = "minecraft:recipe_shaped")]
    pub recipe: ShapedRecipe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedRecipe {
    pub description: RecipeDescription,
    pub tags: Vec<String>,
    pub pattern: [String; 3],
    pub key: BTreeMap<String, RecipeItem>,
    pub result: RecipeResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDescription {
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeItem {
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResult {
    pub item: String,
    pub count: u32,
}

impl RecipeDoc {
    /// Build the crafting-table recipe for an item, if it has one.
    pub fn from_item(item: &Item) -> ExportResult<Option<Self>> {
        if !item.has_recipe() {
            return Ok(None);
        }

        let identifier = item.effective_identifier();
        let pattern =
            ShapedPattern::encode(&item.crafting_recipe).map_err(|e| ExportError::Validation {
                record: format!("item {identifier}"),
                field: "crafting_recipe",
                reason: e.to_string(),
            })?;

        Ok(Some(Self {
            format_version: RECIPE_FORMAT_VERSION,
            recipe: ShapedRecipe {
                description: RecipeDescription {
                    identifier: format!("{identifier}_recipe"),
                },
                tags: vec!["crafting_table".to_string()],
                pattern: pattern.rows,
                key: pattern
                    .key
                    .into_iter()
                    .map(|(symbol, item)| (symbol.to_string(), RecipeItem { item }))
                    .collect(),
                result: RecipeResult {
                    item: identifier.to_string(),
                    count: 1,
                },
            },
        }))
    }
}
