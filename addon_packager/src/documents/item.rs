//! Item behavior documents.

use addon_model::Item;
use serde::Serialize;

/// Format version of item behavior documents.
pub const ITEM_FORMAT_VERSION: &str = "1.20.0";

/// `items/<name>.json` in the behavior pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBehaviorDoc {
    pub format_version: &'static str,
    #[serde(rename = "minecraft:item")]
    pub item: ItemDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDefinition {
    pub description: ItemDescription,
    pub components: ItemComponents,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDescription {
    pub identifier: String,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemComponents {
    #[serde(rename = "minecraft:max_stack_size")]
    pub max_stack_size: u32,
    #[serde(rename = "minecraft:damage", skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(rename = "minecraft:durability", skip_serializing_if = "Option::is_none")]
    pub durability: Option<DurabilityComponent>,
    #[serde(rename = "minecraft:food", skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodComponent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurabilityComponent {
    pub max_durability: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodComponent {
    pub nutrition: u32,
    pub saturation_modifier: &'static str,
    pub can_always_eat: bool,
}

impl ItemBehaviorDoc {
    /// Map an item to its behavior document.
    ///
    /// Damage, durability and food components only appear when the item
    /// has a non-zero value for them.
    pub fn from_item(item: &Item) -> Self {
        Self {
            format_version: ITEM_FORMAT_VERSION,
            item: ItemDefinition {
                description: ItemDescription {
                    identifier: item.effective_identifier().to_string(),
                    category: item.category.as_str(),
                },
                components: ItemComponents {
                    max_stack_size: item.max_stack_size,
                    damage: (item.damage > 0).then_some(item.damage),
                    durability: (item.durability > 0).then_some(DurabilityComponent {
                        max_durability: item.durability,
                    }),
                    food: item.nutrition().map(|nutrition| FoodComponent {
                        nutrition,
                        saturation_modifier: "normal",
                        can_always_eat: false,
                    }),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addon_model::ItemCategory;
    use serde_json::{json, Value};

    fn to_value(item: &Item) -> Value {
        serde_json::to_value(ItemBehaviorDoc::from_item(item)).unwrap()
    }

    #[test]
    fn test_plain_item() {
        let value = to_value(&Item::new("my_addon:shadow_essence"));

        assert_eq!(
            value,
            json!({
                "format_version": "1.20.0",
                "minecraft:item": {
                    "description": {"identifier": "my_addon:shadow_essence", "category": "items"},
                    "components": {"minecraft:max_stack_size": 64}
                }
            })
        );
    }

    #[test]
    fn test_weapon_components() {
        let sword = Item::new("my_addon:super_sword")
            .with_category(ItemCategory::Weapons)
            .with_max_stack_size(1)
            .with_damage(15)
            .with_durability(2000);
        let components = &to_value(&sword)["minecraft:item"]["components"];

        assert_eq!(components["minecraft:max_stack_size"], json!(1));
        assert_eq!(components["minecraft:damage"], json!(15));
        assert_eq!(components["minecraft:durability"], json!({"max_durability": 2000}));
        assert!(components.get("minecraft:food").is_none());
    }

    #[test]
    fn test_food_without_restoration_emits_no_food_component() {
        let item = Item::new("a:empty_plate").with_food(0);
        let components = &to_value(&item)["minecraft:item"]["components"];
        assert!(components.get("minecraft:food").is_none());
    }

    #[test]
    fn test_food_component() {
        let item = Item::new("a:bread").with_food(5);
        let components = &to_value(&item)["minecraft:item"]["components"];

        assert_eq!(
            components["minecraft:food"],
            json!({"nutrition": 5, "saturation_modifier": "normal", "can_always_eat": false})
        );
    }

    #[test]
    fn test_unbreakable_item_has_no_durability() {
        let item = Item::new("a:relic").with_damage(3);
        let components = &to_value(&item)["minecraft:item"]["components"];
        assert!(components.get("minecraft:durability").is_none());
    }
}
