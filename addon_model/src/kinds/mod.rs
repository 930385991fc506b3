//! Enumerations shared by content records: pack kinds, biomes, behaviors, categories.

use serde::{Deserialize, Serialize};

/// Which packs an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddonType {
    /// Behavior pack only.
    Behavior,
    /// Resource pack only.
    Resource,
    /// Both packs, with the resource pack depending on the behavior pack.
    #[default]
    Complete,
}

impl AddonType {
    /// Whether the export contains a behavior pack.
    pub fn includes_behavior(&self) -> bool {
        matches!(self, AddonType::Behavior | AddonType::Complete)
    }

    /// Whether the export contains a resource pack.
    pub fn includes_resources(&self) -> bool {
        matches!(self, AddonType::Resource | AddonType::Complete)
    }

    /// Lowercase name as written in project files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonType::Behavior => "behavior",
            AddonType::Resource => "resource",
            AddonType::Complete => "complete",
        }
    }
}

impl std::fmt::Display for AddonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biomes a creature may spawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Plains,
    Desert,
    Forest,
    Taiga,
    Swamp,
    Jungle,
    Mountains,
    Ocean,
    Nether,
    End,
}

/// How a creature treats the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityBehavior {
    #[default]
    Passive,
    Neutral,
    /// Attacks players on sight.
    Hostile,
    Tameable,
    Rideable,
}

/// Creative inventory category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Equipment,
    #[default]
    Items,
    Construction,
    Nature,
    Tools,
    Weapons,
}

impl ItemCategory {
    /// Category name as the pack format spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Equipment => "equipment",
            ItemCategory::Items => "items",
            ItemCategory::Construction => "construction",
            ItemCategory::Nature => "nature",
            ItemCategory::Tools => "tools",
            ItemCategory::Weapons => "weapons",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addon_type_inclusion() {
        assert!(AddonType::Behavior.includes_behavior());
        assert!(!AddonType::Behavior.includes_resources());

        assert!(!AddonType::Resource.includes_behavior());
        assert!(AddonType::Resource.includes_resources());

        assert!(AddonType::Complete.includes_behavior());
        assert!(AddonType::Complete.includes_resources());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ItemCategory::Weapons.as_str(), "weapons");
        assert_eq!(ItemCategory::default().as_str(), "items");
    }
}
