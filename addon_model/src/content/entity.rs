//! Custom creature definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{local_name, non_empty, ContentId};
use crate::kinds::{Biome, EntityBehavior};

/// Identifier used when a creature has none.
pub const DEFAULT_ENTITY_IDENTIFIER: &str = "custom_entity";

/// Display name used when a creature has none.
pub const DEFAULT_ENTITY_NAME: &str = "Custom Entity";

/// A user-authored creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: ContentId,
    /// Namespaced identifier, e.g. `my_addon:friendly_golem`.
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub display_name: String,
    pub health: u32,
    pub attack_damage: u32,
    pub movement_speed: f64,
    #[serde(default)]
    pub spawn_biomes: BTreeSet<Biome>,
    #[serde(default)]
    pub behavior: EntityBehavior,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Create a creature with the builder defaults.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            id: ContentId::new(),
            identifier: identifier.into(),
            display_name: String::new(),
            health: 20,
            attack_damage: 4,
            movement_speed: 0.25,
            spawn_biomes: BTreeSet::new(),
            behavior: EntityBehavior::Passive,
            description: String::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set health.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    /// Set attack damage.
    pub fn with_attack_damage(mut self, damage: u32) -> Self {
        self.attack_damage = damage;
        self
    }

    /// Set movement speed.
    pub fn with_movement_speed(mut self, speed: f64) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Set the behavior.
    pub fn with_behavior(mut self, behavior: EntityBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Add spawn biomes.
    pub fn with_biomes(mut self, biomes: impl IntoIterator<Item = Biome>) -> Self {
        self.spawn_biomes.extend(biomes);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Identifier with the empty-field default applied.
    pub fn effective_identifier(&self) -> &str {
        non_empty(&self.identifier, DEFAULT_ENTITY_IDENTIFIER)
    }

    /// Display name with the empty-field default applied.
    pub fn effective_display_name(&self) -> &str {
        non_empty(&self.display_name, DEFAULT_ENTITY_NAME)
    }

    /// Local part of the identifier, used for file and texture names.
    pub fn local_name(&self) -> &str {
        local_name(self.effective_identifier(), DEFAULT_ENTITY_IDENTIFIER)
    }

    /// Check if the creature attacks at all.
    pub fn is_aggressive(&self) -> bool {
        self.behavior == EntityBehavior::Hostile || self.attack_damage > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity() {
        let entity = Entity::new("my_addon:golem");
        assert_eq!(entity.health, 20);
        assert_eq!(entity.attack_damage, 4);
        assert_eq!(entity.behavior, EntityBehavior::Passive);
        assert_eq!(entity.local_name(), "golem");
    }

    #[test]
    fn test_empty_fields_use_defaults() {
        let entity = Entity::new("");
        assert_eq!(entity.effective_identifier(), "custom_entity");
        assert_eq!(entity.effective_display_name(), "Custom Entity");
        assert_eq!(entity.local_name(), "custom_entity");
    }

    #[test]
    fn test_aggression() {
        let calm = Entity::new("a:calm").with_attack_damage(0);
        assert!(!calm.is_aggressive());

        let hostile = calm.clone().with_behavior(EntityBehavior::Hostile);
        assert!(hostile.is_aggressive());

        let biter = calm.with_attack_damage(3);
        assert!(biter.is_aggressive());
    }
}
