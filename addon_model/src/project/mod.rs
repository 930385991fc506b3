//! Project state: the manifest configuration plus the ordered content collections.

mod config;

pub use config::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::{ContentId, Entity, Item};
use crate::error::{ModelError, ModelResult};

/// Everything one export is built from.
///
/// Records are kept in insertion order, which is also the order their
/// documents appear in the exported archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub entities: Vec<Entity>,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl Project {
    /// Create an empty project for the given manifest settings.
    pub fn new(manifest: ManifestConfig) -> Self {
        Self {
            manifest,
            entities: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Parse a project from TOML text.
    pub fn from_toml_str(text: &str) -> ModelResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Render the project as TOML text.
    pub fn to_toml_string(&self) -> ModelResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a project file from disk.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Write the project file to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> ModelResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert a creature, replacing the record with the same ID in place.
    pub fn upsert_entity(&mut self, entity: Entity) -> ContentId {
        let id = entity.id;
        match self.entities.iter_mut().find(|e| e.id == id) {
            Some(existing) => *existing = entity,
            None => self.entities.push(entity),
        }
        id
    }

    /// Insert an item, replacing the record with the same ID in place.
    pub fn upsert_item(&mut self, item: Item) -> ContentId {
        let id = item.id;
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        id
    }

    /// Remove a creature by ID.
    pub fn remove_entity(&mut self, id: ContentId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Remove an item by ID.
    pub fn remove_item(&mut self, id: ContentId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Get a creature by ID.
    pub fn entity(&self, id: ContentId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get an item by ID.
    pub fn item(&self, id: ContentId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Owned copy to hand to an export, independent of later edits.
    pub fn snapshot(&self) -> Project {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{AddonType, Biome, EntityBehavior, ItemCategory};

    #[test]
    fn test_upsert_keeps_order() {
        let mut project = Project::default();
        let first = project.upsert_item(Item::new("a:first"));
        project.upsert_item(Item::new("a:second"));

        let mut edited = project.item(first).unwrap().clone();
        edited.damage = 7;
        project.upsert_item(edited);

        assert_eq!(project.items.len(), 2);
        assert_eq!(project.items[0].identifier, "a:first");
        assert_eq!(project.items[0].damage, 7);
        assert_eq!(project.items[1].identifier, "a:second");
    }

    #[test]
    fn test_remove_entity() {
        let mut project = Project::default();
        let id = project.upsert_entity(Entity::new("a:golem"));

        assert!(project.remove_entity(id).is_some());
        assert!(project.entity(id).is_none());
        assert!(project.remove_entity(id).is_none());
    }

    #[test]
    fn test_remove_item() {
        let mut project = Project::default();
        let kept = project.upsert_item(Item::new("a:first"));
        let id = project.upsert_item(Item::new("a:second"));

        let removed = project.remove_item(id).unwrap();
        assert_eq!(removed.identifier, "a:second");
        assert!(project.item(id).is_none());
        assert!(project.remove_item(id).is_none());
        assert!(project.item(kept).is_some());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut project = Project::default();
        project.upsert_entity(Entity::new("a:golem"));

        let snapshot = project.snapshot();
        project.entities.clear();

        assert_eq!(snapshot.entities.len(), 1);
    }

    #[test]
    fn test_parse_project_file() {
        let text = r#"
[manifest]
pack_name = "Shadow Lord Boss Pack"
pack_version = "1.2.3"
author = "Steve"
addon_type = "behavior"

[[entities]]
identifier = "my_addon:shadow_lord"
health = 500
attack_damage = 20
movement_speed = 0.35
spawn_biomes = ["nether", "end"]
behavior = "hostile"

[[items]]
identifier = "my_addon:super_sword"
category = "weapons"
max_stack_size = 1
damage = 15

[[items.crafting_recipe]]
slot = 1
item = "minecraft:diamond"

[[items.crafting_recipe]]
slot = 7
item = "minecraft:stick"
"#;

        let project = Project::from_toml_str(text).unwrap();

        assert_eq!(project.manifest.pack_name, "Shadow Lord Boss Pack");
        assert_eq!(project.manifest.addon_type, AddonType::Behavior);
        assert_eq!(project.manifest.min_engine_version, "1.20.0");

        let boss = &project.entities[0];
        assert_eq!(boss.behavior, EntityBehavior::Hostile);
        assert!(boss.spawn_biomes.contains(&Biome::Nether));

        let sword = &project.items[0];
        assert_eq!(sword.category, ItemCategory::Weapons);
        assert_eq!(sword.crafting_recipe.len(), 2);
        assert_eq!(sword.crafting_recipe[1].slot, 7);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut project = Project::new(ManifestConfig::new("Round Trip"));
        project.upsert_entity(Entity::new("a:golem").with_biomes([Biome::Plains]));
        project.upsert_item(
            Item::new("a:sword")
                .with_ingredient(1, "minecraft:diamond")
                .with_ingredient(7, "minecraft:stick"),
        );

        let text = project.to_toml_string().unwrap();
        let parsed = Project::from_toml_str(&text).unwrap();

        assert_eq!(parsed, project);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.toml");

        let mut project = Project::new(ManifestConfig::new("Disk Pack"));
        project.upsert_item(Item::new("a:gem"));
        project.save(&path).unwrap();

        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_missing_file() {
        let err = Project::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
