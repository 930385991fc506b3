//! Built-in starter projects.

use crate::content::{ContentId, Entity, Item};
use crate::kinds::{Biome, EntityBehavior, ItemCategory};
use crate::project::{ManifestConfig, Project};

/// A ready-made project to start from.
#[derive(Debug, Clone)]
pub struct Template {
    /// Short stable key, e.g. `custom-sword`.
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub pack_name: &'static str,
    pub pack_description: &'static str,
    pub entities: Vec<Entity>,
    pub items: Vec<Item>,
}

impl Template {
    /// Build a fresh project from this template.
    ///
    /// Every record gets a new content ID so two projects made from the
    /// same template never share IDs.
    pub fn to_project(&self) -> Project {
        let manifest = ManifestConfig::new(self.pack_name).with_description(self.pack_description);
        let mut project = Project::new(manifest);

        for entity in &self.entities {
            let mut entity = entity.clone();
            entity.id = ContentId::new();
            project.upsert_entity(entity);
        }
        for item in &self.items {
            let mut item = item.clone();
            item.id = ContentId::new();
            project.upsert_item(item);
        }

        project
    }
}

/// All starter templates, in catalog order.
pub fn all() -> Vec<Template> {
    vec![
        Template {
            id: "custom-sword",
            name: "Custom Sword Pack",
            summary: "A powerful custom sword with special abilities",
            pack_name: "Super Sword Pack",
            pack_description: "Adds a powerful custom sword to your game",
            entities: vec![],
            items: vec![Item::new("my_addon:super_sword")
                .with_display_name("Super Sword")
                .with_category(ItemCategory::Weapons)
                .with_max_stack_size(1)
                .with_damage(15)
                .with_durability(2000)
                .with_ingredient(1, "minecraft:diamond")
                .with_ingredient(4, "minecraft:diamond")
                .with_ingredient(7, "minecraft:stick")
                .with_description("A powerful sword forged from pure diamonds")],
        },
        Template {
            id: "custom-mob",
            name: "Custom Mob Pack",
            summary: "A friendly custom creature that roams the world",
            pack_name: "Friendly Golem Pack",
            pack_description: "Adds a friendly golem creature to your world",
            entities: vec![Entity::new("my_addon:friendly_golem")
                .with_display_name("Friendly Golem")
                .with_health(100)
                .with_attack_damage(8)
                .with_movement_speed(0.2)
                .with_biomes([Biome::Plains, Biome::Forest])
                .with_behavior(EntityBehavior::Passive)
                .with_description("A friendly stone golem that protects villages")],
            items: vec![],
        },
        Template {
            id: "power-armor",
            name: "Power Armor Set",
            summary: "Complete armor set with enhanced protection",
            pack_name: "Power Armor Pack",
            pack_description: "Adds a complete set of power armor to your game",
            entities: vec![],
            items: vec![
                armor_piece(
                    "my_addon:power_helmet",
                    "Power Helmet",
                    500,
                    &[0, 1, 2, 3, 5],
                    "Advanced helmet with enhanced protection",
                ),
                armor_piece(
                    "my_addon:power_chestplate",
                    "Power Chestplate",
                    800,
                    &[0, 2, 3, 4, 5, 6, 7, 8],
                    "Advanced chestplate with maximum protection",
                ),
            ],
        },
        Template {
            id: "magic-food",
            name: "Magic Food Pack",
            summary: "Special food items with unique effects",
            pack_name: "Magic Food Pack",
            pack_description: "Adds magical food items with special abilities",
            entities: vec![],
            items: vec![(0..9)
                .fold(
                    Item::new("my_addon:golden_apple_plus")
                        .with_display_name("Enhanced Golden Apple")
                        .with_max_stack_size(16)
                        .with_food(10)
                        .with_description("A magical apple that grants powerful effects"),
                    |item, slot| {
                        let ingredient = if slot == 4 {
                            "minecraft:diamond"
                        } else {
                            "minecraft:gold_ingot"
                        };
                        item.with_ingredient(slot, ingredient)
                    },
                )],
        },
        Template {
            id: "hostile-boss",
            name: "Boss Mob Pack",
            summary: "A challenging boss mob with high stats",
            pack_name: "Shadow Lord Boss Pack",
            pack_description: "Adds a challenging boss mob and its unique drops",
            entities: vec![Entity::new("my_addon:shadow_lord")
                .with_display_name("Shadow Lord")
                .with_health(500)
                .with_attack_damage(20)
                .with_movement_speed(0.35)
                .with_biomes([Biome::Nether, Biome::End])
                .with_behavior(EntityBehavior::Hostile)
                .with_description("A fearsome boss that guards treasure")],
            items: vec![Item::new("my_addon:shadow_essence")
                .with_display_name("Shadow Essence")
                .with_description("Rare essence dropped by the Shadow Lord")],
        },
        Template {
            id: "starter-kit",
            name: "Starter Kit",
            summary: "Basic tools and items for beginners",
            pack_name: "Starter Kit Pack",
            pack_description: "Essential tools and items for new players",
            entities: vec![],
            items: vec![
                Item::new("my_addon:starter_sword")
                    .with_display_name("Starter Sword")
                    .with_category(ItemCategory::Weapons)
                    .with_max_stack_size(1)
                    .with_damage(6)
                    .with_durability(100)
                    .with_ingredient(1, "minecraft:iron_ingot")
                    .with_ingredient(4, "minecraft:iron_ingot")
                    .with_ingredient(7, "minecraft:stick")
                    .with_description("A basic sword for new adventurers"),
                Item::new("my_addon:starter_pickaxe")
                    .with_display_name("Starter Pickaxe")
                    .with_category(ItemCategory::Tools)
                    .with_max_stack_size(1)
                    .with_damage(2)
                    .with_durability(150)
                    .with_ingredient(0, "minecraft:iron_ingot")
                    .with_ingredient(1, "minecraft:iron_ingot")
                    .with_ingredient(2, "minecraft:iron_ingot")
                    .with_ingredient(4, "minecraft:stick")
                    .with_ingredient(7, "minecraft:stick")
                    .with_description("A reliable pickaxe for mining"),
            ],
        },
    ]
}

/// Look up a template by its key.
pub fn find(id: &str) -> Option<Template> {
    all().into_iter().find(|t| t.id == id)
}

fn armor_piece(
    identifier: &str,
    name: &str,
    durability: u32,
    slots: &[u8],
    description: &str,
) -> Item {
    slots.iter().fold(
        Item::new(identifier)
            .with_display_name(name)
            .with_category(ItemCategory::Equipment)
            .with_max_stack_size(1)
            .with_durability(durability)
            .with_description(description),
        |item, &slot| item.with_ingredient(slot, "minecraft:diamond"),
    )
}
