//! Creature documents: the server-side behavior and the client-side descriptor.

use addon_model::{Entity, EntityBehavior};
use serde::Serialize;
use serde_json::{Map, Value};

/// Format version of entity behavior documents.
pub const ENTITY_FORMAT_VERSION: &str = "1.20.0";

/// Format version of client entity descriptors.
pub const CLIENT_ENTITY_FORMAT_VERSION: &str = "1.10.0";

/// Priority of the player-targeting goal on hostile creatures.
pub const HOSTILE_TARGET_PRIORITY: u32 = 2;

/// How far hostile creatures look for players.
pub const HOSTILE_SEARCH_RADIUS: u32 = 16;

/// Spawn egg colors. Every creature shares them in this version.
pub const SPAWN_EGG_BASE_COLOR: &str = "#4A7C59";
pub const SPAWN_EGG_OVERLAY_COLOR: &str = "#8B4513";

/// `entities/<name>.json` in the behavior pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityBehaviorDoc {
    pub format_version: &'static str,
    #[serde(rename = "minecraft:entity")]
    pub entity: EntityDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDefinition {
    pub description: EntityDescription,
    pub component_groups: Map<String, Value>,
    pub components: EntityComponents,
    pub events: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDescription {
    pub identifier: String,
    pub is_spawnable: bool,
    pub is_summonable: bool,
    pub is_experimental: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityComponents {
    #[serde(rename = "minecraft:health")]
    pub health: HealthComponent,
    #[serde(rename = "minecraft:movement")]
    pub movement: MovementComponent,
    #[serde(rename = "minecraft:collision_box")]
    pub collision_box: CollisionBox,
    #[serde(rename = "minecraft:physics")]
    pub physics: Physics,
    #[serde(rename = "minecraft:pushable")]
    pub pushable: Pushable,
    #[serde(rename = "minecraft:attack", skip_serializing_if = "Option::is_none")]
    pub attack: Option<AttackComponent>,
    #[serde(
        rename = "minecraft:behavior.nearest_attackable_target",
        skip_serializing_if = "Option::is_none"
    )]
    pub nearest_attackable_target: Option<NearestAttackableTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthComponent {
    pub value: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementComponent {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionBox {
    pub width: f64,
    pub height: f64,
}

impl Default for CollisionBox {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 1.8,
        }
    }
}

/// Serializes as an empty object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Physics {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pushable {
    pub is_pushable: bool,
    pub is_pushable_by_piston: bool,
}

impl Default for Pushable {
    fn default() -> Self {
        Self {
            is_pushable: true,
            is_pushable_by_piston: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttackComponent {
    pub damage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestAttackableTarget {
    pub priority: u32,
    pub entity_types: Vec<TargetSelector>,
}

impl NearestAttackableTarget {
    /// Target players within the hostile search radius.
    pub fn players() -> Self {
        Self {
            priority: HOSTILE_TARGET_PRIORITY,
            entity_types: vec![TargetSelector {
                filters: FamilyFilter {
                    test: "is_family",
                    subject: "other",
                    value: "player",
                },
                max_dist: HOSTILE_SEARCH_RADIUS,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSelector {
    pub filters: FamilyFilter,
    pub max_dist: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyFilter {
    pub test: &'static str,
    pub subject: &'static str,
    pub value: &'static str,
}

impl EntityBehaviorDoc {
    /// Map a creature to its behavior document.
    pub fn from_entity(entity: &Entity) -> Self {
        let hostile = entity.behavior == EntityBehavior::Hostile;

        Self {
            format_version: ENTITY_FORMAT_VERSION,
            entity: EntityDefinition {
                description: EntityDescription {
                    identifier: entity.effective_identifier().to_string(),
                    is_spawnable: true,
                    is_summonable: true,
                    is_experimental: false,
                },
                component_groups: Map::new(),
                components: EntityComponents {
                    health: HealthComponent {
                        value: entity.health,
                        max: entity.health,
                    },
                    movement: MovementComponent {
                        value: entity.movement_speed,
                    },
                    collision_box: CollisionBox::default(),
                    physics: Physics::default(),
                    pushable: Pushable::default(),
                    attack: entity.is_aggressive().then_some(AttackComponent {
                        damage: entity.attack_damage,
                    }),
                    nearest_attackable_target: hostile.then(NearestAttackableTarget::players),
                },
                events: Map::new(),
            },
        }
    }
}

/// `entity/<name>.entity.json` in the resource pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientEntityDoc {
    pub format_version: &'static str,
    #[serde(rename = "minecraft:client_entity")]
    pub client_entity: ClientEntityDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientEntityDefinition {
    pub description: ClientEntityDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientEntityDescription {
    pub identifier: String,
    pub materials: DefaultSlot,
    pub textures: DefaultSlot,
    pub geometry: DefaultSlot,
    pub render_controllers: Vec<String>,
    pub spawn_egg: SpawnEgg,
}

/// A `{ "default": ... }` reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultSlot {
    pub default: String,
}

impl DefaultSlot {
    fn new(value: impl Into<String>) -> Self {
        Self {
            default: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnEgg {
    pub base_color: &'static str,
    pub overlay_color: &'static str,
}

impl ClientEntityDoc {
    /// Map a creature to its client descriptor.
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            format_version: CLIENT_ENTITY_FORMAT_VERSION,
            client_entity: ClientEntityDefinition {
                description: ClientEntityDescription {
                    identifier: entity.effective_identifier().to_string(),
                    materials: DefaultSlot::new("entity_alphatest"),
                    textures: DefaultSlot::new(format!("textures/entity/{}", entity.local_name())),
                    geometry: DefaultSlot::new("geometry.humanoid"),
                    render_controllers: vec!["controller.render.default".to_string()],
                    spawn_egg: SpawnEgg {
                        base_color: SPAWN_EGG_BASE_COLOR,
                        overlay_color: SPAWN_EGG_OVERLAY_COLOR,
                    },
                },
            },
        }
    }
}
