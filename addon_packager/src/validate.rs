//! Range checks applied to content records before any document is built.

use addon_model::{
    Entity, Item, CRAFTING_SLOTS, MAX_FOOD_RESTORATION, MAX_ITEM_DAMAGE, MAX_STACK_SIZE_RANGE,
};

use crate::error::{ExportError, ExportResult};

pub(crate) fn entity(entity: &Entity) -> ExportResult<()> {
    let record = || format!("entity {}", entity.effective_identifier());

    if entity.health == 0 {
        return Err(invalid(record(), "health", "must be positive"));
    }
    if !entity.movement_speed.is_finite() || entity.movement_speed < 0.0 {
        return Err(invalid(
            record(),
            "movement_speed",
            format!("must be a non-negative number, got {}", entity.movement_speed),
        ));
    }
    file_name(record, entity.local_name())
}

pub(crate) fn item(item: &Item) -> ExportResult<()> {
    let record = || format!("item {}", item.effective_identifier());

    if !MAX_STACK_SIZE_RANGE.contains(&item.max_stack_size) {
        return Err(invalid(
            record(),
            "max_stack_size",
            format!(
                "must be between {} and {}, got {}",
                MAX_STACK_SIZE_RANGE.start(),
                MAX_STACK_SIZE_RANGE.end(),
                item.max_stack_size
            ),
        ));
    }
    if item.damage > MAX_ITEM_DAMAGE {
        return Err(invalid(
            record(),
            "damage",
            format!("must be at most {MAX_ITEM_DAMAGE}, got {}", item.damage),
        ));
    }
    if item.food_restoration > MAX_FOOD_RESTORATION {
        return Err(invalid(
            record(),
            "food_restoration",
            format!("must be at most {MAX_FOOD_RESTORATION}, got {}", item.food_restoration),
        ));
    }

    let mut occupied = [false; CRAFTING_SLOTS as usize];
    for ingredient in &item.crafting_recipe {
        let Some(cell) = occupied.get_mut(usize::from(ingredient.slot)) else {
            return Err(invalid(
                record(),
                "crafting_recipe",
                format!("slot {} is outside the 3x3 grid", ingredient.slot),
            ));
        };
        if *cell {
            return Err(invalid(
                record(),
                "crafting_recipe",
                format!("slot {} holds more than one ingredient", ingredient.slot),
            ));
        }
        if ingredient.item.trim().is_empty() {
            return Err(invalid(
                record(),
                "crafting_recipe",
                format!("slot {} has an empty ingredient", ingredient.slot),
            ));
        }
        *cell = true;
    }

    file_name(record, item.local_name())
}

/// Local names become archive file names.
fn file_name(record: impl Fn() -> String, name: &str) -> ExportResult<()> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid(
            record(),
            "identifier",
            format!("name \"{name}\" cannot be used as a file name"),
        ));
    }
    Ok(())
}

fn invalid(record: String, field: &'static str, reason: impl Into<String>) -> ExportError {
    ExportError::Validation {
        record,
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ExportError) -> &'static str {
        match err {
            ExportError::Validation { field, .. } => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_records_pass() {
        assert!(entity(&Entity::new("a:golem")).is_ok());
        assert!(item(&Item::new("a:sword").with_ingredient(0, "minecraft:stick")).is_ok());
    }

    #[test]
    fn test_entity_checks() {
        assert_eq!(field_of(entity(&Entity::new("a:ghost").with_health(0)).unwrap_err()), "health");
        assert_eq!(
            field_of(entity(&Entity::new("a:snail").with_movement_speed(-0.1)).unwrap_err()),
            "movement_speed"
        );
        assert_eq!(
            field_of(entity(&Entity::new("a:blur").with_movement_speed(f64::NAN)).unwrap_err()),
            "movement_speed"
        );
        assert_eq!(field_of(entity(&Entity::new("a:..")).unwrap_err()), "identifier");
    }

    #[test]
    fn test_item_ranges() {
        assert_eq!(
            field_of(item(&Item::new("a:x").with_max_stack_size(0)).unwrap_err()),
            "max_stack_size"
        );
        assert_eq!(
            field_of(item(&Item::new("a:x").with_max_stack_size(65)).unwrap_err()),
            "max_stack_size"
        );
        assert_eq!(field_of(item(&Item::new("a:x").with_damage(101)).unwrap_err()), "damage");
        assert_eq!(
            field_of(item(&Item::new("a:x").with_food(21)).unwrap_err()),
            "food_restoration"
        );
        assert_eq!(field_of(item(&Item::new("a:x/y")).unwrap_err()), "identifier");
    }

    #[test]
    fn test_recipe_checks() {
        let outside = Item::new("a:x").with_ingredient(9, "minecraft:stick");
        assert_eq!(field_of(item(&outside).unwrap_err()), "crafting_recipe");

        let doubled = Item::new("a:x")
            .with_ingredient(3, "minecraft:stick")
            .with_ingredient(3, "minecraft:coal");
        assert_eq!(field_of(item(&doubled).unwrap_err()), "crafting_recipe");

        let blank = Item::new("a:x").with_ingredient(3, " ");
        assert_eq!(field_of(item(&blank).unwrap_err()), "crafting_recipe");
    }

    #[test]
    fn test_error_names_the_record() {
        let err = item(&Item::new("my_addon:heavy").with_damage(500)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("item my_addon:heavy"), "{message}");
        assert!(message.contains("damage"), "{message}");
    }
}
