//! Content records: custom creatures and custom items.

mod entity;
mod item;

pub use entity::*;
pub use item::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a content record.
///
/// Assigned once when the record is created and never reassigned, so edits
/// can replace a record in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub Uuid);

impl ContentId {
    /// Create a new random content ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a content ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name segment of a namespaced identifier (`namespace:name` -> `name`).
///
/// Identifiers without a namespace, or with an empty name segment, fall back
/// to `fallback`.
pub fn local_name<'a>(identifier: &'a str, fallback: &'a str) -> &'a str {
    let name = match identifier.split_once(':') {
        Some((_, rest)) => rest.split(':').next().unwrap_or_default(),
        None => fallback,
    };

    if name.is_empty() {
        fallback
    } else {
        name
    }
}

pub(crate) fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("my_addon:super_sword", "custom_item"), "super_sword");
        assert_eq!(local_name("a:b:c", "custom_item"), "b");
        assert_eq!(local_name("plain", "custom_item"), "custom_item");
        assert_eq!(local_name("zombie", "custom_entity"), "custom_entity");
        assert_eq!(local_name("my_addon:", "custom_item"), "custom_item");
        assert_eq!(local_name("", "custom_entity"), "custom_entity");
    }

    #[test]
    fn test_content_ids_are_unique() {
        assert_ne!(ContentId::new(), ContentId::new());
    }
}
