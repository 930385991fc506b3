//! Identifier generation for manifest headers and modules.

use uuid::Uuid;

/// Source of manifest identifiers.
///
/// `role` names the slot being filled (for example `behavior.header`); a
/// source may ignore it or use it to derive a stable value.
pub trait IdSource {
    /// Produce the identifier for `role`.
    fn next_id(&mut self, role: &str) -> Uuid;
}

/// Fresh random (v4) identifiers on every call.
///
/// Random bytes come from the operating system. If that source is
/// unavailable the UUID generator panics; there is no weaker fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self, _role: &str) -> Uuid {
        Uuid::new_v4()
    }
}

/// Name-based (v5) identifiers derived from the pack slug and the role.
///
/// Exporting unchanged content twice yields the same identifiers, so the
/// archives are byte-identical.
#[derive(Debug, Clone)]
pub struct StableIds {
    namespace: Uuid,
}

impl StableIds {
    /// Identifiers scoped to the pack with the given slug.
    pub fn for_pack(slug: &str) -> Self {
        Self {
            namespace: Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("addon:{slug}").as_bytes()),
        }
    }
}

impl IdSource for StableIds {
    fn next_id(&mut self, role: &str) -> Uuid {
        Uuid::new_v5(&self.namespace, role.as_bytes())
    }
}

/// All-zero identifiers, for previews that must not consume randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilIds;

impl IdSource for NilIds {
    fn next_id(&mut self, _role: &str) -> Uuid {
        Uuid::nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_unique() {
        let mut ids = RandomIds;
        let seen: HashSet<_> = (0..1000).map(|_| ids.next_id("header")).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_random_ids_are_hyphenated_v4() {
        let id = RandomIds.next_id("header");
        assert_eq!(id.get_version_num(), 4);

        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }

    #[test]
    fn test_stable_ids_repeat_per_role() {
        let mut a = StableIds::for_pack("sword_pack");
        let mut b = StableIds::for_pack("sword_pack");

        assert_eq!(a.next_id("behavior.header"), b.next_id("behavior.header"));
        assert_ne!(a.next_id("behavior.header"), a.next_id("behavior.module"));
    }

    #[test]
    fn test_stable_ids_differ_between_packs() {
        let mut a = StableIds::for_pack("sword_pack");
        let mut b = StableIds::for_pack("golem_pack");
        assert_ne!(a.next_id("behavior.header"), b.next_id("behavior.header"));
    }
}
