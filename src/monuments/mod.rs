//! Monument discovery and the registry of placement anchors

pub mod naming;

use crate::core::config::QuarryConfig;
use crate::world::World;
use glam::{Quat, Vec3};
use std::collections::BTreeMap;

/// A discovered monument, anchoring one placement attempt
///
/// `rotation` is deliberately mutable shared state: each successful quarry
/// placement at this monument accumulates a 90-degree yaw onto it, so
/// repeated placements fan out instead of stacking on one orientation.
#[derive(Debug, Clone)]
pub struct Monument {
    /// Unique registry key, e.g. "Warehouse0"
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
    /// Half-extent dimensions sizing the placement ring
    pub footprint: Vec3,
}

/// Registry of discovered monuments keyed by display name
///
/// Backed by a BTreeMap so iteration is lexicographic by name. Placement
/// order must be reproducible run to run: when a cap limits how many
/// monuments receive quarries, the ordering decides which ones win.
#[derive(Debug, Default)]
pub struct MonumentRegistry {
    monuments: BTreeMap<String, Monument>,
}

impl MonumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, monument: Monument) {
        self.monuments.insert(monument.name.clone(), monument);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.monuments.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Monument> {
        self.monuments.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Monument> {
        self.monuments.get_mut(name)
    }

    /// Iterate monuments in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = &Monument> {
        self.monuments.values()
    }

    /// Registry keys in lexicographic order
    pub fn names(&self) -> Vec<String> {
        self.monuments.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.monuments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monuments.is_empty()
    }
}

/// Whether a raw object name marks a monument worth anchoring to
///
/// Case-insensitive substring match; kept as a standalone predicate so the
/// matching rule is testable apart from any world backend.
pub fn is_monument(raw_name: &str, keyword: &str) -> bool {
    raw_name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Scan the world for monuments and build the registry
///
/// Called exactly once, before any placement. Non-matching objects are
/// skipped; there is no failure mode, only set membership.
pub fn discover(world: &dyn World, config: &QuarryConfig) -> MonumentRegistry {
    let mut registry = MonumentRegistry::new();

    for obj in world.monument_objects() {
        if !is_monument(&obj.raw_name, &config.monument_keyword) {
            continue;
        }

        let base = naming::display_name(&obj.raw_name);
        let name = naming::dedup_name(&base, |n| registry.contains(n));
        tracing::debug!("found {name}");

        let mut footprint = obj.extents;
        // The reported depth extent includes fences and clutter; override it
        // with the usable band in front of the monument
        if config.footprint_depth > 0.0 {
            footprint.z = config.footprint_depth;
        }
        if footprint.z < 1.0 {
            footprint.z = config.fallback_footprint_depth;
        }
        tracing::debug!("size: {}", footprint.z);

        registry.insert(Monument {
            name,
            position: obj.position,
            rotation: obj.rotation,
            footprint,
        });
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::SnapshotWorld;

    const WAREHOUSE_PREFAB: &str =
        "assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab";

    #[test]
    fn test_is_monument_predicate() {
        assert!(is_monument(WAREHOUSE_PREFAB, "warehouse"));
        assert!(is_monument("assets/monument/WAREHOUSE_1.prefab", "warehouse"));
        assert!(!is_monument("assets/monument/lighthouse.prefab", "warehouse"));
    }

    #[test]
    fn test_discover_skips_non_matching_objects() {
        let mut world = SnapshotWorld::flat(0.0);
        world.add_object(
            WAREHOUSE_PREFAB,
            Vec3::new(10.0, 0.0, 10.0),
            Quat::IDENTITY,
            Vec3::new(20.0, 6.0, 30.0),
        );
        world.add_object(
            "assets/monument/lighthouse.prefab",
            Vec3::new(500.0, 0.0, 500.0),
            Quat::IDENTITY,
            Vec3::new(10.0, 40.0, 10.0),
        );

        let registry = discover(&world, &QuarryConfig::default());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Warehouse0"));
    }

    #[test]
    fn test_discover_dedups_names_in_discovery_order() {
        let mut world = SnapshotWorld::flat(0.0);
        for i in 0..3 {
            world.add_object(
                WAREHOUSE_PREFAB,
                Vec3::new(i as f32 * 200.0, 0.0, 0.0),
                Quat::IDENTITY,
                Vec3::new(20.0, 6.0, 30.0),
            );
        }

        let registry = discover(&world, &QuarryConfig::default());
        assert_eq!(
            registry.names(),
            vec!["Warehouse0", "Warehouse1", "Warehouse2"]
        );
        // Suffixes follow discovery order
        assert_eq!(registry.get("Warehouse1").unwrap().position.x, 200.0);
    }

    #[test]
    fn test_footprint_depth_override() {
        let mut world = SnapshotWorld::flat(0.0);
        world.add_object(
            WAREHOUSE_PREFAB,
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(24.0, 8.0, 31.5),
        );

        let registry = discover(&world, &QuarryConfig::default());
        let monument = registry.get("Warehouse0").unwrap();
        assert_eq!(monument.footprint, Vec3::new(24.0, 8.0, 20.0));
    }

    #[test]
    fn test_degenerate_footprint_falls_back() {
        let mut world = SnapshotWorld::flat(0.0);
        world.add_object(WAREHOUSE_PREFAB, Vec3::ZERO, Quat::IDENTITY, Vec3::new(24.0, 8.0, 0.2));

        let mut config = QuarryConfig::default();
        config.footprint_depth = 0.0;

        let registry = discover(&world, &config);
        assert_eq!(registry.get("Warehouse0").unwrap().footprint.z, 50.0);
    }
}
