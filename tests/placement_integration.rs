//! Integration tests for the full discovery -> placement -> teardown pass

use glam::Vec3;
use monument_quarries::core::config::QuarryConfig;
use monument_quarries::ledger::SpawnLedger;
use monument_quarries::world::{SnapshotWorld, World};
use monument_quarries::{monuments, placement};

/// Four warehouses on open grass, far enough apart that their rings never
/// interact, plus one lighthouse that discovery must ignore.
const FOUR_WAREHOUSES: &str = r#"{
    "version": 1,
    "terrain_height": 0.0,
    "objects": [
        {
            "prefab": "assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab",
            "position": [0.0, 0.0, 0.0],
            "extents": [24.0, 8.0, 31.0]
        },
        {
            "prefab": "assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab",
            "position": [500.0, 0.0, 0.0],
            "yaw_deg": 90.0,
            "extents": [24.0, 8.0, 31.0]
        },
        {
            "prefab": "assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab",
            "position": [0.0, 0.0, 500.0],
            "extents": [24.0, 8.0, 31.0]
        },
        {
            "prefab": "assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab",
            "position": [500.0, 0.0, 500.0],
            "extents": [24.0, 8.0, 31.0]
        },
        {
            "prefab": "assets/bundled/prefabs/autospawn/monument/lighthouse.prefab",
            "position": [1000.0, 0.0, 1000.0],
            "extents": [12.0, 40.0, 12.0]
        }
    ],
    "obstacles": []
}"#;

fn run_pass(world: &mut SnapshotWorld, config: &QuarryConfig) -> (usize, SpawnLedger) {
    let mut registry = monuments::discover(world, config);
    let mut ledger = SpawnLedger::new();
    let placed = placement::place(&mut registry, world, &mut ledger, config);
    (placed, ledger)
}

#[test]
fn test_duplicate_base_names_get_distinct_suffixes() {
    let world = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    let registry = monuments::discover(&world, &QuarryConfig::default());

    assert_eq!(
        registry.names(),
        vec!["Warehouse0", "Warehouse1", "Warehouse2", "Warehouse3"]
    );
}

#[test]
fn test_cap_three_places_four_at_first_angle() {
    let mut world = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    let config = QuarryConfig::default();

    let (placed, ledger) = run_pass(&mut world, &config);

    // Strict ">" stop check lets one extra through
    assert_eq!(placed, 4);
    assert_eq!(ledger.len(), 4);
    assert_eq!(world.entity_count(), 4);

    // All candidates valid, so each quarry sits at angle index 0: due east
    // of its monument, riding the terrain surface
    let monument_positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(500.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 500.0),
        Vec3::new(500.0, 0.0, 500.0),
    ];
    for anchor in monument_positions {
        let expected = anchor + Vec3::new(30.0, 0.0, 0.0);
        assert!(
            world
                .entities()
                .any(|(_, e)| (e.position - expected).length() < 1e-3),
            "no quarry at {expected}"
        );
    }
}

#[test]
fn test_runs_are_deterministic() {
    let config = QuarryConfig::default();

    let mut first = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    let (placed_a, _) = run_pass(&mut first, &config);
    let mut positions_a: Vec<Vec3> = first.entities().map(|(_, e)| e.position).collect();

    let mut second = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    let (placed_b, _) = run_pass(&mut second, &config);
    let mut positions_b: Vec<Vec3> = second.entities().map(|(_, e)| e.position).collect();

    let key = |v: &Vec3| (v.x as i64, v.z as i64);
    positions_a.sort_by_key(key);
    positions_b.sort_by_key(key);

    assert_eq!(placed_a, placed_b);
    assert_eq!(positions_a, positions_b);
}

#[test]
fn test_surrounded_monument_is_skipped_without_failing_the_batch() {
    let mut world = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    // Bury the first warehouse's entire ring under road surface
    world.add_obstacle(
        Vec3::new(-60.0, -2.0, -60.0),
        Vec3::new(60.0, -1.0, 60.0),
        "road_asphalt",
    );
    let config = QuarryConfig::default();

    let (placed, _) = run_pass(&mut world, &config);

    // Warehouse0 contributes nothing; the other three still get quarries
    assert_eq!(placed, 3);
    assert!(!world
        .entities()
        .any(|(_, e)| e.position.distance(Vec3::ZERO) < 60.0));
}

#[test]
fn test_end_to_end_teardown_cleans_spawned_quarries() {
    let mut world = SnapshotWorld::from_json(FOUR_WAREHOUSES).unwrap();
    let config = QuarryConfig::default();

    let (placed, mut ledger) = run_pass(&mut world, &config);
    assert_eq!(placed, 4);

    // One quarry vanishes to an unrelated world event before shutdown
    let victim = ledger.iter().next().unwrap();
    world.destroy(victim);
    assert_eq!(world.entity_count(), 3);

    ledger.teardown_all(&mut world, config.cleanup_radius);
    assert_eq!(world.entity_count(), 0);
    assert!(ledger.is_empty());

    // Re-running teardown on the drained ledger is a no-op
    ledger.teardown_all(&mut world, config.cleanup_radius);
    assert_eq!(world.entity_count(), 0);
}
