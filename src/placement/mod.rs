//! Placement engine: rings of candidate points around each monument

pub mod probe;

use crate::core::config::QuarryConfig;
use crate::ledger::SpawnLedger;
use crate::monuments::MonumentRegistry;
use crate::world::World;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Place quarries around registered monuments, best effort
///
/// Monuments are visited in registry (lexicographic) order. For each one, 16
/// evenly spaced candidate points on a fixed-radius ring are validated in
/// angle order; the first good point receives a quarry and the rest are
/// skipped. A monument with no good point gets nothing, which is not an
/// error. Returns the number of quarries spawned.
///
/// The cap check runs before each monument and uses a strict greater-than,
/// so the pass can place `max_quarries + 1` objects before stopping. That
/// off-by-one is long-standing observed behavior and is kept as-is; the
/// boundary test pins it.
pub fn place(
    registry: &mut MonumentRegistry,
    world: &mut dyn World,
    ledger: &mut SpawnLedger,
    config: &QuarryConfig,
) -> usize {
    let mut spawned = 0usize;

    for name in registry.names() {
        if spawned > config.max_quarries as usize {
            break;
        }
        let Some(monument) = registry.get_mut(&name) else {
            continue;
        };
        tracing::debug!("attempting placement near {name} at {}", monument.position);

        let before = spawned;
        let radius = config.placement_radius;
        for i in 0..config.candidate_angles {
            let angle = i as f32 * TAU / config.candidate_angles as f32;
            let mut point = monument.position
                + Vec3::new(angle.cos() * radius, monument.footprint.y, angle.sin() * radius);
            // Placement rides the terrain surface regardless of the
            // monument's own vertical offset
            point.y = world.height_at(point.x, point.z);

            tracing::debug!("checking location {point} radius {radius}");
            if probe::bad_location(world, point, config) {
                continue;
            }

            tracing::debug!("good choice, spawning quarry");
            // Every successful placement at this monument accumulates a
            // 90-degree yaw onto its stored rotation; later placements
            // inherit the turned orientation. Intentional shared state.
            monument.rotation *= Quat::from_rotation_y(FRAC_PI_2);
            let Some(id) = world.spawn(&config.quarry_prefab, point, monument.rotation) else {
                tracing::debug!("unable to spawn quarry at {point}");
                continue;
            };

            world.enable_extraction(id, true, true);
            ledger.record(id);
            spawned += 1;
            break;
        }
        if spawned == before {
            tracing::debug!("no valid candidate around {name}");
        }
    }

    tracing::info!("spawned {spawned} quarries");
    spawned
}
