//! Three-ray validity check for candidate points
//!
//! A candidate is rejected ("bad") when resting on a non-grass surface, sat
//! underneath geometry, or pressed against an obstruction ahead of it. The
//! probes chain as else-ifs: a later probe only runs when the earlier one
//! missed entirely, so a downward hit on grass accepts the point outright.
//! That chaining is load-bearing compatibility behavior; do not flatten it
//! into three independent checks.

use crate::core::config::QuarryConfig;
use crate::world::World;
use glam::Vec3;

/// Whether a candidate point must be rejected
pub fn bad_location(world: &dyn World, point: Vec3, config: &QuarryConfig) -> bool {
    if let Some(hit) = world.probe(point, Vec3::NEG_Y, config.probe_down) {
        if !hit.surface.is_grass() {
            tracing::debug!(
                "found {:?} {:.1} below candidate {point}",
                hit.surface,
                hit.distance
            );
            return true;
        }
    } else if let Some(hit) = world.probe(point, Vec3::Y, config.probe_up) {
        tracing::debug!(
            "found {:?} {:.1} above candidate {point}",
            hit.surface,
            hit.distance
        );
        return true;
    } else if let Some(hit) = world.probe(point, Vec3::Z, config.probe_forward) {
        tracing::debug!(
            "found {:?} at {:.1} next to candidate {point}",
            hit.surface,
            hit.distance
        );
        return true;
    }
    false
}
