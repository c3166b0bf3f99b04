//! Ledger of spawned quarries, for clean removal at shutdown

use crate::core::types::NetworkId;
use crate::world::World;

/// Flat record of every object this system spawned, in spawn order
///
/// Ids are handed over by the placement engine and consulted only at
/// teardown. While the process runs, each recorded id names exactly one live
/// object unless something external removed it first.
#[derive(Debug, Default)]
pub struct SpawnLedger {
    spawned: Vec<NetworkId>,
}

impl SpawnLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spawned object; never rejects
    pub fn record(&mut self, id: NetworkId) {
        self.spawned.push(id);
    }

    pub fn len(&self) -> usize {
        self.spawned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.spawned.iter().copied()
    }

    /// Destroy every recorded object and its co-located helpers
    ///
    /// Ids that no longer resolve are skipped without error; unrelated world
    /// events may have removed them already. For each survivor, its position
    /// is captured before destruction so helper sub-objects the spawn call
    /// created as siblings can be swept up within `cleanup_radius`. Drains
    /// the ledger, so calling this again is a no-op.
    pub fn teardown_all(&mut self, world: &mut dyn World, cleanup_radius: f32) {
        for id in self.spawned.drain(..) {
            let Some(position) = world.position_of(id) else {
                tracing::debug!("quarry {id} already gone, skipping");
                continue;
            };
            world.destroy(id);

            for helper in world.find_near(position, cleanup_radius) {
                tracing::debug!("removing helper {helper} near {position}");
                world.destroy(helper);
            }
        }
    }
}
