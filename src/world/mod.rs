//! World collaborator contracts and the snapshot-backed implementation

pub mod snapshot;

pub use snapshot::SnapshotWorld;

use crate::core::types::{NetworkId, SurfaceClass};
use glam::{Quat, Vec3};

/// Raw description of a world object returned by monument enumeration
#[derive(Debug, Clone)]
pub struct WorldObjectInfo {
    /// Full prefab path, e.g.
    /// `assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab`
    pub raw_name: String,
    pub position: Vec3,
    pub rotation: Quat,
    /// Bounding-box half-extents
    pub extents: Vec3,
}

/// Result of a collision probe that hit something
#[derive(Debug, Clone, Copy)]
pub struct ProbeHit {
    pub distance: f32,
    pub surface: SurfaceClass,
}

/// External world-state collaborator
///
/// Every call is synchronous and definitive: a `None` probe result means
/// nothing is there, not "try again". The placement pass is the only writer
/// while it runs, so implementations need no interior locking.
pub trait World {
    /// Enumerate every object in the monument category
    fn monument_objects(&self) -> Vec<WorldObjectInfo>;

    /// Terrain surface height at a horizontal position
    fn height_at(&self, x: f32, z: f32) -> f32;

    /// Cast a ray against construction, world geometry, water, and road
    /// layers; returns the nearest hit within `max_distance`, if any
    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit>;

    /// Create a live object; `None` means the backend refused the spawn
    fn spawn(&mut self, prefab: &str, position: Vec3, rotation: Quat) -> Option<NetworkId>;

    /// Toggle resource extraction capabilities on a spawned quarry
    fn enable_extraction(&mut self, id: NetworkId, liquid: bool, solid: bool);

    /// Position of a live object, or `None` if it no longer exists
    fn position_of(&self, id: NetworkId) -> Option<Vec3>;

    /// Ids of all live objects within `radius` of a position
    fn find_near(&self, position: Vec3, radius: f32) -> Vec<NetworkId>;

    /// Remove a live object; removing an already-gone id is a no-op
    fn destroy(&mut self, id: NetworkId);

    /// Whether an id still refers to a live object
    fn find_by_id(&self, id: NetworkId) -> bool {
        self.position_of(id).is_some()
    }
}
