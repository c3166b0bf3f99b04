//! In-memory world backend loaded from JSON snapshot files
//!
//! A snapshot describes a frozen slice of world state: flat terrain at a
//! fixed height, the monument-category objects, and axis-aligned box
//! obstacles tagged with a material name. `SnapshotWorld` implements the
//! `World` trait against that data, which is enough to drive a full
//! discovery/placement/teardown pass headlessly.

use crate::core::types::{NetworkId, SurfaceClass};
use crate::world::{ProbeHit, World, WorldObjectInfo};
use ahash::AHashMap;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Schema version this build does not understand
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Root structure for snapshot JSON files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotFile {
    /// Schema version (currently 1)
    pub version: u32,
    /// Uniform terrain height (defaults to 0)
    #[serde(default)]
    pub terrain_height: f32,
    /// Monument-category objects
    #[serde(default)]
    pub objects: Vec<SnapshotObject>,
    /// Solid geometry the collision probes can hit
    #[serde(default)]
    pub obstacles: Vec<SnapshotObstacle>,
}

/// A single monument-category object in the snapshot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotObject {
    /// Full prefab path
    pub prefab: String,
    /// World position [x, y, z]
    pub position: [f32; 3],
    /// Yaw rotation in degrees (defaults to 0)
    #[serde(default)]
    pub yaw_deg: f32,
    /// Bounding-box half-extents [x, y, z]
    pub extents: [f32; 3],
}

/// An axis-aligned box of solid geometry with a surface material
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotObstacle {
    pub min: [f32; 3],
    pub max: [f32; 3],
    /// Engine material name, e.g. "grass_short" or "road_asphalt";
    /// classified by substring match the way the live engine reports it
    pub material: String,
}

/// Map an engine material name onto the abstract surface vocabulary
pub fn classify_material(material: &str) -> SurfaceClass {
    if material.to_lowercase().contains("grass") {
        SurfaceClass::Grass
    } else {
        SurfaceClass::Solid
    }
}

#[derive(Debug, Clone)]
struct Obstacle {
    min: Vec3,
    max: Vec3,
    surface: SurfaceClass,
}

/// A live object created through `spawn`
#[derive(Debug, Clone)]
pub struct SpawnedEntity {
    pub prefab: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub extract_liquid: bool,
    pub extract_solid: bool,
}

/// In-memory `World` implementation backed by snapshot data
pub struct SnapshotWorld {
    terrain_height: f32,
    objects: Vec<WorldObjectInfo>,
    obstacles: Vec<Obstacle>,
    entities: AHashMap<NetworkId, SpawnedEntity>,
    next_id: u32,
    refuse_spawns: bool,
}

impl SnapshotWorld {
    /// Empty world with flat terrain at the given height
    pub fn flat(terrain_height: f32) -> Self {
        Self {
            terrain_height,
            objects: Vec::new(),
            obstacles: Vec::new(),
            entities: AHashMap::new(),
            next_id: 1,
            refuse_spawns: false,
        }
    }

    /// Load a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        Self::from_snapshot(&file)
    }

    /// Load a snapshot from a JSON file on disk
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build a world from parsed snapshot data
    pub fn from_snapshot(file: &SnapshotFile) -> Result<Self, SnapshotError> {
        if file.version != 1 {
            return Err(SnapshotError::UnsupportedVersion(file.version));
        }

        let mut world = Self::flat(file.terrain_height);
        for obj in &file.objects {
            world.add_object(
                &obj.prefab,
                Vec3::from_array(obj.position),
                Quat::from_rotation_y(obj.yaw_deg.to_radians()),
                Vec3::from_array(obj.extents),
            );
        }
        for obs in &file.obstacles {
            world.add_obstacle(
                Vec3::from_array(obs.min),
                Vec3::from_array(obs.max),
                &obs.material,
            );
        }
        Ok(world)
    }

    pub fn add_object(&mut self, prefab: &str, position: Vec3, rotation: Quat, extents: Vec3) {
        self.objects.push(WorldObjectInfo {
            raw_name: prefab.to_string(),
            position,
            rotation,
            extents,
        });
    }

    pub fn add_obstacle(&mut self, min: Vec3, max: Vec3, material: &str) {
        self.obstacles.push(Obstacle {
            min,
            max,
            surface: classify_material(material),
        });
    }

    /// Make subsequent `spawn` calls return `None` (for exercising the
    /// failed-spawn path in tests)
    pub fn refuse_spawns(&mut self, refuse: bool) {
        self.refuse_spawns = refuse;
    }

    /// Number of live spawned entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate live spawned entities
    pub fn entities(&self) -> impl Iterator<Item = (NetworkId, &SpawnedEntity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    /// Slab-method ray/AABB intersection; `direction` must be normalized.
    /// Returns the entry distance within `[0, max_distance]`.
    fn ray_aabb(
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        min: Vec3,
        max: Vec3,
    ) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = max_distance;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            if d.abs() < 1e-6 {
                // Ray parallel to this slab; must already be inside it
                if o < min[axis] || o > max[axis] {
                    return None;
                }
            } else {
                let mut t0 = (min[axis] - o) / d;
                let mut t1 = (max[axis] - o) / d;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_near = t_near.max(t0);
                t_far = t_far.min(t1);
                if t_near > t_far {
                    return None;
                }
            }
        }

        Some(t_near)
    }
}

impl World for SnapshotWorld {
    fn monument_objects(&self) -> Vec<WorldObjectInfo> {
        self.objects.clone()
    }

    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        self.terrain_height
    }

    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit> {
        let mut nearest: Option<ProbeHit> = None;
        for obs in &self.obstacles {
            if let Some(distance) =
                Self::ray_aabb(origin, direction, max_distance, obs.min, obs.max)
            {
                if nearest.map_or(true, |hit| distance < hit.distance) {
                    nearest = Some(ProbeHit {
                        distance,
                        surface: obs.surface,
                    });
                }
            }
        }
        nearest
    }

    fn spawn(&mut self, prefab: &str, position: Vec3, rotation: Quat) -> Option<NetworkId> {
        if self.refuse_spawns {
            return None;
        }
        let id = NetworkId(self.next_id);
        self.next_id += 1;
        self.entities.insert(
            id,
            SpawnedEntity {
                prefab: prefab.to_string(),
                position,
                rotation,
                extract_liquid: false,
                extract_solid: false,
            },
        );
        Some(id)
    }

    fn enable_extraction(&mut self, id: NetworkId, liquid: bool, solid: bool) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.extract_liquid = liquid;
            entity.extract_solid = solid;
        }
    }

    fn position_of(&self, id: NetworkId) -> Option<Vec3> {
        self.entities.get(&id).map(|e| e.position)
    }

    fn find_near(&self, position: Vec3, radius: f32) -> Vec<NetworkId> {
        let radius_sq = radius * radius;
        self.entities
            .iter()
            .filter(|(_, e)| e.position.distance_squared(position) <= radius_sq)
            .map(|(id, _)| *id)
            .collect()
    }

    fn destroy(&mut self, id: NetworkId) {
        self.entities.remove(&id);
    }
}
