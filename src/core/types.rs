//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network identity of a live world object, assigned by the world backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u32);

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Abstract surface classification reported by collision probes
///
/// The world backend maps its own material vocabulary onto these classes,
/// so the placement rules never see engine-specific material names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceClass {
    /// Open grassy ground, acceptable to rest a quarry on
    Grass,
    /// Construction, world geometry, water, or road surfaces
    Solid,
    /// Hit something the backend could not classify
    Unknown,
}

impl SurfaceClass {
    pub fn is_grass(&self) -> bool {
        matches!(self, SurfaceClass::Grass)
    }
}
