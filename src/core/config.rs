//! Quarry placement configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose.
//! The operator-facing knobs (`max_quarries`, `debug`) live alongside the
//! placement tuning values so one file answers "why this number".

use crate::core::error::{QuarryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the quarry placement pass
///
/// Loaded from a TOML file at startup; a missing file is replaced with
/// defaults and written back so operators always have something to edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarryConfig {
    // === OPERATOR KNOBS ===
    /// Soft cap on spawned quarries
    ///
    /// The stop check runs BEFORE each monument and uses a strict
    /// greater-than, so a run can place `max_quarries + 1` objects before
    /// stopping. This matches the behavior servers have relied on for years;
    /// see `placement::place` before "fixing" it.
    pub max_quarries: u32,

    /// Emit per-candidate diagnostic detail
    ///
    /// When set, the driver widens the tracing filter to `debug`. Library
    /// code always logs through `tracing` and lets the filter gate output.
    pub debug: bool,

    // === DISCOVERY ===
    /// Case-insensitive substring that marks a world object as a monument
    /// worth anchoring to
    pub monument_keyword: String,

    /// Prefab path handed to the world backend when spawning a quarry
    pub quarry_prefab: String,

    /// Usable placement band in front of a monument (world units)
    ///
    /// Overrides the monument's reported depth extent, which includes fences
    /// and clutter we do not care about.
    pub footprint_depth: f32,

    /// Fallback depth when the override leaves a degenerate (< 1 unit)
    /// footprint, so the placement ring never collapses to zero size
    pub fallback_footprint_depth: f32,

    // === PLACEMENT RING ===
    /// Distance from the monument center to each candidate point (world units)
    pub placement_radius: f32,

    /// Number of evenly spaced candidate angles around the full circle
    ///
    /// At 16, candidates are 22.5 degrees apart. More angles means more
    /// probe casts per stubborn monument but better odds of finding ground.
    pub candidate_angles: u32,

    // === VALIDITY PROBES ===
    /// Downward probe reach (world units); rejects roads, foundations, water
    pub probe_down: f32,

    /// Upward probe reach (world units); rejects overhangs and interiors
    pub probe_up: f32,

    /// Forward probe reach along world +Z (world units); rejects candidates
    /// pressed against a wall or obstruction
    pub probe_forward: f32,

    // === TEARDOWN ===
    /// Radius swept around each destroyed quarry for co-located helper
    /// objects the spawn call created as siblings (world units)
    pub cleanup_radius: f32,
}

impl Default for QuarryConfig {
    fn default() -> Self {
        Self {
            max_quarries: 3,
            debug: false,

            monument_keyword: "warehouse".to_string(),
            quarry_prefab: "assets/prefabs/deployable/quarry/mining_quarry.prefab".to_string(),
            footprint_depth: 20.0,
            fallback_footprint_depth: 50.0,

            placement_radius: 30.0,
            candidate_angles: 16,

            probe_down: 6.0,
            probe_up: 6.0,
            probe_forward: 15.0,

            cleanup_radius: 50.0,
        }
    }
}

impl QuarryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.placement_radius <= 0.0 {
            return Err(format!(
                "placement_radius ({}) must be positive",
                self.placement_radius
            ));
        }

        if self.candidate_angles == 0 {
            return Err("candidate_angles must be nonzero".into());
        }

        if self.probe_down <= 0.0 || self.probe_up <= 0.0 || self.probe_forward <= 0.0 {
            return Err("probe distances must be positive".into());
        }

        if self.monument_keyword.is_empty() {
            return Err("monument_keyword must not be empty".into());
        }

        Ok(())
    }

    /// Load config from a TOML file, creating it with defaults when missing
    ///
    /// A loaded `max_quarries` of 0 is treated as unset and coerced back to
    /// the default of 3; the coerced file is written back so the on-disk copy
    /// stays honest. Callers that genuinely want a cap of 0 construct the
    /// config directly.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            tracing::info!("created default config at {}", path.display());
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: QuarryConfig = toml::from_str(&content)?;
        if config.max_quarries == 0 {
            config.max_quarries = 3;
            config.save(path)?;
        }
        config
            .validate()
            .map_err(QuarryError::InvalidConfig)?;
        Ok(config)
    }

    /// Write config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
