//! Data-driven game balance
//!
//! Everything a playtester might want to twiddle without recompiling lives
//! here. Values load from a JSON file when one is present and fall back to
//! the defaults below otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;

/// Gameplay balance parameters.
///
/// Sampled ranges are inclusive `(low, high)` pairs; each entity draws its
/// values once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Match length in seconds before time-warp pickups get involved
    pub match_secs: i64,
    /// A new raider appears every this many ticks
    pub raider_spawn_interval: u64,
    /// A new pickup appears every this many ticks
    pub pickup_spawn_interval: u64,
    /// Seconds added by an Extend pickup
    pub extend_secs: i64,
    /// Seconds removed by a Shorten pickup
    pub shorten_secs: i64,
    /// Kills needed for a full special gauge
    pub gauge_max: u8,
    /// How long an uncollected pickup survives
    pub pickup_lifespan_secs: f32,
    /// Depth at which a raider stops descending
    pub raider_halt_depth: (f32, f32),
    /// Ticks between hazard drops from a halted raider
    pub raider_drop_interval: (u64, u64),
    /// Raider sprite scale (drives rendered area, and with it score value)
    pub raider_scale: (f32, f32),
    /// Hazard radius (drives rendered area, and with it score value)
    pub hazard_radius: (f32, f32),
    /// Fixed RNG seed for reproducible matches; unset means entropy-seeded
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            match_secs: 60,
            raider_spawn_interval: 200,
            pickup_spawn_interval: 300,
            extend_secs: 40,
            shorten_secs: 5,
            gauge_max: 5,
            pickup_lifespan_secs: 5.0,
            raider_halt_depth: (50.0, 325.0),
            raider_drop_interval: (50, 300),
            raider_scale: (1.0, 2.0),
            hazard_radius: (10.0, 50.0),
            seed: None,
        }
    }
}

impl Tuning {
    /// Pickup lifespan converted to simulation ticks.
    pub fn pickup_lifespan_ticks(&self) -> u64 {
        (self.pickup_lifespan_secs * TICK_RATE as f32) as u64
    }

    /// Load tuning from `path`, falling back to defaults when the file is
    /// missing or fails to parse. A bad balance file should never stop a
    /// match from starting.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
