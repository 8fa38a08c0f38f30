//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The frontend owns a `MatchState`, feeds a `TickInput` to `tick` once
//! per frame, and hands the result to a renderer.

pub mod collision;
pub mod entity;
pub mod geom;
pub mod meters;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{
    Avatar, Body, Explosion, Facing, Hazard, Pickup, PickupKind, Pose, Projectile, Raider,
    RaiderState, spread_burst,
};
pub use geom::{Rect, direction_between, within_bounds};
pub use meters::{MatchTimer, Score, SpecialGauge};
pub use state::{MatchPhase, MatchState};
pub use tick::{TickInput, tick};
