//! Skyraid - a timed 2D arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state)
//! - `render`: Renderer interface and the terminal implementation
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 50;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 1100.0;
    pub const ARENA_HEIGHT: f32 = 650.0;

    /// Avatar defaults
    pub const AVATAR_SIZE: Vec2 = Vec2::new(55.0, 40.0);
    pub const AVATAR_SPEED: f32 = 10.0;
    pub const AVATAR_START: Vec2 = Vec2::new(900.0, 400.0);
    /// How long a joy/sorrow reaction pose stays visible
    pub const POSE_TICKS: u32 = 25;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(20.0, 12.0);
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Projectiles in a full gauge discharge
    pub const BURST_PROJECTILES: u32 = 32;

    /// Raider defaults
    pub const RAIDER_BASE_SIZE: f32 = 40.0;
    pub const RAIDER_DESCENT_SPEED: f32 = 6.0;

    /// Hazard defaults
    pub const HAZARD_SPEED: f32 = 6.0;

    /// Pickup defaults
    pub const PICKUP_SIZE: Vec2 = Vec2::new(36.0, 30.0);
    /// Pickups spawn at least this far from every arena edge
    pub const PICKUP_MARGIN: f32 = 50.0;

    /// Explosion defaults
    pub const EXPLOSION_SIZE: Vec2 = Vec2::new(48.0, 48.0);
    pub const RAIDER_EXPLOSION_LIFE: i32 = 100;
    pub const HAZARD_EXPLOSION_LIFE: i32 = 50;

    /// End-of-match display holds (ticks)
    pub const DEFEAT_DISPLAY_TICKS: u32 = 2 * TICK_RATE;
    pub const EXPIRY_DISPLAY_TICKS: u32 = 5 * TICK_RATE;
}
