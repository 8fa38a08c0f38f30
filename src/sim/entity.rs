//! Entity model
//!
//! The moving pieces of a match. The set is closed: the avatar, its
//! projectiles, descending raiders, the hazards they drop, time-warp
//! pickups, and short-lived explosions. Each type owns its bounding rect
//! and knows how to advance itself by one tick; cross-entity interaction
//! lives in `collision` and `spawn`.

use glam::Vec2;
use rand::Rng;

use super::geom::{self, Rect};
use crate::consts::*;
use crate::tuning::Tuning;

/// Shared footprint contract: anything that occupies arena space.
pub trait Body {
    fn rect(&self) -> &Rect;
}

/// The eight directions the avatar can face, as key-delta sign pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    /// Map a summed movement delta to a facing. `None` for a zero delta,
    /// in which case the previous facing is retained.
    pub fn from_delta(delta: Vec2) -> Option<Self> {
        // f32::signum maps 0.0 to 1.0, so spell out the zero case
        let sign = |v: f32| -> i8 {
            if v > 0.0 {
                1
            } else if v < 0.0 {
                -1
            } else {
                0
            }
        };
        match (sign(delta.x), sign(delta.y)) {
            (0, 0) => None,
            (1, 0) => Some(Facing::Right),
            (1, -1) => Some(Facing::UpRight),
            (0, -1) => Some(Facing::Up),
            (-1, -1) => Some(Facing::UpLeft),
            (-1, 0) => Some(Facing::Left),
            (-1, 1) => Some(Facing::DownLeft),
            (0, 1) => Some(Facing::Down),
            (1, 1) => Some(Facing::DownRight),
            _ => None,
        }
    }

    /// The `(dx, dy)` sign pair in screen coordinates (y grows downward).
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Facing::Right => (1, 0),
            Facing::UpRight => (1, -1),
            Facing::Up => (0, -1),
            Facing::UpLeft => (-1, -1),
            Facing::Left => (-1, 0),
            Facing::DownLeft => (-1, 1),
            Facing::Down => (0, 1),
            Facing::DownRight => (1, 1),
        }
    }

    /// Unit vector for this facing.
    pub fn unit(self) -> Vec2 {
        let (dx, dy) = self.offsets();
        Vec2::new(dx as f32, dy as f32).normalize()
    }
}

/// Transient reaction displayed over the avatar's normal sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Neutral,
    Joy,
    Sorrow,
}

/// The player-controlled entity.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub rect: Rect,
    pub facing: Facing,
    pub speed: f32,
    pub pose: Pose,
    pose_ticks: u32,
}

impl Avatar {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::new(center, AVATAR_SIZE),
            facing: Facing::Right,
            speed: AVATAR_SPEED,
            pose: Pose::Neutral,
            pose_ticks: 0,
        }
    }

    /// Move by `speed * delta`, reverting the whole move if the result
    /// leaves the arena on either axis. No partial sliding along walls.
    ///
    /// `delta` is the raw sum of per-key unit vectors; diagonals are not
    /// normalized, so diagonal travel is faster by sqrt(2).
    pub fn advance(&mut self, delta: Vec2, arena_w: f32, arena_h: f32) {
        self.rect.translate(self.speed * delta);
        if geom::within_bounds(&self.rect, arena_w, arena_h) != (true, true) {
            self.rect.translate(-self.speed * delta);
        }
        if let Some(facing) = Facing::from_delta(delta) {
            self.facing = facing;
        }
    }

    /// Flash a reaction pose; it decays back to neutral on its own.
    pub fn strike_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.pose_ticks = POSE_TICKS;
    }

    /// Per-tick pose decay.
    pub fn settle_pose(&mut self) {
        if self.pose_ticks > 0 {
            self.pose_ticks -= 1;
            if self.pose_ticks == 0 {
                self.pose = Pose::Neutral;
            }
        }
    }
}

impl Body for Avatar {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A shot fired by the avatar.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub speed: f32,
}

impl Projectile {
    /// Fire along the avatar's current facing. The firing angle is derived
    /// from the facing sign pair with `atan2(-dy, dx)`, so the velocity is
    /// the normalized facing even on diagonals.
    pub fn fired_by(avatar: &Avatar) -> Self {
        let (dx, dy) = avatar.facing.offsets();
        let angle = (-dy as f32).atan2(dx as f32).to_degrees();
        Self::at_angle(avatar, angle)
    }

    /// Fire at an explicit angle in degrees, 0 pointing right, measured
    /// counter-clockwise in math coordinates (screen y is inverted).
    pub fn at_angle(avatar: &Avatar, angle_deg: f32) -> Self {
        let rad = angle_deg.to_radians();
        let vel = Vec2::new(rad.cos(), -rad.sin());
        let center = avatar.rect.center
            + Vec2::new(avatar.rect.width() * vel.x, avatar.rect.height() * vel.y);
        Self {
            rect: Rect::new(center, PROJECTILE_SIZE),
            vel,
            speed: PROJECTILE_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.speed * self.vel);
    }

    pub fn in_bounds(&self, arena_w: f32, arena_h: f32) -> bool {
        geom::within_bounds(&self.rect, arena_w, arena_h) == (true, true)
    }
}

impl Body for Projectile {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// Projectiles spread evenly across 360 degrees, starting at 0.
///
/// `count` is clamped to at least one. The full-gauge discharge uses
/// [`crate::consts::BURST_PROJECTILES`].
pub fn spread_burst(avatar: &Avatar, count: u32) -> Vec<Projectile> {
    let count = count.max(1);
    let step = 360.0 / count as f32;
    (0..count)
        .map(|i| Projectile::at_angle(avatar, i as f32 * step))
        .collect()
}

/// Descent phase of a raider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaiderState {
    Descending,
    Halted,
}

/// A descending enemy. Drops straight down to a randomly chosen depth,
/// parks there permanently, and bombards the avatar from above.
#[derive(Debug, Clone)]
pub struct Raider {
    pub rect: Rect,
    pub vel: Vec2,
    /// Depth at which descent stops
    pub bound: f32,
    pub state: RaiderState,
    /// Hazard drop cadence while halted (ticks)
    pub drop_interval: u64,
    pub score_value: u64,
}

impl Raider {
    /// Spawn at a random horizontal position along the top edge. Halt
    /// depth, drop cadence, and visual scale are each sampled once here.
    pub fn spawn<R: Rng>(rng: &mut R, tuning: &Tuning, arena_w: f32) -> Self {
        let x = rng.random_range(0.0..=arena_w);
        let scale = rng.random_range(tuning.raider_scale.0..=tuning.raider_scale.1);
        let size = Vec2::splat(RAIDER_BASE_SIZE * scale);
        let rect = Rect::new(Vec2::new(x, 0.0), size);
        Self {
            score_value: score_value_for(rect.area()),
            rect,
            vel: Vec2::new(0.0, RAIDER_DESCENT_SPEED),
            bound: rng.random_range(tuning.raider_halt_depth.0..=tuning.raider_halt_depth.1),
            state: RaiderState::Descending,
            drop_interval: rng
                .random_range(tuning.raider_drop_interval.0..=tuning.raider_drop_interval.1),
        }
    }

    /// Descend one step; once the center reaches the halt depth the raider
    /// parks. The transition is one-way for the raider's whole life.
    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
        if self.state == RaiderState::Descending && self.rect.center.y >= self.bound {
            self.vel.y = 0.0;
            self.state = RaiderState::Halted;
        }
    }

    pub fn halted(&self) -> bool {
        self.state == RaiderState::Halted
    }
}

impl Body for Raider {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A bomb dropped by a halted raider, aimed at where the avatar was at
/// drop time. Straight-line, non-homing.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub rect: Rect,
    pub vel: Vec2,
    pub speed: f32,
    pub score_value: u64,
}

impl Hazard {
    /// Drop from just below `raider`, aimed at `avatar`'s current center.
    /// Falls straight down when the two centers coincide exactly.
    pub fn dropped_by<R: Rng>(raider: &Raider, avatar: &Avatar, rng: &mut R, tuning: &Tuning) -> Self {
        let radius = rng.random_range(tuning.hazard_radius.0..=tuning.hazard_radius.1);
        let size = Vec2::splat(2.0 * radius);
        let vel =
            geom::direction_between(&raider.rect, &avatar.rect).unwrap_or(Vec2::new(0.0, 1.0));
        let center = Vec2::new(
            raider.rect.center.x,
            raider.rect.center.y + raider.rect.height() / 2.0,
        );
        let rect = Rect::new(center, size);
        Self {
            score_value: score_value_for(rect.area()),
            rect,
            vel,
            speed: HAZARD_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.speed * self.vel);
    }

    pub fn in_bounds(&self, arena_w: f32, arena_h: f32) -> bool {
        geom::within_bounds(&self.rect, arena_w, arena_h) == (true, true)
    }
}

impl Body for Hazard {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// What a time-warp pickup does to the match timer when shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Extend,
    Shorten,
}

/// A collectible that alters remaining match time when destroyed by a
/// projectile. Evaporates on its own if ignored for too long.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub rect: Rect,
    pub kind: PickupKind,
    pub spawn_tick: u64,
}

impl Pickup {
    /// Spawn at a random position inside the arena margins.
    pub fn spawn<R: Rng>(rng: &mut R, now_tick: u64, arena_w: f32, arena_h: f32) -> Self {
        let kind = if rng.random_bool(0.5) {
            PickupKind::Extend
        } else {
            PickupKind::Shorten
        };
        let center = Vec2::new(
            rng.random_range(PICKUP_MARGIN..=arena_w - PICKUP_MARGIN),
            rng.random_range(PICKUP_MARGIN..=arena_h - PICKUP_MARGIN),
        );
        Self {
            rect: Rect::new(center, PICKUP_SIZE),
            kind,
            spawn_tick: now_tick,
        }
    }

    pub fn expired(&self, now_tick: u64, lifespan_ticks: u64) -> bool {
        now_tick.saturating_sub(self.spawn_tick) >= lifespan_ticks
    }
}

impl Body for Pickup {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A short-lived blast left behind by a destroyed raider or hazard.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    pub life: i32,
}

impl Explosion {
    /// Centered where the destroyed entity was at its time of death.
    pub fn at(center: Vec2, life: i32) -> Self {
        Self {
            rect: Rect::new(center, EXPLOSION_SIZE),
            life,
        }
    }

    pub fn advance(&mut self) {
        self.life -= 1;
    }

    pub fn alive(&self) -> bool {
        self.life >= 0
    }

    /// Which of the two mirrored blast images to show; flips every 10 ticks.
    pub fn frame(&self) -> u8 {
        ((self.life.max(0) / 10) % 2) as u8
    }
}

impl Body for Explosion {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

fn score_value_for(area: f32) -> u64 {
    ((area / 100.0) as u64).max(1)
}
