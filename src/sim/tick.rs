//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick: firing input, entity
//! movement, collision resolution, spawning, then the terminal checks.
//! Everything in here is deterministic given the match seed and the input
//! sequence; no wall-clock, no I/O.

use glam::Vec2;

use super::collision;
use super::entity::{Projectile, spread_burst};
use super::spawn;
use super::state::{MatchPhase, MatchState};
use crate::consts::*;

/// Input commands for a single tick.
///
/// Directional fields mirror held keys; `fire`, `discharge`, and `pause`
/// are one-shot events the frontend delivers at most once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire a single projectile along the current facing
    pub fire: bool,
    /// Release the special burst, if the gauge is full
    pub discharge: bool,
    /// Toggle pause
    pub pause: bool,
}

impl TickInput {
    /// Sum of per-key unit deltas. Opposing keys cancel; diagonals are
    /// deliberately not normalized.
    pub fn movement(&self) -> Vec2 {
        let mut mv = Vec2::ZERO;
        if self.up {
            mv.y -= 1.0;
        }
        if self.down {
            mv.y += 1.0;
        }
        if self.left {
            mv.x -= 1.0;
        }
        if self.right {
            mv.x += 1.0;
        }
        mv
    }
}

/// Advance the match by one tick.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    match state.phase {
        MatchPhase::Exited => return,
        MatchPhase::Paused => {
            // Tick counter frozen, so timers and cadences freeze with it.
            if input.pause {
                state.phase = MatchPhase::Running;
                log::info!("resumed at tick {}", state.tick);
            }
            return;
        }
        MatchPhase::AvatarDefeated | MatchPhase::TimeExpired => {
            // Hold the final frame, then let the loop wind down.
            state.phase_ticks = state.phase_ticks.saturating_sub(1);
            if state.phase_ticks == 0 {
                state.phase = MatchPhase::Exited;
            }
            return;
        }
        MatchPhase::Running => {}
    }

    if input.pause {
        state.phase = MatchPhase::Paused;
        log::info!("paused at tick {}", state.tick);
        return;
    }

    // Firing happens before movement so the shot leaves from where the
    // player saw the avatar last frame.
    if input.fire {
        state.projectiles.push(Projectile::fired_by(&state.avatar));
    }
    if input.discharge && state.gauge.ready() {
        state
            .projectiles
            .extend(spread_burst(&state.avatar, BURST_PROJECTILES));
        state.gauge.consume();
        log::debug!("tick {}: gauge discharged", state.tick);
    }

    // Advance every entity, dropping the ones that leave the arena or age
    // out. The avatar clips instead of despawning.
    state
        .avatar
        .advance(input.movement(), ARENA_WIDTH, ARENA_HEIGHT);
    state.avatar.settle_pose();

    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state
        .projectiles
        .retain(|p| p.in_bounds(ARENA_WIDTH, ARENA_HEIGHT));

    for raider in &mut state.raiders {
        raider.advance();
    }

    for hazard in &mut state.hazards {
        hazard.advance();
    }
    state
        .hazards
        .retain(|h| h.in_bounds(ARENA_WIDTH, ARENA_HEIGHT));

    for explosion in &mut state.explosions {
        explosion.advance();
    }
    state.explosions.retain(|e| e.alive());

    let lifespan = state.tuning.pickup_lifespan_ticks();
    let now = state.tick;
    state.pickups.retain(|p| !p.expired(now, lifespan));

    // Collisions, then reinforcements.
    let avatar_hit = collision::resolve(state);
    spawn::run(state);

    // Terminal conditions. The avatar check comes first: a hazard strike
    // ends the match even on the exact tick the clock runs out.
    if avatar_hit {
        state.end_match(MatchPhase::AvatarDefeated, DEFEAT_DISPLAY_TICKS);
    } else if state.timer.is_expired(state.tick) {
        state.end_match(MatchPhase::TimeExpired, EXPIRY_DISPLAY_TICKS);
    }

    state.tick += 1;
}
