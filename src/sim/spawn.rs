//! Spawning scheduler
//!
//! Tick-counted entity creation: raiders and pickups arrive on fixed
//! global cadences, hazards on each halted raider's own cadence. All
//! sampling goes through the match RNG so runs are reproducible.

use super::entity::{Hazard, Pickup, Raider};
use super::state::MatchState;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Run all spawners for the current tick.
pub fn run(state: &mut MatchState) {
    let MatchState {
        ref tuning,
        ref mut rng,
        tick,
        ref avatar,
        ref mut raiders,
        ref mut hazards,
        ref mut pickups,
        ..
    } = *state;

    // No population cap; late-match screens are supposed to get crowded.
    if tick.is_multiple_of(tuning.raider_spawn_interval) {
        let raider = Raider::spawn(rng, tuning, ARENA_WIDTH);
        log::debug!(
            "tick {tick}: raider at x={:.0}, halting at y={:.0}, dropping every {} ticks",
            raider.rect.center.x,
            raider.bound,
            raider.drop_interval
        );
        raiders.push(raider);
    }

    if tick.is_multiple_of(tuning.pickup_spawn_interval) {
        let pickup = Pickup::spawn(rng, tick, ARENA_WIDTH, ARENA_HEIGHT);
        log::debug!("tick {tick}: {:?} pickup", pickup.kind);
        pickups.push(pickup);
    }

    // Several halted raiders can all drop in the same tick.
    for raider in raiders.iter() {
        if raider.halted() && tick.is_multiple_of(raider.drop_interval) {
            hazards.push(Hazard::dropped_by(raider, avatar, rng, tuning));
        }
    }
}
