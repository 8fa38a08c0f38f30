//! Collision detection and resolution
//!
//! Runs once per tick after every entity has advanced. Group tests are
//! rectangle-overlap only; each overlapping pair destroys both members,
//! and the side effects (score, gauge, timer, explosions, reaction poses)
//! are applied while the destroyed entities are removed. Removal happens
//! here, atomically, so nothing else in the same tick can see a dead
//! entity.
//!
//! Resolution order matters and is fixed: raiders, then hazards, then
//! pickups, then the hazard-versus-avatar check that ends the match.

use super::entity::{Body, Explosion, PickupKind, Pose};
use super::state::MatchState;
use crate::consts::{HAZARD_EXPLOSION_LIFE, RAIDER_EXPLOSION_LIFE};

/// Resolve every collision group for this tick. Returns true when a
/// hazard reached the avatar, which unconditionally ends the match.
pub fn resolve(state: &mut MatchState) -> bool {
    strike_raiders(state);
    strike_hazards(state);
    strike_pickups(state);
    avatar_struck(state)
}

/// Flag every (projectile, target) pair that overlaps. A single
/// projectile can take several targets down with it in the same tick.
fn mark_pairs<A: Body, B: Body>(projectiles: &[A], targets: &[B]) -> (Vec<bool>, Vec<bool>) {
    let mut dead_proj = vec![false; projectiles.len()];
    let mut dead_target = vec![false; targets.len()];
    for (pi, proj) in projectiles.iter().enumerate() {
        for (ti, target) in targets.iter().enumerate() {
            if proj.rect().overlaps(target.rect()) {
                dead_proj[pi] = true;
                dead_target[ti] = true;
            }
        }
    }
    (dead_proj, dead_target)
}

fn retain_live<T>(items: &mut Vec<T>, dead: &[bool]) {
    let mut i = 0;
    items.retain(|_| {
        let keep = !dead[i];
        i += 1;
        keep
    });
}

fn strike_raiders(state: &mut MatchState) {
    let (dead_proj, dead_raider) = mark_pairs(&state.projectiles, &state.raiders);
    let mut kills = 0u32;
    for (raider, _) in state
        .raiders
        .iter()
        .zip(&dead_raider)
        .filter(|&(_, &dead)| dead)
    {
        state
            .explosions
            .push(Explosion::at(raider.rect.center, RAIDER_EXPLOSION_LIFE));
        state.score.add(raider.score_value);
        state.gauge.charge();
        kills += 1;
    }
    if kills > 0 {
        state.avatar.strike_pose(Pose::Joy);
        log::debug!("tick {}: {kills} raider(s) down", state.tick);
    }
    retain_live(&mut state.raiders, &dead_raider);
    retain_live(&mut state.projectiles, &dead_proj);
}

fn strike_hazards(state: &mut MatchState) {
    let (dead_proj, dead_hazard) = mark_pairs(&state.projectiles, &state.hazards);
    for (hazard, _) in state
        .hazards
        .iter()
        .zip(&dead_hazard)
        .filter(|&(_, &dead)| dead)
    {
        state
            .explosions
            .push(Explosion::at(hazard.rect.center, HAZARD_EXPLOSION_LIFE));
        state.score.add(hazard.score_value);
    }
    retain_live(&mut state.hazards, &dead_hazard);
    retain_live(&mut state.projectiles, &dead_proj);
}

fn strike_pickups(state: &mut MatchState) {
    let (dead_proj, dead_pickup) = mark_pairs(&state.projectiles, &state.pickups);
    for (pickup, _) in state
        .pickups
        .iter()
        .zip(&dead_pickup)
        .filter(|&(_, &dead)| dead)
    {
        match pickup.kind {
            PickupKind::Extend => state.timer.extend(state.tuning.extend_secs),
            PickupKind::Shorten => state.timer.shorten(state.tuning.shorten_secs),
        }
        log::debug!("tick {}: pickup shot ({:?})", state.tick, pickup.kind);
    }
    retain_live(&mut state.pickups, &dead_pickup);
    retain_live(&mut state.projectiles, &dead_proj);
}

/// Any hazard overlapping the avatar is consumed and ends the match.
fn avatar_struck(state: &mut MatchState) -> bool {
    let avatar_rect = state.avatar.rect;
    let before = state.hazards.len();
    state.hazards.retain(|h| !h.rect.overlaps(&avatar_rect));
    let hit = state.hazards.len() != before;
    if hit {
        state.avatar.strike_pose(Pose::Sorrow);
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::{Hazard, Pickup, Projectile, Raider, RaiderState};
    use crate::sim::geom::Rect;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> MatchState {
        MatchState::new(Tuning::default(), 1)
    }

    fn projectile_at(x: f32, y: f32) -> Projectile {
        Projectile {
            rect: Rect::new(Vec2::new(x, y), PROJECTILE_SIZE),
            vel: Vec2::new(1.0, 0.0),
            speed: PROJECTILE_SPEED,
        }
    }

    fn raider_at(x: f32, y: f32) -> Raider {
        Raider {
            rect: Rect::new(Vec2::new(x, y), Vec2::splat(RAIDER_BASE_SIZE)),
            vel: Vec2::ZERO,
            bound: y,
            state: RaiderState::Halted,
            drop_interval: 100,
            score_value: 16,
        }
    }

    fn hazard_at(x: f32, y: f32) -> Hazard {
        Hazard {
            rect: Rect::new(Vec2::new(x, y), Vec2::splat(40.0)),
            vel: Vec2::new(0.0, 1.0),
            speed: HAZARD_SPEED,
            score_value: 16,
        }
    }

    fn pickup_at(x: f32, y: f32, kind: PickupKind) -> Pickup {
        Pickup {
            rect: Rect::new(Vec2::new(x, y), PICKUP_SIZE),
            kind,
            spawn_tick: 0,
        }
    }

    #[test]
    fn projectile_and_raider_destroy_each_other() {
        let mut s = state();
        s.projectiles.push(projectile_at(200.0, 100.0));
        s.raiders.push(raider_at(200.0, 100.0));
        let hit = resolve(&mut s);
        assert!(!hit);
        assert!(s.projectiles.is_empty());
        assert!(s.raiders.is_empty());
        assert_eq!(s.score.value(), 16);
        assert_eq!(s.gauge.value(), 1);
        assert_eq!(s.avatar.pose, Pose::Joy);
        assert_eq!(s.explosions.len(), 1);
        assert_eq!(s.explosions[0].life, RAIDER_EXPLOSION_LIFE);
        assert_eq!(s.explosions[0].rect.center, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn one_projectile_can_down_several_raiders() {
        let mut s = state();
        s.projectiles.push(projectile_at(200.0, 100.0));
        s.raiders.push(raider_at(195.0, 100.0));
        s.raiders.push(raider_at(210.0, 100.0));
        resolve(&mut s);
        assert!(s.raiders.is_empty());
        assert!(s.projectiles.is_empty());
        assert_eq!(s.score.value(), 32);
        assert_eq!(s.gauge.value(), 2);
        assert_eq!(s.explosions.len(), 2);
    }

    #[test]
    fn distant_entities_are_left_alone() {
        let mut s = state();
        s.projectiles.push(projectile_at(100.0, 100.0));
        s.raiders.push(raider_at(600.0, 100.0));
        s.hazards.push(hazard_at(600.0, 400.0));
        let hit = resolve(&mut s);
        assert!(!hit);
        assert_eq!(s.projectiles.len(), 1);
        assert_eq!(s.raiders.len(), 1);
        assert_eq!(s.hazards.len(), 1);
        assert_eq!(s.score.value(), 0);
    }

    #[test]
    fn shooting_a_hazard_scores_without_charging_the_gauge() {
        let mut s = state();
        s.projectiles.push(projectile_at(300.0, 200.0));
        s.hazards.push(hazard_at(300.0, 200.0));
        resolve(&mut s);
        assert!(s.hazards.is_empty());
        assert!(s.projectiles.is_empty());
        assert_eq!(s.score.value(), 16);
        assert_eq!(s.gauge.value(), 0);
        assert_eq!(s.explosions.len(), 1);
        assert_eq!(s.explosions[0].life, HAZARD_EXPLOSION_LIFE);
    }

    #[test]
    fn shooting_an_extend_pickup_adds_time() {
        let mut s = state();
        let before = s.timer.total_secs();
        s.projectiles.push(projectile_at(400.0, 300.0));
        s.pickups.push(pickup_at(400.0, 300.0, PickupKind::Extend));
        resolve(&mut s);
        assert!(s.pickups.is_empty());
        assert!(s.projectiles.is_empty());
        assert_eq!(s.timer.total_secs(), before + s.tuning.extend_secs);
    }

    #[test]
    fn shooting_a_shorten_pickup_removes_time() {
        let mut s = state();
        let before = s.timer.total_secs();
        s.projectiles.push(projectile_at(400.0, 300.0));
        s.pickups.push(pickup_at(400.0, 300.0, PickupKind::Shorten));
        resolve(&mut s);
        assert_eq!(s.timer.total_secs(), before - s.tuning.shorten_secs);
    }

    #[test]
    fn hazard_reaching_the_avatar_ends_the_match() {
        let mut s = state();
        let c = s.avatar.rect.center;
        s.hazards.push(hazard_at(c.x, c.y));
        let hit = resolve(&mut s);
        assert!(hit);
        assert!(s.hazards.is_empty());
        assert_eq!(s.avatar.pose, Pose::Sorrow);
    }

    #[test]
    fn projectile_shields_nothing_from_the_avatar_check() {
        // A projectile striking one hazard does not save the avatar from a
        // second hazard sitting on top of it.
        let mut s = state();
        let c = s.avatar.rect.center;
        s.projectiles.push(projectile_at(300.0, 200.0));
        s.hazards.push(hazard_at(300.0, 200.0));
        s.hazards.push(hazard_at(c.x, c.y));
        let hit = resolve(&mut s);
        assert!(hit);
        assert!(s.hazards.is_empty());
        assert_eq!(s.score.value(), 16);
    }
}
