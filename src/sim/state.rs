//! Match state
//!
//! Everything one running match owns: entity collections, meters, the
//! seeded RNG, and the phase machine. The loop controller holds exactly
//! one of these and threads it through `tick`, `collision::resolve`, and
//! `spawn::run`; nothing else keeps references into it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Avatar, Explosion, Hazard, Pickup, Projectile, Raider};
use super::meters::{MatchTimer, Score, SpecialGauge};
use crate::consts::*;
use crate::tuning::Tuning;

/// Where the match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Normal play
    Running,
    /// Simulation frozen, rendering continues
    Paused,
    /// A hazard reached the avatar; holding the final frame
    AvatarDefeated,
    /// The clock ran out; holding the final frame
    TimeExpired,
    /// Terminal display done, loop should stop
    Exited,
}

/// Complete state of one match.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub tuning: Tuning,
    /// Seed this match's RNG was created from, for reproducing a run
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter; all in-game time derives from this
    pub tick: u64,
    pub phase: MatchPhase,
    /// Remaining hold time while in a terminal display phase
    pub phase_ticks: u32,
    pub avatar: Avatar,
    pub projectiles: Vec<Projectile>,
    pub raiders: Vec<Raider>,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub timer: MatchTimer,
    pub gauge: SpecialGauge,
}

impl MatchState {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let timer = MatchTimer::new(tuning.match_secs, 0);
        let gauge = SpecialGauge::new(tuning.gauge_max);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            phase: MatchPhase::Running,
            phase_ticks: 0,
            avatar: Avatar::new(AVATAR_START),
            projectiles: Vec::new(),
            raiders: Vec::new(),
            hazards: Vec::new(),
            pickups: Vec::new(),
            explosions: Vec::new(),
            score: Score::new(),
            timer,
            gauge,
            tuning,
        }
    }

    /// True once the terminal display hold has elapsed.
    pub fn finished(&self) -> bool {
        self.phase == MatchPhase::Exited
    }

    /// Enter a terminal display phase for `hold_ticks` of banner time.
    pub fn end_match(&mut self, phase: MatchPhase, hold_ticks: u32) {
        debug_assert!(matches!(
            phase,
            MatchPhase::AvatarDefeated | MatchPhase::TimeExpired
        ));
        self.phase = phase;
        self.phase_ticks = hold_ticks;
        log::info!(
            "match over ({:?}) at tick {}, score {}",
            phase,
            self.tick,
            self.score.value()
        );
    }
}
