//! Score, match timer, and special gauge
//!
//! Small accumulators with invariants worth protecting behind methods:
//! score never decreases, displayed time never goes negative, and the
//! gauge stays inside [0, max].

use crate::consts::TICK_RATE;

/// Monotonically non-decreasing match score.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    value: u64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u64) {
        self.value += points;
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Countdown clock for the match.
///
/// Elapsed time derives from the simulation tick counter, so a paused
/// match does not bleed time. The total duration is mutable at any moment
/// (time-warp pickups); queries recompute from scratch and clamp at zero.
#[derive(Debug, Clone, Copy)]
pub struct MatchTimer {
    total_secs: i64,
    start_tick: u64,
}

impl MatchTimer {
    pub fn new(total_secs: i64, now_tick: u64) -> Self {
        Self {
            total_secs,
            start_tick: now_tick,
        }
    }

    fn elapsed_secs(&self, now_tick: u64) -> i64 {
        (now_tick.saturating_sub(self.start_tick) / TICK_RATE as u64) as i64
    }

    /// Whole seconds remaining, never negative.
    pub fn time_left(&self, now_tick: u64) -> i64 {
        (self.total_secs - self.elapsed_secs(now_tick)).max(0)
    }

    pub fn is_expired(&self, now_tick: u64) -> bool {
        self.time_left(now_tick) <= 0
    }

    pub fn extend(&mut self, secs: i64) {
        self.total_secs += secs;
    }

    /// May drive the total below elapsed (or below zero); `time_left`
    /// clamps on display and the expiry check fires on the next query.
    pub fn shorten(&mut self, secs: i64) {
        self.total_secs -= secs;
    }

    pub fn total_secs(&self) -> i64 {
        self.total_secs
    }
}

/// Special-attack charge, filled one notch per raider kill.
#[derive(Debug, Clone, Copy)]
pub struct SpecialGauge {
    value: u8,
    max: u8,
}

impl SpecialGauge {
    pub fn new(max: u8) -> Self {
        Self { value: 0, max }
    }

    /// One notch, saturating at the maximum.
    pub fn charge(&mut self) {
        self.value = (self.value + 1).min(self.max);
    }

    pub fn ready(&self) -> bool {
        self.value == self.max
    }

    /// Spend the whole charge.
    pub fn consume(&mut self) {
        self.value = 0;
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max(&self) -> u8 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Score ─────────────────────────────────────────────────────────────

    #[test]
    fn score_accumulates() {
        let mut s = Score::new();
        s.add(10);
        s.add(3);
        assert_eq!(s.value(), 13);
    }

    // ── MatchTimer ────────────────────────────────────────────────────────

    #[test]
    fn timer_counts_down_in_whole_seconds() {
        let t = MatchTimer::new(60, 0);
        assert_eq!(t.time_left(0), 60);
        assert_eq!(t.time_left(TICK_RATE as u64 - 1), 60);
        assert_eq!(t.time_left(TICK_RATE as u64), 59);
        assert_eq!(t.time_left(60 * TICK_RATE as u64), 0);
    }

    #[test]
    fn timer_expires_exactly_when_time_runs_out() {
        let t = MatchTimer::new(2, 0);
        assert!(!t.is_expired(2 * TICK_RATE as u64 - 1));
        assert!(t.is_expired(2 * TICK_RATE as u64));
    }

    #[test]
    fn extend_and_shorten_shift_the_total() {
        let mut t = MatchTimer::new(60, 0);
        t.extend(40);
        assert_eq!(t.time_left(0), 100);
        t.shorten(5);
        assert_eq!(t.time_left(0), 95);
    }

    #[test]
    fn shorten_below_zero_clamps_on_display() {
        let mut t = MatchTimer::new(10, 0);
        t.shorten(1000);
        assert_eq!(t.time_left(0), 0);
        assert!(t.is_expired(0));
        // A later extend can still rescue the match.
        t.extend(1030);
        assert_eq!(t.time_left(0), 40);
    }

    #[test]
    fn timer_started_mid_match_ignores_earlier_ticks() {
        let t = MatchTimer::new(10, 500);
        assert_eq!(t.time_left(500), 10);
        assert_eq!(t.time_left(500 + 2 * TICK_RATE as u64), 8);
    }

    proptest! {
        #[test]
        fn time_left_is_never_negative(
            total in -500i64..500,
            delta in -500i64..500,
            now in 0u64..1_000_000,
        ) {
            let mut t = MatchTimer::new(total, 0);
            t.shorten(delta);
            prop_assert!(t.time_left(now) >= 0);
        }
    }

    // ── SpecialGauge ──────────────────────────────────────────────────────

    #[test]
    fn gauge_saturates_at_max() {
        let mut g = SpecialGauge::new(5);
        for _ in 0..12 {
            g.charge();
        }
        assert_eq!(g.value(), 5);
        assert!(g.ready());
    }

    #[test]
    fn gauge_is_ready_only_at_max() {
        let mut g = SpecialGauge::new(5);
        for _ in 0..4 {
            g.charge();
            assert!(!g.ready());
        }
        g.charge();
        assert!(g.ready());
    }

    #[test]
    fn consume_always_empties_the_gauge() {
        let mut g = SpecialGauge::new(5);
        g.charge();
        g.charge();
        g.consume();
        assert_eq!(g.value(), 0);
        assert!(!g.ready());
    }

    proptest! {
        #[test]
        fn gauge_stays_in_range(ops in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut g = SpecialGauge::new(5);
            for charge in ops {
                if charge { g.charge() } else { g.consume() }
                prop_assert!(g.value() <= g.max());
                prop_assert_eq!(g.ready(), g.value() == g.max());
            }
        }
    }
}
