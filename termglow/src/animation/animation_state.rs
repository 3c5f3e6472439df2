// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use strum_macros::Display;

use crate::{Effect, InlineString, Outcome, Theme, filled_columns};

/// Lifecycle of an animation. Transitions only move forward, and `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Progress, presentation, and lifecycle shared by [`crate::ProgressBar`] and
/// [`crate::Spinner`]. It does no I/O.
///
/// `current` is kept in `[0, total]` by every mutator.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    current: u64,
    total: u64,
    label: InlineString,
    started_at: Option<Instant>,
    phase: AnimationPhase,
    pub theme: Theme,
    pub effect: Effect,
}

impl AnimationState {
    #[must_use]
    pub fn new(total: u64, label: &str, theme: Theme, effect: Effect) -> Self {
        Self {
            current: 0,
            total,
            label: label.into(),
            started_at: None,
            phase: AnimationPhase::Idle,
            theme,
            effect,
        }
    }

    /// Moves `Idle` to `Running` and records `now` as the start time. Returns `false`
    /// (and changes nothing) in any other phase.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.phase != AnimationPhase::Idle {
            return false;
        }
        self.phase = AnimationPhase::Running;
        self.started_at = Some(now);
        true
    }

    /// Returns `false` if the animation is already finished.
    pub fn set(&mut self, value: u64) -> bool {
        if self.phase == AnimationPhase::Finished {
            return false;
        }
        self.current = value.min(self.total);
        true
    }

    /// `delta` may be negative. The result saturates at `0` and `total`.
    pub fn add(&mut self, delta: i64) -> bool {
        let magnitude = delta.unsigned_abs();
        let value = if delta >= 0 {
            self.current.saturating_add(magnitude)
        } else {
            self.current.saturating_sub(magnitude)
        };
        self.set(value)
    }

    /// Moves `Running` to `Finished`. A successful outcome also fills the bar. Returns
    /// `false` (and changes nothing) from `Idle` or `Finished`.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.phase != AnimationPhase::Running {
            return false;
        }
        if outcome == Outcome::Success {
            self.current = self.total;
        }
        self.phase = AnimationPhase::Finished;
        true
    }

    /// Like [`Self::finish()`] but leaves `current` untouched.
    pub fn close(&mut self) -> bool {
        if self.phase != AnimationPhase::Running {
            return false;
        }
        self.phase = AnimationPhase::Finished;
        true
    }

    pub fn set_label(&mut self, label: &str) { self.label = label.into(); }

    #[must_use]
    pub fn current(&self) -> u64 { self.current }

    #[must_use]
    pub fn total(&self) -> u64 { self.total }

    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase { self.phase }

    #[must_use]
    pub fn is_running(&self) -> bool { self.phase == AnimationPhase::Running }

    /// In `[0, 100]`. Zero when `total` is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// `current * 100 / total` rounded down, for display. Computed with integers, so
    /// it never lands one below an exact percentage.
    #[must_use]
    pub fn whole_percent(&self) -> u8 {
        u8::try_from(filled_columns(self.current, self.total, 100)).unwrap_or(100)
    }

    /// Filled columns in a bar `width` wide. See [`filled_columns()`].
    #[must_use]
    pub fn filled_columns(&self, width: usize) -> usize {
        filled_columns(self.current, self.total, width)
    }

    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        self.started_at
            .map(|started_at| now.saturating_duration_since(started_at))
            .unwrap_or_default()
    }

    /// Remaining time at the average rate observed so far. Zero when there is no rate
    /// to extrapolate from.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn eta_at(&self, now: Instant) -> Duration {
        if self.started_at.is_none() || self.current == 0 {
            return Duration::ZERO;
        }
        let elapsed_secs = self.elapsed_at(now).as_secs_f64();
        let rate = self.current as f64 / elapsed_secs;
        if !rate.is_finite() || rate <= 0.0 {
            return Duration::ZERO;
        }
        let remaining = (self.total - self.current) as f64 / rate;
        Duration::try_from_secs_f64(remaining).unwrap_or_default()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration { self.elapsed_at(Instant::now()) }

    #[must_use]
    pub fn eta(&self) -> Duration { self.eta_at(Instant::now()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn state(total: u64) -> AnimationState {
        AnimationState::new(total, "work", Theme::default(), Effect::None)
    }

    #[test]
    fn test_phase_transitions_are_one_way() {
        let mut it = state(10);
        let now = Instant::now();

        assert!(!it.finish(Outcome::Success));
        assert_eq!(it.phase(), AnimationPhase::Idle);

        assert!(it.start_at(now));
        assert!(!it.start_at(now));
        assert_eq!(it.phase(), AnimationPhase::Running);

        assert!(it.finish(Outcome::Success));
        assert!(!it.finish(Outcome::Failure));
        assert!(!it.start_at(now));
        assert_eq!(it.phase(), AnimationPhase::Finished);
    }

    #[test_case(10, 5, 5)]
    #[test_case(10, 15, 10)]
    #[test_case(0, 3, 0)]
    fn test_set_clamps(total: u64, value: u64, expected: u64) {
        let mut it = state(total);
        it.set(value);
        assert_eq!(it.current(), expected);
    }

    #[test_case(3, -5, 0)]
    #[test_case(3, 4, 7)]
    #[test_case(3, i64::MAX, 10)]
    #[test_case(3, i64::MIN, 0)]
    fn test_add_saturates(start: u64, delta: i64, expected: u64) {
        let mut it = state(10);
        it.set(start);
        it.add(delta);
        assert_eq!(it.current(), expected);
    }

    #[test]
    fn test_finished_state_ignores_updates() {
        let mut it = state(10);
        it.start_at(Instant::now());
        it.set(4);
        it.finish(Outcome::Failure);
        assert_eq!(it.current(), 4);
        assert!(!it.set(8));
        assert!(!it.add(1));
        assert_eq!(it.current(), 4);
    }

    #[test]
    fn test_success_fills_bar() {
        let mut it = state(10);
        it.start_at(Instant::now());
        it.set(2);
        it.finish(Outcome::Success);
        assert_eq!(it.current(), 10);
    }

    #[test]
    fn test_close_keeps_current() {
        let mut it = state(10);
        it.start_at(Instant::now());
        it.set(2);
        assert!(it.close());
        assert_eq!(it.current(), 2);
        assert_eq!(it.phase(), AnimationPhase::Finished);
    }

    #[test_case(0, 0, 0.0)]
    #[test_case(10, 5, 50.0)]
    #[test_case(3, 1, 100.0 / 3.0)]
    #[test_case(4, 4, 100.0)]
    fn test_percent(total: u64, current: u64, expected: f64) {
        let mut it = state(total);
        it.set(current);
        assert!((it.percent() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_whole_percent_rounds_down() {
        let mut it = state(3);
        it.set(2);
        assert_eq!(it.whole_percent(), 66);
        assert_eq!(it.filled_columns(10), 6);
    }

    #[test]
    fn test_elapsed_and_eta_before_start_are_zero() {
        let it = state(10);
        let now = Instant::now();
        assert_eq!(it.elapsed_at(now), Duration::ZERO);
        assert_eq!(it.eta_at(now), Duration::ZERO);
    }

    #[test]
    fn test_eta_extrapolates_average_rate() {
        let mut it = state(10);
        let started_at = Instant::now();
        it.start_at(started_at);

        let later = started_at + Duration::from_secs(4);
        assert_eq!(it.eta_at(later), Duration::ZERO);

        it.set(2);
        assert_eq!(it.elapsed_at(later), Duration::from_secs(4));
        // 2 units in 4s, 8 units left.
        assert_eq!(it.eta_at(later), Duration::from_secs(16));
    }

    #[test]
    fn test_eta_with_no_elapsed_time_is_zero() {
        let mut it = state(10);
        let now = Instant::now();
        it.start_at(now);
        it.set(5);
        assert_eq!(it.eta_at(now), Duration::ZERO);
    }
}
