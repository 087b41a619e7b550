pub mod error;
pub mod session;

use kokoro_model::exercise::breathing::{BreathPhase, BreathingVariant, TimerSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { elapsed_in_cycle: u32, phase: BreathPhase },
}

/// Countdown state machine of one breathing exercise.
///
/// `elapsed_in_cycle` is 1-based while running and wraps back to 1 after the last second of the
/// variant's cycle. The phase is always derived from it, never stored independently.
#[derive(Debug, Clone)]
pub struct BreathingTimer {
    variant: BreathingVariant,
    state: TimerState,
    ticks: u64,
    cycles_completed: u64,
}

impl BreathingTimer {
    #[must_use]
    pub fn new(variant: BreathingVariant) -> Self {
        Self {
            variant,
            state: TimerState::Idle,
            ticks: 0,
            cycles_completed: 0,
        }
    }

    #[must_use]
    pub fn variant(&self) -> BreathingVariant {
        self.variant
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Starts the session, or restarts it from the first second when already running.
    pub fn start(&mut self) {
        self.state = TimerState::Running {
            elapsed_in_cycle: 1,
            phase: self.variant.first_phase(),
        };
        self.ticks = 0;
        self.cycles_completed = 0;
    }

    pub fn tick(&mut self) {
        let TimerState::Running { elapsed_in_cycle, .. } = self.state else {
            return;
        };
        self.ticks += 1;
        let next = elapsed_in_cycle + 1;
        self.state = if next > self.variant.cycle_length() {
            self.cycles_completed += 1;
            TimerState::Running {
                elapsed_in_cycle: 1,
                phase: self.variant.first_phase(),
            }
        } else {
            TimerState::Running {
                elapsed_in_cycle: next,
                phase: self.phase_at(next),
            }
        };
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    #[must_use]
    pub fn elapsed_in_cycle(&self) -> u32 {
        match self.state {
            TimerState::Idle => 0,
            TimerState::Running { elapsed_in_cycle, .. } => elapsed_in_cycle,
        }
    }

    #[must_use]
    pub fn current_phase(&self) -> BreathPhase {
        match self.state {
            TimerState::Idle => self.variant.first_phase(),
            TimerState::Running { phase, .. } => phase,
        }
    }

    /// Seconds left in the current phase, including the current second.
    #[must_use]
    pub fn phase_remaining(&self) -> u32 {
        self.variant
            .locate(self.elapsed_in_cycle())
            .map_or(0, |position| position.remaining)
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            variant: self.variant,
            active: self.is_active(),
            elapsed_in_cycle: self.elapsed_in_cycle(),
            phase: self.current_phase(),
            phase_remaining: self.phase_remaining(),
            ticks: self.ticks,
            cycles_completed: self.cycles_completed,
        }
    }

    fn phase_at(&self, elapsed: u32) -> BreathPhase {
        self.variant
            .locate(elapsed)
            .map_or_else(|| self.variant.first_phase(), |position| position.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_log::test;

    fn started(variant: BreathingVariant) -> BreathingTimer {
        let mut timer = BreathingTimer::new(variant);
        timer.start();
        timer
    }

    /// Ticks until `elapsed_in_cycle` would read `second` in the first cycle.
    fn at_second(variant: BreathingVariant, second: u32) -> BreathingTimer {
        let mut timer = started(variant);
        for _ in 1..second {
            timer.tick();
        }
        timer
    }

    #[test]
    fn test_idle_defaults() {
        let timer = BreathingTimer::new(BreathingVariant::Anxiety);
        assert!(!timer.is_active());
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.elapsed_in_cycle(), 0);
        assert_eq!(timer.current_phase(), BreathPhase::Inhale);
        assert_eq!(timer.phase_remaining(), 0);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut timer = BreathingTimer::new(BreathingVariant::Box);
        timer.tick();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.ticks(), 0);
    }

    #[test]
    fn test_start() {
        let timer = started(BreathingVariant::Stress);
        assert_eq!(
            timer.state(),
            TimerState::Running {
                elapsed_in_cycle: 1,
                phase: BreathPhase::Inhale
            }
        );
        assert_eq!(timer.phase_remaining(), 5);
    }

    #[test]
    fn test_box_phases() {
        let variant = BreathingVariant::Box;
        assert_eq!(at_second(variant, 4).current_phase(), BreathPhase::Inhale);
        assert_eq!(at_second(variant, 5).current_phase(), BreathPhase::Hold);
        assert_eq!(at_second(variant, 9).current_phase(), BreathPhase::Exhale);
        assert_eq!(at_second(variant, 13).current_phase(), BreathPhase::Hold);
        assert_eq!(at_second(variant, 16).current_phase(), BreathPhase::Hold);
    }

    #[test]
    fn test_box_wraps_after_sixteen_ticks() {
        let mut timer = started(BreathingVariant::Box);
        for _ in 0..16 {
            timer.tick();
        }
        assert_eq!(timer.elapsed_in_cycle(), 1);
        assert_eq!(timer.current_phase(), BreathPhase::Inhale);
        assert_eq!(timer.cycles_completed(), 1);
        assert_eq!(timer.ticks(), 16);
    }

    #[test]
    fn test_panic_phases() {
        let mut timer = started(BreathingVariant::Panic);
        let mut observed = vec![(timer.elapsed_in_cycle(), timer.current_phase())];
        for _ in 0..6 {
            timer.tick();
            observed.push((timer.elapsed_in_cycle(), timer.current_phase()));
        }
        assert_eq!(
            observed,
            vec![
                (1, BreathPhase::Inhale),
                (2, BreathPhase::Inhale),
                (3, BreathPhase::Inhale),
                (4, BreathPhase::Exhale),
                (5, BreathPhase::Exhale),
                (6, BreathPhase::Exhale),
                (1, BreathPhase::Inhale),
            ]
        );
    }

    #[test]
    fn test_wrap_never_skips_a_second() {
        for variant in BreathingVariant::iter() {
            let mut timer = started(variant);
            let length = variant.cycle_length();
            for expected in (2..=length).chain(1..=length).chain(1..=3) {
                timer.tick();
                assert_eq!(timer.elapsed_in_cycle(), expected, "{variant}");
                assert_eq!(
                    timer.current_phase(),
                    variant.locate(expected).unwrap().phase,
                    "{variant}"
                );
            }
            assert_eq!(timer.cycles_completed(), 2, "{variant}");
        }
    }

    #[test]
    fn test_stop_resets_display() {
        let mut timer = at_second(BreathingVariant::Anxiety, 8);
        assert_eq!(timer.current_phase(), BreathPhase::Hold);
        timer.stop();
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed_in_cycle(), 0);
        assert_eq!(timer.current_phase(), BreathPhase::Inhale);
        assert_eq!(timer.ticks(), 7);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut timer = at_second(BreathingVariant::Panic, 5);
        timer.start();
        assert_eq!(timer.elapsed_in_cycle(), 1);
        assert_eq!(timer.ticks(), 0);
    }

    #[test]
    fn test_snapshot() {
        let snapshot = at_second(BreathingVariant::Box, 6).snapshot();
        assert_eq!(
            snapshot,
            TimerSnapshot {
                variant: BreathingVariant::Box,
                active: true,
                elapsed_in_cycle: 6,
                phase: BreathPhase::Hold,
                phase_remaining: 3,
                ticks: 5,
                cycles_completed: 0,
            }
        );
    }
}
