use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhaseStep {
    pub phase: BreathPhase,
    pub seconds: u32,
}

const fn step(phase: BreathPhase, seconds: u32) -> PhaseStep {
    PhaseStep { phase, seconds }
}

const BOX: [PhaseStep; 4] = [
    step(BreathPhase::Inhale, 4),
    step(BreathPhase::Hold, 4),
    step(BreathPhase::Exhale, 4),
    step(BreathPhase::Hold, 4),
];
const STRESS: [PhaseStep; 2] = [step(BreathPhase::Inhale, 5), step(BreathPhase::Exhale, 5)];
const ANXIETY: [PhaseStep; 3] = [
    step(BreathPhase::Inhale, 4),
    step(BreathPhase::Hold, 7),
    step(BreathPhase::Exhale, 8),
];
const PANIC: [PhaseStep; 2] = [step(BreathPhase::Inhale, 3), step(BreathPhase::Exhale, 3)];

/// A named breathing pattern. Every variant owns a fixed, non-empty schedule.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BreathingVariant {
    #[default]
    Box,
    Stress,
    /// 4-7-8 breathing.
    Anxiety,
    Panic,
}

/// Where a 1-based second of a cycle falls within the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePosition {
    pub phase: BreathPhase,
    /// 1-based second within the current phase.
    pub second: u32,
    /// Seconds left in the current phase, counting the current one.
    pub remaining: u32,
}

impl BreathingVariant {
    #[must_use]
    pub const fn schedule(self) -> &'static [PhaseStep] {
        match self {
            Self::Box => &BOX,
            Self::Stress => &STRESS,
            Self::Anxiety => &ANXIETY,
            Self::Panic => &PANIC,
        }
    }

    #[must_use]
    pub fn cycle_length(self) -> u32 {
        self.schedule().iter().map(|step| step.seconds).sum()
    }

    #[must_use]
    pub const fn first_phase(self) -> BreathPhase {
        self.schedule()[0].phase
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Box => "Box Breathing",
            Self::Stress => "Stress Relief",
            Self::Anxiety => "4-7-8 Breathing",
            Self::Panic => "Quick Calm",
        }
    }

    /// Cumulative-duration lookup of `elapsed` (1-based) in the schedule.
    ///
    /// Returns `None` for `0` and for values past the end of the cycle.
    #[must_use]
    pub fn locate(self, elapsed: u32) -> Option<PhasePosition> {
        if elapsed == 0 {
            return None;
        }
        let mut end = 0;
        for step in self.schedule() {
            let start = end;
            end += step.seconds;
            if elapsed <= end {
                return Some(PhasePosition {
                    phase: step.phase,
                    second: elapsed - start,
                    remaining: end - elapsed + 1,
                });
            }
        }
        None
    }
}

/// Read-only view of a breathing timer at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub variant: BreathingVariant,
    pub active: bool,
    pub elapsed_in_cycle: u32,
    pub phase: BreathPhase,
    pub phase_remaining: u32,
    pub ticks: u64,
    pub cycles_completed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cycle_lengths() {
        assert_eq!(BreathingVariant::Box.cycle_length(), 16);
        assert_eq!(BreathingVariant::Stress.cycle_length(), 10);
        assert_eq!(BreathingVariant::Anxiety.cycle_length(), 19);
        assert_eq!(BreathingVariant::Panic.cycle_length(), 6);
    }

    #[test]
    fn test_every_schedule_starts_with_inhale() {
        for variant in BreathingVariant::iter() {
            assert!(!variant.schedule().is_empty());
            assert_eq!(variant.first_phase(), BreathPhase::Inhale);
        }
    }

    #[test]
    fn test_locate_box_boundaries() {
        let variant = BreathingVariant::Box;
        let phases: Vec<_> = (1..=16).map(|s| variant.locate(s).unwrap().phase).collect();
        assert_eq!(&phases[0..4], &[BreathPhase::Inhale; 4]);
        assert_eq!(&phases[4..8], &[BreathPhase::Hold; 4]);
        assert_eq!(&phases[8..12], &[BreathPhase::Exhale; 4]);
        assert_eq!(&phases[12..16], &[BreathPhase::Hold; 4]);

        let second_hold = variant.locate(13).unwrap();
        assert_eq!(second_hold.phase, BreathPhase::Hold);
        assert_eq!(second_hold.second, 1);
        assert_eq!(second_hold.remaining, 4);
    }

    #[test]
    fn test_locate_out_of_range() {
        assert_eq!(BreathingVariant::Panic.locate(0), None);
        assert_eq!(BreathingVariant::Panic.locate(7), None);
    }

    #[test]
    fn test_locate_anxiety_exhale() {
        let position = BreathingVariant::Anxiety.locate(19).unwrap();
        assert_eq!(position.phase, BreathPhase::Exhale);
        assert_eq!(position.second, 8);
        assert_eq!(position.remaining, 1);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(BreathingVariant::from_str("anxiety").unwrap(), BreathingVariant::Anxiety);
        assert_eq!(BreathingVariant::Panic.to_string(), "panic");
        assert_eq!(
            serde_json::to_string(&BreathingVariant::Box).unwrap(),
            r#""box""#
        );
        assert!(BreathingVariant::from_str("yoga").is_err());
    }
}
