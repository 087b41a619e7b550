pub mod breathing;

use crate::exercise::breathing::{BreathingVariant, PhaseStep};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreathingExercise {
    pub variant: BreathingVariant,
    pub title: String,
    pub cycle_seconds: u32,
    pub schedule: Vec<PhaseStep>,
}

impl From<BreathingVariant> for BreathingExercise {
    fn from(variant: BreathingVariant) -> Self {
        Self {
            variant,
            title: variant.title().to_owned(),
            cycle_seconds: variant.cycle_length(),
            schedule: variant.schedule().to_vec(),
        }
    }
}

/// One sense of the 5-4-3-2-1 grounding exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroundingStep {
    pub count: u8,
    pub sense: String,
    pub prompt: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GratitudeExercise {
    pub slots: u8,
    pub prompt: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseCatalog {
    pub breathing: Vec<BreathingExercise>,
    pub grounding: Vec<GroundingStep>,
    pub gratitude: GratitudeExercise,
}
