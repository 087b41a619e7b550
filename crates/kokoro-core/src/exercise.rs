use kokoro_model::exercise::breathing::BreathingVariant;
use kokoro_model::exercise::{BreathingExercise, ExerciseCatalog, GratitudeExercise, GroundingStep};
use strum::IntoEnumIterator;

const GROUNDING: [(u8, &str, &str, &str); 5] = [
    (5, "see", "5 things you can see", "Look around and name them"),
    (4, "touch", "4 things you can touch", "Feel different textures"),
    (3, "hear", "3 things you can hear", "Listen carefully"),
    (2, "smell", "2 things you can smell", "Take a deep breath"),
    (1, "taste", "1 thing you can taste", "Notice any lingering tastes"),
];

const GRATITUDE_SLOTS: u8 = 3;

#[must_use]
pub fn breathing_exercises() -> Vec<BreathingExercise> {
    BreathingVariant::iter().map(BreathingExercise::from).collect()
}

#[must_use]
pub fn grounding_steps() -> Vec<GroundingStep> {
    GROUNDING
        .iter()
        .map(|&(count, sense, prompt, hint)| GroundingStep {
            count,
            sense: sense.to_owned(),
            prompt: prompt.to_owned(),
            hint: hint.to_owned(),
        })
        .collect()
}

#[must_use]
pub fn gratitude() -> GratitudeExercise {
    GratitudeExercise {
        slots: GRATITUDE_SLOTS,
        prompt: "Take a moment to reflect on three things you're grateful for today".to_owned(),
        placeholder: "I'm grateful for...".to_owned(),
    }
}

#[must_use]
pub fn catalog() -> ExerciseCatalog {
    ExerciseCatalog {
        breathing: breathing_exercises(),
        grounding: grounding_steps(),
        gratitude: gratitude(),
    }
}
