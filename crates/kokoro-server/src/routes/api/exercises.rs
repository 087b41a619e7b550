pub(crate) mod error;

use crate::routes::api::exercises::error::ExerciseApiError;
use crate::routes::error::ErrorMessage;
use axum::Json;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use kokoro_core::exercise;
use kokoro_model::exercise::breathing::BreathingVariant;
use kokoro_model::exercise::{BreathingExercise, ExerciseCatalog};
use std::str::FromStr;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_exercises))
        .route("/breathing/{variant}", get(get_breathing_exercise))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/exercises",
    responses(
        (status = OK, description = "Breathing, grounding and gratitude exercises", body = ExerciseCatalog),
    ),
    tag = "exercises"
)]
pub(crate) async fn get_exercises() -> impl IntoResponse {
    Json(exercise::catalog())
}

#[utoipa::path(
    get,
    path = "/api/exercises/breathing/{variant}",
    params(("variant" = BreathingVariant, Path, description = "Breathing pattern")),
    responses(
        (status = OK, description = "Schedule of one breathing pattern", body = BreathingExercise),
        (status = NOT_FOUND, description = "Unknown pattern", body = ErrorMessage),
    ),
    tag = "exercises"
)]
pub(crate) async fn get_breathing_exercise(Path(variant): Path<String>) -> Result<impl IntoResponse, ExerciseApiError> {
    let variant = BreathingVariant::from_str(&variant).map_err(|_| ExerciseApiError::UnknownVariant(variant))?;
    Ok(Json(BreathingExercise::from(variant)))
}
