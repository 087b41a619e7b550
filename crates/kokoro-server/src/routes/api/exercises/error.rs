use crate::routes::error::{ErrorMessage, ErrorMessageProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ExerciseApiError {
    #[error("Unknown breathing exercise {0}")]
    UnknownVariant(String),
}

impl GetStatusCode for ExerciseApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownVariant(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl ErrorMessageProvider for ExerciseApiError {
    fn error_message(&self) -> ErrorMessage {
        ErrorMessage::new(self.to_string())
    }
}

impl IntoResponse for ExerciseApiError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
