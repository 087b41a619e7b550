use crate::routes::error::{ErrorMessage, ErrorMessageProvider, GetStatusCode, error_to_axum_response};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use kokoro_core::journal::error::JournalError;
use kokoro_model::journal::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JournalOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl JournalOperation {
    fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch journal entries",
            Self::Get => "Failed to fetch journal entry",
            Self::Create => "Failed to create journal entry",
            Self::Update => "Failed to update journal entry",
            Self::Delete => "Failed to delete journal entry",
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum JournalApiError {
    #[error("Malformed journal entry payload")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Journal entry could not be found")]
    NotFound,

    #[error("{}", operation.failure_message())]
    Unavailable {
        operation: JournalOperation,
        #[source]
        source: JournalError,
    },
}

impl JournalApiError {
    /// Converts store failures raised while performing `operation`.
    pub(crate) fn store(operation: JournalOperation) -> impl Copy + Fn(JournalError) -> Self {
        move |error| match error {
            JournalError::Validation(error) => Self::Invalid(error),
            JournalError::NotFound(_) => Self::NotFound,
            source @ JournalError::Poisoned => Self::Unavailable { operation, source },
        }
    }
}

impl GetStatusCode for JournalApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorMessageProvider for JournalApiError {
    fn error_message(&self) -> ErrorMessage {
        match self {
            Self::InvalidBody(rejection) => {
                ErrorMessage::new(format!("Invalid journal entry data: {}", rejection.body_text()))
            }
            Self::Invalid(error) => ErrorMessage::new(format!("Invalid journal entry data: {error}")),
            Self::NotFound => ErrorMessage::new("Journal entry not found"),
            Self::Unavailable { operation, .. } => ErrorMessage::new(operation.failure_message()),
        }
    }
}

impl IntoResponse for JournalApiError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
