use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use utoipa::ToSchema;

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorMessage {
    pub(crate) message: Cow<'static, str>,
}

impl ErrorMessage {
    pub fn new<A: Into<Cow<'static, str>>>(message: A) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub(crate) trait ErrorMessageProvider {
    fn error_message(&self) -> ErrorMessage;
}

pub(crate) fn error_to_axum_response<T>(error: T) -> Response
where
    T: GetStatusCode + ErrorMessageProvider + Error + 'static,
{
    let status_code = error.status_code();
    if status_code.is_server_error() {
        tracing::error!(error = &error as &dyn Error, "request failed");
    } else {
        tracing::debug!(error = &error as &dyn Error, %status_code, "request rejected");
    }
    (status_code, Json(error.error_message())).into_response()
}
