pub(crate) mod exercises;
pub(crate) mod journal;

use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::StatusCode;
use kokoro_core::journal::SharedJournalStore;
use kokoro_core::status::get_journal_store_status;
use kokoro_model::status::ComponentStatus;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(Debug, Clone, ToSchema, Serialize)]
pub(crate) struct Status {
    journal: ComponentStatus,
}

impl Status {
    fn status_code(&self) -> StatusCode {
        if self.journal.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        (status_code, Json(self)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = OK, description = "Server is ok", body = Status, example = json!({"journal": "ok"})),
        (status = INTERNAL_SERVER_ERROR, description = "The journal store is unusable", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_health(Extension(store): Extension<SharedJournalStore>) -> impl IntoResponse {
    Status {
        journal: get_journal_store_status(&store),
    }
}
