pub(crate) mod error;

use crate::routes::api::journal::error::{JournalApiError, JournalOperation};
use crate::routes::error::ErrorMessage;
use axum::Extension;
use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use http::StatusCode;
use kokoro_core::journal::SharedJournalStore;
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::{JournalEntryUpdate, NewJournalEntry};
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_journal_entries).post(create_journal_entry))
        .route(
            "/{id}",
            get(get_journal_entry)
                .put(update_journal_entry)
                .delete(delete_journal_entry),
        )
        .with_state(())
}

/// An id that is not a uuid cannot name an entry.
fn parse_entry_id(id: &str) -> Result<Uuid, JournalApiError> {
    Uuid::parse_str(id).map_err(|_| JournalApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/journal-entries",
    responses(
        (status = OK, description = "All journal entries, most recent first", body = [JournalEntry]),
        (status = INTERNAL_SERVER_ERROR, description = "The journal could not be read", body = ErrorMessage),
    ),
    tag = "journal"
)]
pub(crate) async fn get_journal_entries(
    Extension(store): Extension<SharedJournalStore>,
) -> Result<impl IntoResponse, JournalApiError> {
    let entries = store
        .read()
        .map_err(JournalApiError::store(JournalOperation::List))?
        .list();
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/journal-entries",
    request_body = NewJournalEntry,
    responses(
        (status = CREATED, description = "Create journal entry", body = JournalEntry),
        (status = BAD_REQUEST, description = "Malformed payload or empty title/content", body = ErrorMessage),
        (status = INTERNAL_SERVER_ERROR, description = "The journal could not be written", body = ErrorMessage),
    ),
    tag = "journal"
)]
pub(crate) async fn create_journal_entry(
    Extension(store): Extension<SharedJournalStore>,
    payload: Result<Json<NewJournalEntry>, JsonRejection>,
) -> Result<impl IntoResponse, JournalApiError> {
    let Json(new_entry) = payload?;
    new_entry.validate()?;

    let failed = JournalApiError::store(JournalOperation::Create);
    let entry = store
        .write()
        .map_err(failed)?
        .create(new_entry.title, new_entry.content)
        .map_err(failed)?;
    tracing::info!(id = %entry.id, "journal entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/journal-entries/{id}",
    params(("id" = String, Path, description = "Journal entry id")),
    responses(
        (status = OK, description = "The journal entry", body = JournalEntry),
        (status = NOT_FOUND, description = "No entry with this id", body = ErrorMessage),
        (status = INTERNAL_SERVER_ERROR, description = "The journal could not be read", body = ErrorMessage),
    ),
    tag = "journal"
)]
pub(crate) async fn get_journal_entry(
    Extension(store): Extension<SharedJournalStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, JournalApiError> {
    let id = parse_entry_id(&id)?;
    let entry = store
        .read()
        .map_err(JournalApiError::store(JournalOperation::Get))?
        .get(&id)
        .cloned()
        .ok_or(JournalApiError::NotFound)?;
    Ok(Json(entry))
}

#[utoipa::path(
    put,
    path = "/api/journal-entries/{id}",
    params(("id" = String, Path, description = "Journal entry id")),
    request_body = JournalEntryUpdate,
    responses(
        (status = OK, description = "The updated journal entry", body = JournalEntry),
        (status = BAD_REQUEST, description = "Malformed payload or empty title/content", body = ErrorMessage),
        (status = NOT_FOUND, description = "No entry with this id", body = ErrorMessage),
        (status = INTERNAL_SERVER_ERROR, description = "The journal could not be written", body = ErrorMessage),
    ),
    tag = "journal"
)]
pub(crate) async fn update_journal_entry(
    Extension(store): Extension<SharedJournalStore>,
    Path(id): Path<String>,
    payload: Result<Json<JournalEntryUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, JournalApiError> {
    let Json(update) = payload?;
    update.validate()?;

    let id = parse_entry_id(&id)?;
    let failed = JournalApiError::store(JournalOperation::Update);
    let entry = store.write().map_err(failed)?.update(&id, update).map_err(failed)?;
    tracing::info!(%id, "journal entry updated");
    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/journal-entries/{id}",
    params(("id" = String, Path, description = "Journal entry id")),
    responses(
        (status = NO_CONTENT, description = "The entry was deleted"),
        (status = NOT_FOUND, description = "No entry with this id", body = ErrorMessage),
        (status = INTERNAL_SERVER_ERROR, description = "The journal could not be written", body = ErrorMessage),
    ),
    tag = "journal"
)]
pub(crate) async fn delete_journal_entry(
    Extension(store): Extension<SharedJournalStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, JournalApiError> {
    let id = parse_entry_id(&id)?;
    let deleted = store
        .write()
        .map_err(JournalApiError::store(JournalOperation::Delete))?
        .delete(&id);
    if !deleted {
        return Err(JournalApiError::NotFound);
    }
    tracing::info!(%id, "journal entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
