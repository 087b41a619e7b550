use crate::routes::api;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_health,
        api::journal::get_journal_entries,
        api::journal::create_journal_entry,
        api::journal::get_journal_entry,
        api::journal::update_journal_entry,
        api::journal::delete_journal_entry,
        api::exercises::get_exercises,
        api::exercises::get_breathing_exercise,
    ),
    tags(
        (name = "util", description = "Utility endpoints"),
        (name = "journal", description = "Journal entries"),
        (name = "exercises", description = "Breathing, grounding and gratitude exercises"),
    )
)]
struct ApiDoc;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
