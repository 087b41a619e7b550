use crate::routes;
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{HeaderValue, Method, header};
use kokoro_core::journal::SharedJournalStore;
use sentry_tower::{NewSentryLayer, SentryHttpLayer};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub(crate) fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));
    if origins.is_empty() {
        tracing::info!("no cors origins configured, only same origin requests are allowed");
        return Ok(cors);
    }
    tracing::info!(?origins, "allowing origins");
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cors.allow_origin(origins))
}

/// Routes without the process-global layers, so tests can build as many as they like.
pub(crate) fn create_router(store: SharedJournalStore, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api",
            Router::new()
                .nest("/journal-entries", routes::api::journal::create_router())
                .nest("/exercises", routes::api::exercises::create_router())
                .route("/health", get(routes::api::get_health))
                .layer(cors),
        )
        .layer(Extension(store))
}

pub(crate) fn create_app(store: SharedJournalStore, origins: &[String]) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("kokoro")
        .with_default_metrics()
        .build_pair();

    let app = create_router(store, cors_layer(origins)?)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer),
        );
    Ok(app)
}
