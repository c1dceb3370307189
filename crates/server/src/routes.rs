use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::organizations::OrganizationStore;

pub mod organizations;

pub async fn health() -> Json<Health> {
    Json(Health::ok("Local database server is running"))
}

/// Build the full application router: static frontend, health, and the
/// organization CRUD surface.
pub fn build_router(store: Arc<OrganizationStore>, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (static + health)
    let public = Router::new()
        .nest_service("/", static_dir)
        .route("/api/health", get(health));

    // Organization API routes
    let api = Router::new()
        .route("/api/organizations", get(organizations::list_orphanages))
        .route("/api/organizations1", get(organizations::list_oldage_homes))
        .route(
            "/api/organization/:org_type",
            axum::routing::post(organizations::create),
        )
        .route(
            "/api/organization/:org_type/:id",
            get(organizations::get_by_id).delete(organizations::delete),
        )
        .route(
            "/api/organization/:org_type/:id/funding",
            axum::routing::put(organizations::update_funding),
        );

    // Compose
    public
        .merge(api)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
