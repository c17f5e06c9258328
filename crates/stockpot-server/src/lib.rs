//! HTTP JSON API for recipe records, backed by a MongoDB collection.

pub mod api;
pub mod db;
pub mod models;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub type AppState = Arc<db::Db>;

/// Builds the application router: the five /recipes endpoints, the OpenAPI
/// surface, and a permissive cross-origin policy.
pub fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/recipes", api::recipes::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(CorsLayer::permissive())
}
