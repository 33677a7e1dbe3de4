//! API routes
//!
//! - [`health`] - health check
//! - [`employee`] - employee CRUD
//! - [`department`] - department CRUD
//! - [`statistics`] - employee statistics

pub mod department;
pub mod employee;
pub mod health;
pub mod statistics;

use axum::routing::get;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .merge(employee::router())
        .merge(statistics::router())
        .merge(department::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from the configured allow-list.
///
/// An empty list means any origin, matching the admin tool's default
/// deployment behind a trusted reverse proxy.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
}
