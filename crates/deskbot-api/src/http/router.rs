//! Axum router configuration with middleware.
//!
//! Middleware: permissive CORS and request tracing.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/conversation/{id}",
            get(handlers::conversation::get_conversation),
        )
        .route(
            "/conversation/{id}",
            delete(handlers::conversation::delete_conversation),
        )
        .route(
            "/conversation/{id}/summary",
            get(handlers::conversation::get_summary),
        )
        .route(
            "/conversations",
            get(handlers::conversation::list_conversations),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "healthy" }))
}
