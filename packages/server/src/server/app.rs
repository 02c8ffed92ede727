//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    can_delete_member_handler, delete_member_handler, finalized_counts_handler, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Build the Axum application router with production dependencies
pub fn build_app(pool: PgPool) -> Router {
    let server_deps = ServerDeps::new(pool.clone());
    build_app_with_deps(pool, server_deps)
}

/// Build the Axum application router around existing dependencies
///
/// Tests use this to swap in mock lookups while keeping real routing.
pub fn build_app_with_deps(pool: PgPool, server_deps: ServerDeps) -> Router {
    let app_state = AxumAppState {
        db_pool: pool,
        server_deps: Arc::new(server_deps),
    };

    // CORS configuration - the admin SPA is served from a separate origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Members
        .route(
            "/api/churches/:church_id/members/:member_id/can-delete",
            get(can_delete_member_handler),
        )
        .route(
            "/api/churches/:church_id/members/:member_id",
            delete(delete_member_handler),
        )
        // Counts
        .route(
            "/api/churches/:church_id/counts/finalized",
            get(finalized_counts_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
