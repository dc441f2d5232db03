//! Route definitions for the CampusHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(resource_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state.config.server.cors))
        .with_state(state)
}

/// Auth endpoints: per-kind signup/login, admin login, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/student/signup", post(handlers::auth::student_signup))
        .route("/auth/student/login", post(handlers::auth::student_login))
        .route("/auth/faculty/signup", post(handlers::auth::faculty_signup))
        .route("/auth/faculty/login", post(handlers::auth::faculty_login))
        .route("/auth/admin/login", post(handlers::auth::admin_login))
        .route("/auth/logout", get(handlers::auth::logout))
}

/// Authenticated profile endpoint.
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile/me", get(handlers::profile::me))
}

/// Resource endpoints: public listing/detail/download, member upload,
/// admin deletion.
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(handlers::resource::list))
        .route("/resources/upload", post(handlers::resource::upload))
        .route(
            "/resources/{id}",
            get(handlers::resource::get).delete(handlers::resource::delete),
        )
        .route("/resources/{id}/download", get(handlers::resource::download))
}

/// Liveness endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
