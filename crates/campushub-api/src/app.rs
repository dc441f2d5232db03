//! Application builder — wires repositories, auth components, and the
//! blob store into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use campushub_auth::admin::AdminCredentials;
use campushub_auth::jwt::{TokenDecoder, TokenEncoder};
use campushub_auth::password::PasswordHasher;
use campushub_auth::policy::AccessPolicy;
use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::repositories::faculty::FacultyRepository;
use campushub_database::repositories::resource::ResourceRepository;
use campushub_database::repositories::student::StudentRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Build the shared application state.
///
/// Everything in the state is constructed once here and read-only for
/// the life of the process; handlers receive it by injection, never as
/// ambient globals.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let blob_store = campushub_storage::build_blob_store(&config.storage).await?;

    Ok(AppState {
        token_encoder: Arc::new(TokenEncoder::new(&config.auth)),
        token_decoder: Arc::new(TokenDecoder::new(&config.auth)),
        password_hasher: Arc::new(PasswordHasher::new()),
        access_policy: Arc::new(AccessPolicy::new()),
        admin_credentials: Arc::new(AdminCredentials::new(&config.auth)),
        student_repo: Arc::new(StudentRepository::new(db_pool.clone())),
        faculty_repo: Arc::new(FacultyRepository::new(db_pool.clone())),
        resource_repo: Arc::new(ResourceRepository::new(db_pool.clone())),
        blob_store,
        db_pool,
        config: Arc::new(config),
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the CampusHub server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await?;
    tracing::info!(
        blob_provider = state.blob_store.provider_type(),
        "Application state initialized"
    );

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CampusHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CampusHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
