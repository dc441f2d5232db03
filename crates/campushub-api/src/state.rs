//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use campushub_auth::admin::AdminCredentials;
use campushub_auth::jwt::{TokenDecoder, TokenEncoder};
use campushub_auth::password::PasswordHasher;
use campushub_auth::policy::AccessPolicy;
use campushub_core::config::AppConfig;
use campushub_core::traits::BlobStore;

use campushub_database::repositories::faculty::FacultyRepository;
use campushub_database::repositories::resource::ResourceRepository;
use campushub_database::repositories::student::StudentRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks and are read-only after
/// startup; no handler mutates shared state.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Blob store provider
    pub blob_store: Arc<dyn BlobStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token encoder
    pub token_encoder: Arc<TokenEncoder>,
    /// Session token decoder and validator
    pub token_decoder: Arc<TokenDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Role/operation access policy
    pub access_policy: Arc<AccessPolicy>,
    /// Fixed admin credentials
    pub admin_credentials: Arc<AdminCredentials>,

    // ── Repositories ─────────────────────────────────────────
    /// Student credential store adapter
    pub student_repo: Arc<StudentRepository>,
    /// Faculty credential store adapter
    pub faculty_repo: Arc<FacultyRepository>,
    /// Resource record store adapter
    pub resource_repo: Arc<ResourceRepository>,
}
