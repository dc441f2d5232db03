//! # campushub-api
//!
//! HTTP API layer for CampusHub built on Axum.
//!
//! Provides the auth, profile, and resource endpoints, the session
//! cookie transport, the authentication gate extractor, CORS, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod multipart;
pub mod router;
pub mod session;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
