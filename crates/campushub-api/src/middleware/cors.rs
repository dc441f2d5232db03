//! CORS layer configuration.
//!
//! The frontend runs on a separate origin and authenticates with the
//! session cookie, so credentialed requests must be allowed. A wildcard
//! origin cannot be combined with credentials; the origin list stays
//! explicit.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use campushub_core::config::app::CorsConfig;

/// Builds the CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
