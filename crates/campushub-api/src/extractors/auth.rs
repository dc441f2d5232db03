//! `AuthPrincipal` extractor — the authentication gate.
//!
//! Pulls the session token from the cookie jar, verifies it, and loads
//! the principal from the credential store selected by the token's role.
//! Every failure mode (absent cookie, malformed or expired token, record
//! deleted after issuance) surfaces as the same opaque 401 so callers
//! cannot probe token validity or account existence.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use campushub_core::error::AppError;
use campushub_entity::principal::{Principal, PrincipalRole};

use crate::error::ApiError;
use crate::session;
use crate::state::AppState;

/// Uniform rejection message for all authentication failures.
const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Extracted authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal {
    /// The resolved principal (password hash never serialized).
    pub principal: Principal,
    /// The role carried by the session token.
    pub role: PrincipalRole,
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = session::token_from_jar(&jar)
            .ok_or_else(|| ApiError(AppError::authentication(NOT_AUTHENTICATED)))?;

        let claims = state
            .token_decoder
            .verify(&token)
            .map_err(|_| ApiError(AppError::authentication(NOT_AUTHENTICATED)))?;

        let principal = match claims.role {
            PrincipalRole::Student => state
                .student_repo
                .find_by_id(claims.principal_id())
                .await
                .map_err(ApiError)?
                .map(Principal::Student),
            PrincipalRole::Faculty => state
                .faculty_repo
                .find_by_id(claims.principal_id())
                .await
                .map_err(ApiError)?
                .map(Principal::Faculty),
            // Admin has no credential store record; the identity comes
            // from configuration.
            PrincipalRole::Admin => Some(Principal::Admin(state.admin_credentials.principal())),
        };

        let principal = principal
            .ok_or_else(|| ApiError(AppError::authentication(NOT_AUTHENTICATED)))?;

        Ok(Self {
            role: claims.role,
            principal,
        })
    }
}
