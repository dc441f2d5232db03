//! Profile handler.

use axum::Json;
use axum::extract::State;

use campushub_auth::policy::Operation;

use crate::dto::response::{PrincipalView, ProfileResponse, ResourceView};
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// GET /api/profile/me
///
/// Admin has no uploads concept; its profile carries an empty list.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<ProfileResponse>, ApiError> {
    state
        .access_policy
        .require(Some(auth.role), Operation::ViewOwnProfile)?;

    let uploads = if auth.role.has_stored_record() {
        state
            .resource_repo
            .find_by_uploader(auth.principal.id())
            .await?
    } else {
        Vec::new()
    };

    Ok(Json(ProfileResponse {
        user: PrincipalView::from(&auth.principal),
        uploaded_resources: uploads.into_iter().map(ResourceView::from).collect(),
    }))
}
