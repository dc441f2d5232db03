//! Resource handlers — public listing and download, member upload,
//! admin deletion.

use std::time::Duration;

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use campushub_auth::policy::Operation;
use campushub_core::error::AppError;
use campushub_entity::resource::{NewResource, ResourceType, UploaderRef};
use campushub_storage::cleanup::{BlobCleanup, delete_blob_best_effort};
use campushub_storage::key::{RESOURCE_PREFIX, object_key};

use crate::dto::request::ResourceListQuery;
use crate::dto::response::{
    DownloadUrlResponse, MessageResponse, ResourceListResponse, ResourceResponse, ResourceView,
    UploadResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::multipart;
use crate::state::AppState;

/// GET /api/resources
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> Result<Json<ResourceListResponse>, ApiError> {
    let resource_type = query
        .resource_type
        .as_deref()
        .map(str::parse::<ResourceType>)
        .transpose()?;

    let resources = state
        .resource_repo
        .search(query.q.as_deref(), resource_type)
        .await?;

    let resources: Vec<ResourceView> = resources.into_iter().map(ResourceView::from).collect();
    Ok(Json(ResourceListResponse {
        count: resources.len(),
        resources,
    }))
}

/// GET /api/resources/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = state
        .resource_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource not found"))?;

    Ok(Json(ResourceResponse {
        resource: resource.into(),
    }))
}

/// GET /api/resources/{id}/download
///
/// Hands out a time-limited signed URL; the file itself never streams
/// through the application.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DownloadUrlResponse>, ApiError> {
    let resource = state
        .resource_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource not found"))?;

    // Legacy rows may have a URL but no blob key; without the key there
    // is nothing to sign.
    let key = resource
        .file_key
        .as_deref()
        .ok_or_else(|| AppError::storage("Resource has no stored blob key"))?;

    let ttl = Duration::from_secs(state.config.storage.signed_url_ttl_seconds);
    let url = state.blob_store.signed_get_url(key, ttl).await?;

    Ok(Json(DownloadUrlResponse { url }))
}

/// POST /api/resources/upload
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    form: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    // Deny before the body is read or the blob store is touched.
    state
        .access_policy
        .require(Some(auth.role), Operation::UploadResource)?;

    let mut form = multipart::collect(form).await?;

    let file = form
        .take_file("file")
        .ok_or_else(|| AppError::validation("No file uploaded"))?;
    let title = form
        .text("title")
        .ok_or_else(|| AppError::validation("Title is required"))?;
    let description = form.text("description");
    let resource_type = match form.text("resourceType") {
        Some(value) => value.parse()?,
        None => ResourceType::default(),
    };

    let file_key = object_key(RESOURCE_PREFIX, &file.filename);
    let file_url = state
        .blob_store
        .put(&file_key, file.data, file.content_type.as_deref())
        .await?;

    let preview_image_url = match form.take_file("previewImage") {
        Some(image) => {
            let key = object_key(RESOURCE_PREFIX, &image.filename);
            Some(
                state
                    .blob_store
                    .put(&key, image.data, image.content_type.as_deref())
                    .await?,
            )
        }
        None => None,
    };

    let resource = state
        .resource_repo
        .create(NewResource {
            title,
            description,
            file_url,
            file_key,
            preview_image_url,
            resource_type,
            uploaded_by: UploaderRef {
                id: auth.principal.id(),
                name: auth.principal.name().to_string(),
                role: auth.role,
            },
        })
        .await?;

    tracing::info!(resource_id = %resource.id, uploader = %resource.uploaded_by_name, "Resource uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resource uploaded successfully".to_string(),
            resource: resource.into(),
        }),
    ))
}

/// DELETE /api/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .access_policy
        .require(Some(auth.role), Operation::DeleteResource)?;

    let resource = state
        .resource_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource not found"))?;

    // Blob removal is best-effort secondary cleanup; the record deletion
    // below stays authoritative.
    let cleanup = delete_blob_best_effort(state.blob_store.as_ref(), resource.file_key.as_deref()).await;
    if let BlobCleanup::Failed(err) = &cleanup {
        tracing::warn!(resource_id = %id, error = %err, "Blob cleanup failed, deleting record anyway");
    }

    if !state.resource_repo.delete(id).await? {
        return Err(AppError::not_found("Resource not found").into());
    }

    tracing::info!(resource_id = %id, "Resource deleted");
    Ok(Json(MessageResponse::new("Resource deleted successfully")))
}
