//! Resource record store adapter.

use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::resource::{NewResource, Resource, ResourceType};

/// Maximum number of resources returned by a listing query.
pub const LIST_LIMIT: i64 = 200;

/// Repository for shared resource records.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a resource by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find resource by id", e)
            })
    }

    /// List resources with optional title search and type filter.
    ///
    /// Title matching is a case-insensitive substring match. Results are
    /// newest-first and capped at [`LIST_LIMIT`].
    pub async fn search(
        &self,
        title_query: Option<&str>,
        resource_type: Option<ResourceType>,
    ) -> AppResult<Vec<Resource>> {
        let pattern = title_query.map(|q| format!("%{}%", escape_like(q)));

        sqlx::query_as::<_, Resource>(
            r#"
            SELECT * FROM resources
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::resource_type IS NULL OR resource_type = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(pattern)
        .bind(resource_type)
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    /// List resources uploaded by the given principal, newest first.
    pub async fn find_by_uploader(&self, uploader_id: Uuid) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT * FROM resources WHERE uploaded_by_id = $1 ORDER BY created_at DESC",
        )
        .bind(uploader_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list resources by uploader",
                e,
            )
        })
    }

    /// Create a new resource record.
    pub async fn create(&self, new: NewResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources
                (id, title, description, file_url, file_key, preview_image_url,
                 resource_type, uploaded_by_id, uploaded_by_name, uploaded_by_role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.file_url)
        .bind(&new.file_key)
        .bind(&new.preview_image_url)
        .bind(new.resource_type)
        .bind(new.uploaded_by.id)
        .bind(&new.uploaded_by.name)
        .bind(new.uploaded_by.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    /// Delete a resource by primary key. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete resource", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters in a user-supplied search term so they
/// match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("intro"), "intro");
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
