//! Faculty credential store adapter.

use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::principal::{Faculty, NewFaculty};

use super::map_insert_error;

/// Repository for faculty credential records.
#[derive(Debug, Clone)]
pub struct FacultyRepository {
    pool: PgPool,
}

impl FacultyRepository {
    /// Create a new faculty repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a faculty member by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>("SELECT * FROM faculty WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find faculty by id", e)
            })
    }

    /// Find a faculty member by faculty id (login lookup).
    pub async fn find_by_faculty_id(&self, faculty_id: &str) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>("SELECT * FROM faculty WHERE faculty_id = $1")
            .bind(faculty_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find faculty by faculty id",
                    e,
                )
            })
    }

    /// Find a faculty member matching either natural key or email.
    ///
    /// One logical query so the duplicate pre-check does not race two
    /// separate existence checks. Email comparison is case-insensitive.
    pub async fn find_by_faculty_id_or_email(
        &self,
        faculty_id: &str,
        email: &str,
    ) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>(
            "SELECT * FROM faculty WHERE faculty_id = $1 OR LOWER(email) = LOWER($2)",
        )
        .bind(faculty_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check for existing faculty",
                e,
            )
        })
    }

    /// Create a new faculty record.
    ///
    /// A unique violation (lost pre-check race) maps to a duplicate error.
    pub async fn create(&self, new: NewFaculty) -> AppResult<Faculty> {
        sqlx::query_as::<_, Faculty>(
            r#"
            INSERT INTO faculty (id, faculty_id, name, email, branch, position, password_hash, profile_picture_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.faculty_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.branch)
        .bind(&new.position)
        .bind(&new.password_hash)
        .bind(&new.profile_picture_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Faculty already exists"))
    }
}
