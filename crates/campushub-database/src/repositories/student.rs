//! Student credential store adapter.

use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::principal::{NewStudent, Student};

use super::map_insert_error;

/// Repository for student credential records.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a student by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    /// Find a student by roll number (login lookup).
    pub async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE roll_number = $1")
            .bind(roll_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find student by roll number",
                    e,
                )
            })
    }

    /// Find a student matching either natural key or email.
    ///
    /// One logical query so the duplicate pre-check does not race two
    /// separate existence checks. Email comparison is case-insensitive.
    pub async fn find_by_roll_number_or_email(
        &self,
        roll_number: &str,
        email: &str,
    ) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE roll_number = $1 OR LOWER(email) = LOWER($2)",
        )
        .bind(roll_number)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check for existing student",
                e,
            )
        })
    }

    /// Create a new student record.
    ///
    /// A unique violation (lost pre-check race) maps to a duplicate error.
    pub async fn create(&self, new: NewStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, roll_number, name, email, branch, password_hash, profile_picture_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.roll_number)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.branch)
        .bind(&new.password_hash)
        .bind(&new.profile_picture_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Student already exists"))
    }
}
