//! Concrete repository implementations over PostgreSQL.
//!
//! The student and faculty repositories are the credential store
//! adapters: duplicate pre-checks are a fast-path UX improvement only,
//! while the UNIQUE constraints in the schema remain the authoritative
//! uniqueness enforcement. Unique-violation insert failures are mapped
//! to [`ErrorKind::Duplicate`] so a lost pre-check race still surfaces
//! as a 400 rather than a 500.

pub mod faculty;
pub mod resource;
pub mod student;

use campushub_core::error::{AppError, ErrorKind};

/// Map an insert failure, turning unique-constraint violations into a
/// duplicate error with the given client-facing message.
pub(crate) fn map_insert_error(err: sqlx::Error, duplicate_message: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::duplicate(duplicate_message);
        }
    }
    AppError::with_source(ErrorKind::Database, "Insert failed", err)
}
