//! Request and response DTOs.

pub mod request;
pub mod response;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use validator::Validate;

/// Run derive-based validation, collapsing the first failure into a
/// client-facing validation error.
pub(crate) fn validate(dto: &impl Validate) -> AppResult<()> {
    dto.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());
        AppError::validation(message)
    })
}
