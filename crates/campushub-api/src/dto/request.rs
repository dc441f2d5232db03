//! Request DTOs with validation.
//!
//! JSON bodies use the frontend's camelCase field names. Signup forms
//! arrive as multipart (they can carry a profile picture) and are built
//! from the collected fields before validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Student login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginRequest {
    /// Roll number.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub roll_number: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub password: String,
}

/// Faculty login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FacultyLoginRequest {
    /// Faculty id.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub faculty_id: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub password: String,
}

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    /// Admin email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub email: String,
    /// Admin password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing credentials"))]
    pub password: String,
}

/// Student signup fields collected from the multipart form.
#[derive(Debug, Clone, Validate)]
pub struct StudentSignupForm {
    /// Roll number (natural key).
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub roll_number: String,
    /// Full name.
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Plaintext password (hashed before storage).
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub password: String,
}

/// Faculty signup fields collected from the multipart form.
#[derive(Debug, Clone, Validate)]
pub struct FacultySignupForm {
    /// Faculty id (natural key).
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub faculty_id: String,
    /// Full name.
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Position / designation.
    pub position: Option<String>,
    /// Plaintext password (hashed before storage).
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub password: String,
}

/// Query parameters for the public resource listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResourceListQuery {
    /// Case-insensitive title substring filter.
    pub q: Option<String>,
    /// Resource type filter (`announcement` or `notes`).
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate;

    #[test]
    fn test_signup_validation() {
        let valid = StudentSignupForm {
            roll_number: "R1".into(),
            name: "A".into(),
            email: "a@x.com".into(),
            branch: None,
            password: "pw12345".into(),
        };
        assert!(validate(&valid).is_ok());

        let bad_email = StudentSignupForm {
            email: "not-an-email".into(),
            ..valid.clone()
        };
        let err = validate(&bad_email).unwrap_err();
        assert_eq!(err.message, "Invalid email");

        let missing = StudentSignupForm {
            roll_number: String::new(),
            ..valid
        };
        let err = validate(&missing).unwrap_err();
        assert_eq!(err.message, "Required fields missing");
    }

    #[test]
    fn test_login_validation() {
        let missing = StudentLoginRequest {
            roll_number: "R1".into(),
            password: String::new(),
        };
        let err = validate(&missing).unwrap_err();
        assert_eq!(err.message, "Missing credentials");
    }

    #[test]
    fn test_list_query_type_field_name() {
        let query: ResourceListQuery =
            serde_json::from_value(serde_json::json!({ "q": "intro", "type": "notes" })).unwrap();
        assert_eq!(query.q.as_deref(), Some("intro"));
        assert_eq!(query.resource_type.as_deref(), Some("notes"));
    }
}
