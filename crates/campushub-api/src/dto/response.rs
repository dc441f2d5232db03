//! Response DTOs.
//!
//! Field names follow the frontend's camelCase contract. Principal views
//! never carry the password hash; the per-variant fields (roll number,
//! faculty id, position) are omitted when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campushub_entity::principal::{Principal, PrincipalRole};
use campushub_entity::resource::Resource;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Principal summary for auth and profile responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalView {
    /// Record id (nil for admin).
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role tag.
    pub role: PrincipalRole,
    /// Roll number (students only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    /// Faculty id (faculty only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    /// Position (faculty only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Branch / department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Profile picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl From<&Principal> for PrincipalView {
    fn from(principal: &Principal) -> Self {
        match principal {
            Principal::Student(s) => Self {
                id: s.id,
                name: s.name.clone(),
                email: s.email.clone(),
                role: PrincipalRole::Student,
                roll_number: Some(s.roll_number.clone()),
                faculty_id: None,
                position: None,
                branch: s.branch.clone(),
                profile_picture_url: s.profile_picture_url.clone(),
            },
            Principal::Faculty(f) => Self {
                id: f.id,
                name: f.name.clone(),
                email: f.email.clone(),
                role: PrincipalRole::Faculty,
                roll_number: None,
                faculty_id: Some(f.faculty_id.clone()),
                position: f.position.clone(),
                branch: f.branch.clone(),
                profile_picture_url: f.profile_picture_url.clone(),
            },
            Principal::Admin(a) => Self {
                id: a.id,
                name: a.name.clone(),
                email: a.email.clone(),
                role: PrincipalRole::Admin,
                roll_number: None,
                faculty_id: None,
                position: None,
                branch: None,
                profile_picture_url: None,
            },
        }
    }
}

/// Auth success response: message plus the principal view. The session
/// token itself travels only in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Status message.
    pub message: String,
    /// The authenticated principal.
    pub user: PrincipalView,
}

impl AuthResponse {
    /// Standard success payload.
    pub fn success(user: PrincipalView) -> Self {
        Self {
            message: "Success".to_string(),
            user,
        }
    }
}

/// Uploader snapshot in resource views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderView {
    /// Uploader record id.
    pub id: Uuid,
    /// Uploader display name.
    pub name: String,
    /// Uploader role.
    pub role: PrincipalRole,
}

/// A resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceView {
    /// Resource id.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Public file URL.
    pub file_url: String,
    /// Blob store key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_key: Option<String>,
    /// Optional preview image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    /// Resource kind.
    pub resource_type: campushub_entity::resource::ResourceType,
    /// Uploader snapshot.
    pub uploaded_by: UploaderView,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

impl From<Resource> for ResourceView {
    fn from(resource: Resource) -> Self {
        let uploader = resource.uploaded_by();
        Self {
            id: resource.id,
            title: resource.title,
            description: resource.description,
            file_url: resource.file_url,
            file_key: resource.file_key,
            preview_image_url: resource.preview_image_url,
            resource_type: resource.resource_type,
            uploaded_by: UploaderView {
                id: uploader.id,
                name: uploader.name,
                role: uploader.role,
            },
            created_at: resource.created_at,
        }
    }
}

/// Profile response: principal view plus owned uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// The authenticated principal.
    pub user: PrincipalView,
    /// Resources uploaded by this principal, newest first.
    pub uploaded_resources: Vec<ResourceView>,
}

/// Public resource listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListResponse {
    /// Number of resources returned.
    pub count: usize,
    /// The resources, newest first.
    pub resources: Vec<ResourceView>,
}

/// Single resource response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    /// The resource.
    pub resource: ResourceView,
}

/// Upload success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Status message.
    pub message: String,
    /// The created resource.
    pub resource: ResourceView,
}

/// Signed download URL response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadUrlResponse {
    /// Time-limited signed URL.
    pub url: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_entity::principal::{AdminPrincipal, Student};
    use chrono::Utc;

    #[test]
    fn test_student_view_fields() {
        let student = Principal::Student(Student {
            id: Uuid::new_v4(),
            roll_number: "R1".into(),
            name: "A".into(),
            email: "a@x.com".into(),
            branch: Some("CSE".into()),
            password_hash: "hash".into(),
            profile_picture_url: None,
            created_at: Utc::now(),
        });

        let view = PrincipalView::from(&student);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json.get("rollNumber").unwrap(), "R1");
        assert_eq!(json.get("role").unwrap(), "student");
        assert!(json.get("facultyId").is_none());
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_admin_view_has_no_member_fields() {
        let admin = Principal::Admin(AdminPrincipal::new("Administrator", "admin@x.com"));
        let json = serde_json::to_value(PrincipalView::from(&admin)).unwrap();

        assert_eq!(json.get("role").unwrap(), "admin");
        assert!(json.get("rollNumber").is_none());
        assert!(json.get("branch").is_none());
    }
}
