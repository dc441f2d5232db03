//! Resource entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::principal::PrincipalRole;

/// The kind of shared resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A broadcast announcement.
    Announcement,
    /// Course notes or study material.
    Notes,
}

impl ResourceType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Notes => "notes",
        }
    }
}

impl Default for ResourceType {
    fn default() -> Self {
        Self::Notes
    }
}

impl std::str::FromStr for ResourceType {
    type Err = campushub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "announcement" => Ok(Self::Announcement),
            "notes" => Ok(Self::Notes),
            _ => Err(campushub_core::AppError::validation(format!(
                "Invalid resource type: '{s}'. Expected one of: announcement, notes"
            ))),
        }
    }
}

/// A shared resource uploaded by a student or faculty member.
///
/// The uploader fields are a snapshot taken at upload time, not a foreign
/// key; a resource outlives its uploader's account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Public URL of the stored file.
    pub file_url: String,
    /// Blob store key for the file. Absent on legacy rows.
    pub file_key: Option<String>,
    /// Optional preview image URL.
    pub preview_image_url: Option<String>,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Uploader record id at upload time.
    pub uploaded_by_id: Uuid,
    /// Uploader display name at upload time.
    pub uploaded_by_name: String,
    /// Uploader role at upload time.
    pub uploaded_by_role: PrincipalRole,
    /// When the resource was uploaded.
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// The uploader snapshot as a value object.
    pub fn uploaded_by(&self) -> UploaderRef {
        UploaderRef {
            id: self.uploaded_by_id,
            name: self.uploaded_by_name.clone(),
            role: self.uploaded_by_role,
        }
    }
}

/// Snapshot of the principal who uploaded a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderRef {
    /// Uploader record id.
    pub id: Uuid,
    /// Uploader display name.
    pub name: String,
    /// Uploader role.
    pub role: PrincipalRole,
}

/// Data required to create a new resource record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    /// Display title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Public URL of the stored file.
    pub file_url: String,
    /// Blob store key for the file.
    pub file_key: String,
    /// Optional preview image URL.
    pub preview_image_url: Option<String>,
    /// Resource kind.
    pub resource_type: ResourceType,
    /// Uploader snapshot.
    pub uploaded_by: UploaderRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_parsing() {
        assert_eq!(
            ResourceType::from_str("notes").unwrap(),
            ResourceType::Notes
        );
        assert_eq!(
            ResourceType::from_str("Announcement").unwrap(),
            ResourceType::Announcement
        );
        assert!(ResourceType::from_str("video").is_err());
    }

    #[test]
    fn test_default_type_is_notes() {
        assert_eq!(ResourceType::default(), ResourceType::Notes);
    }
}
