//! Principal entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::PrincipalRole;

/// A registered student.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique record identifier.
    pub id: Uuid,
    /// Unique natural key (institutional roll number).
    pub roll_number: String,
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Profile picture URL in the blob store.
    pub profile_picture_url: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A registered faculty member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faculty {
    /// Unique record identifier.
    pub id: Uuid,
    /// Unique natural key (institutional faculty id).
    pub faculty_id: String,
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Position / designation.
    pub position: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Profile picture URL in the blob store.
    pub profile_picture_url: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// The fixed administrative identity.
///
/// Not backed by a credential store record; constructed from
/// configuration after a successful fixed-credential login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPrincipal {
    /// Synthetic identifier (nil UUID).
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

impl AdminPrincipal {
    /// Build the admin identity from its configured name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// An authenticated identity, dispatched on by tag rather than
/// through a trait hierarchy.
#[derive(Debug, Clone)]
pub enum Principal {
    /// A student principal.
    Student(Student),
    /// A faculty principal.
    Faculty(Faculty),
    /// The admin principal.
    Admin(AdminPrincipal),
}

impl Principal {
    /// The principal's record id (nil for admin).
    pub fn id(&self) -> Uuid {
        match self {
            Self::Student(s) => s.id,
            Self::Faculty(f) => f.id,
            Self::Admin(a) => a.id,
        }
    }

    /// The principal's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Student(s) => &s.name,
            Self::Faculty(f) => &f.name,
            Self::Admin(a) => &a.name,
        }
    }

    /// The principal's email address.
    pub fn email(&self) -> &str {
        match self {
            Self::Student(s) => &s.email,
            Self::Faculty(f) => &f.email,
            Self::Admin(a) => &a.email,
        }
    }

    /// The role tag for this principal.
    pub fn role(&self) -> PrincipalRole {
        match self {
            Self::Student(_) => PrincipalRole::Student,
            Self::Faculty(_) => PrincipalRole::Faculty,
            Self::Admin(_) => PrincipalRole::Admin,
        }
    }
}

/// Data required to create a new student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    /// Roll number (natural key).
    pub roll_number: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Profile picture URL (if one was uploaded).
    pub profile_picture_url: Option<String>,
}

/// Data required to create a new faculty record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaculty {
    /// Faculty id (natural key).
    pub faculty_id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Branch / department.
    pub branch: Option<String>,
    /// Position / designation.
    pub position: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Profile picture URL (if one was uploaded).
    pub profile_picture_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_dispatch() {
        let admin = Principal::Admin(AdminPrincipal::new("Administrator", "admin@example.com"));
        assert_eq!(admin.role(), PrincipalRole::Admin);
        assert_eq!(admin.id(), Uuid::nil());
        assert_eq!(admin.name(), "Administrator");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let student = Student {
            id: Uuid::new_v4(),
            roll_number: "R1".into(),
            name: "A".into(),
            email: "a@x.com".into(),
            branch: Some("CSE".into()),
            password_hash: "$argon2id$secret".into(),
            profile_picture_url: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&student).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("roll_number").unwrap(), "R1");
    }
}
