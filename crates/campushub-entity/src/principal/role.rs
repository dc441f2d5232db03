//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the platform.
///
/// `Student` and `Faculty` are backed by credential store records;
/// `Admin` is a distinguished role with no stored record, authenticated
/// against fixed configuration credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrincipalRole {
    /// A registered student.
    Student,
    /// A registered faculty member.
    Faculty,
    /// The fixed administrative identity.
    Admin,
}

impl PrincipalRole {
    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is backed by a credential store record.
    pub fn has_stored_record(&self) -> bool {
        !self.is_admin()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrincipalRole {
    type Err = campushub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "admin" => Ok(Self::Admin),
            _ => Err(campushub_core::AppError::validation(format!(
                "Invalid principal role: '{s}'. Expected one of: student, faculty, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "student".parse::<PrincipalRole>().unwrap(),
            PrincipalRole::Student
        );
        assert_eq!(
            "FACULTY".parse::<PrincipalRole>().unwrap(),
            PrincipalRole::Faculty
        );
        assert!("root".parse::<PrincipalRole>().is_err());
    }

    #[test]
    fn test_stored_record() {
        assert!(PrincipalRole::Student.has_stored_record());
        assert!(PrincipalRole::Faculty.has_stored_record());
        assert!(!PrincipalRole::Admin.has_stored_record());
    }
}
