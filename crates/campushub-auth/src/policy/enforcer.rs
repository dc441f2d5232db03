//! Access policy enforcement — decides which roles may perform which
//! operations.

use campushub_core::error::AppError;
use campushub_entity::principal::PrincipalRole;

use super::operation::Operation;

/// Enforces the role/operation access table.
///
/// `None` represents an anonymous (unauthenticated) caller. Uploading is
/// a member operation: the admin identity has no uploads concept and is
/// denied. Deletion is reserved for the admin role regardless of
/// resource ownership.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates a new policy with the default rules.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the given role may perform the operation.
    pub fn allows(&self, role: Option<PrincipalRole>, operation: Operation) -> bool {
        use Operation::*;
        use PrincipalRole::*;

        match operation {
            ViewResources | DownloadResource => true,
            ViewOwnProfile => role.is_some(),
            UploadResource => matches!(role, Some(Student) | Some(Faculty)),
            DeleteResource => matches!(role, Some(Admin)),
        }
    }

    /// Checks whether the given role may perform the operation.
    ///
    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require(&self, role: Option<PrincipalRole>, operation: Operation) -> Result<(), AppError> {
        if self.allows(role, operation) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Not allowed to {operation}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_operations() {
        let policy = AccessPolicy::new();
        for role in [
            None,
            Some(PrincipalRole::Student),
            Some(PrincipalRole::Faculty),
            Some(PrincipalRole::Admin),
        ] {
            assert!(policy.allows(role, Operation::ViewResources));
            assert!(policy.allows(role, Operation::DownloadResource));
        }
    }

    #[test]
    fn test_profile_requires_authentication() {
        let policy = AccessPolicy::new();
        assert!(!policy.allows(None, Operation::ViewOwnProfile));
        assert!(policy.allows(Some(PrincipalRole::Student), Operation::ViewOwnProfile));
        assert!(policy.allows(Some(PrincipalRole::Admin), Operation::ViewOwnProfile));
    }

    #[test]
    fn test_upload_is_member_only() {
        let policy = AccessPolicy::new();
        assert!(policy.allows(Some(PrincipalRole::Student), Operation::UploadResource));
        assert!(policy.allows(Some(PrincipalRole::Faculty), Operation::UploadResource));
        assert!(!policy.allows(Some(PrincipalRole::Admin), Operation::UploadResource));
        assert!(!policy.allows(None, Operation::UploadResource));
    }

    #[test]
    fn test_delete_is_admin_only() {
        let policy = AccessPolicy::new();
        assert!(policy.allows(Some(PrincipalRole::Admin), Operation::DeleteResource));
        assert!(!policy.allows(Some(PrincipalRole::Student), Operation::DeleteResource));
        assert!(!policy.allows(Some(PrincipalRole::Faculty), Operation::DeleteResource));
        assert!(!policy.allows(None, Operation::DeleteResource));

        assert!(
            policy
                .require(Some(PrincipalRole::Student), Operation::DeleteResource)
                .is_err()
        );
    }
}
