//! Fixed-credential admin authentication.
//!
//! The admin role is not backed by a credential store record; its login
//! checks against credentials held in configuration and yields a token
//! with role `admin`.

use campushub_core::config::auth::AuthConfig;
use campushub_entity::principal::AdminPrincipal;

/// The configured administrator credentials and identity.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
    name: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish()
    }
}

impl AdminCredentials {
    /// Builds the admin credential check from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
            name: config.admin_name.clone(),
        }
    }

    /// Checks a login attempt against the configured credentials.
    ///
    /// Email matching is case-insensitive; the password must match
    /// exactly.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email) && self.password == password
    }

    /// The admin identity handed to the rest of the system.
    pub fn principal(&self) -> AdminPrincipal {
        AdminPrincipal::new(self.name.clone(), self.email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> AdminCredentials {
        AdminCredentials::new(&AuthConfig {
            admin_email: "admin@x.com".into(),
            admin_password: "hunter2".into(),
            admin_name: "Administrator".into(),
            ..AuthConfig::default()
        })
    }

    #[test]
    fn test_verify() {
        let creds = credentials();
        assert!(creds.verify("admin@x.com", "hunter2"));
        assert!(creds.verify("ADMIN@X.COM", "hunter2"));
        assert!(!creds.verify("admin@x.com", "hunter3"));
        assert!(!creds.verify("other@x.com", "hunter2"));
    }

    #[test]
    fn test_principal_is_nil_id() {
        let creds = credentials();
        let principal = creds.principal();
        assert!(principal.id.is_nil());
        assert_eq!(principal.email, "admin@x.com");
    }
}
