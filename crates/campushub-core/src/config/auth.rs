//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session credential configuration.
///
/// The signing secret and token TTL are process-wide and read-only after
/// startup. Rotating the secret invalidates all outstanding tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
    /// Whether the session cookie carries the `Secure` attribute.
    ///
    /// Must be enabled in production; `SameSite=None` cookies are rejected
    /// by browsers without it.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Fixed administrator login email.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Fixed administrator login password.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Administrator display name.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl_days(),
            cookie_secure: false,
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
            admin_name: default_admin_name(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_admin_email() -> String {
    "admin@campushub.local".to_string()
}

fn default_admin_password() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}
