//! # campushub-auth
//!
//! Authentication and authorization core for CampusHub: Argon2 password
//! hashing, stateless signed session tokens, the role/operation access
//! policy, and the fixed-credential admin check.

pub mod admin;
pub mod jwt;
pub mod password;
pub mod policy;

pub use admin::AdminCredentials;
pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
pub use policy::{AccessPolicy, Operation};
