//! Role-based access policy.

pub mod enforcer;
pub mod operation;

pub use enforcer::AccessPolicy;
pub use operation::Operation;
