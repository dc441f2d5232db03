//! Principal entities: students, faculty, and the fixed admin identity.

pub mod model;
pub mod role;

pub use model::{AdminPrincipal, Faculty, NewFaculty, NewStudent, Principal, Student};
pub use role::PrincipalRole;
