//! Shared resource entities (announcements and notes).

pub mod model;

pub use model::{NewResource, Resource, ResourceType, UploaderRef};
