//! Operations gated by the access policy.

use std::fmt;

/// A gated operation against the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Browse the public resource list or a single resource.
    ViewResources,
    /// View one's own profile and uploads.
    ViewOwnProfile,
    /// Upload a new resource.
    UploadResource,
    /// Delete an existing resource.
    DeleteResource,
    /// Obtain a signed download URL for a resource.
    DownloadResource,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ViewResources => "view resources",
            Self::ViewOwnProfile => "view own profile",
            Self::UploadResource => "upload resource",
            Self::DeleteResource => "delete resource",
            Self::DownloadResource => "download resource",
        };
        write!(f, "{name}")
    }
}
