//! Blob object key generation.

use chrono::Utc;

/// Key prefix for uploaded resource files.
pub const RESOURCE_PREFIX: &str = "resources";

/// Key prefix for profile pictures.
pub const PROFILE_PREFIX: &str = "profiles";

/// Build a unique object key `{prefix}/{millis}_{filename}`.
///
/// The millisecond timestamp keeps keys unique across uploads of the
/// same filename; the filename itself is sanitized so the key stays a
/// single path segment under the prefix.
pub fn object_key(prefix: &str, filename: &str) -> String {
    format!(
        "{}/{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        sanitize_filename(filename)
    )
}

/// Replace path separators and control characters in an uploaded
/// filename.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_shape() {
        let key = object_key(RESOURCE_PREFIX, "notes.pdf");
        assert!(key.starts_with("resources/"));
        assert!(key.ends_with("_notes.pdf"));
        assert_eq!(key.matches('/').count(), 1);
    }

    #[test]
    fn test_sanitize_strips_separators() {
        let key = object_key(PROFILE_PREFIX, "../../etc/passwd");
        assert_eq!(key.matches('/').count(), 1);
        assert!(key.contains(".._.._etc_passwd"));
    }

    #[test]
    fn test_empty_filename() {
        let key = object_key(RESOURCE_PREFIX, "");
        assert!(key.ends_with("_upload"));
    }
}
