//! Object key generation.
//!
//! Keys are date-partitioned and named by a fresh UUID, so client-supplied
//! filenames never reach the backend and cannot collide or traverse paths.

use chrono::Utc;
use uuid::Uuid;

use crate::MediaError;

/// Map a supported image content type to its file extension.
///
/// Returns `None` for anything that is not an accepted image format;
/// callers treat that as a client error.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Generate a key like `2026/08/26/9f1c...d2.jpg` for a new object.
pub fn object_key(content_type: &str) -> Result<String, MediaError> {
    let ext = extension_for(content_type)
        .ok_or_else(|| MediaError::UnsupportedContentType(content_type.to_string()))?;
    let date = Utc::now().format("%Y/%m/%d");
    Ok(format!("{}/{}.{}", date, Uuid::new_v4(), ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_types_map_to_extensions() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/webp"), Some("webp"));
        assert_eq!(extension_for("image/gif"), Some("gif"));
    }

    #[test]
    fn non_image_types_are_rejected() {
        assert_eq!(extension_for("application/octet-stream"), None);
        assert_eq!(extension_for("text/html"), None);
        assert!(matches!(
            object_key("application/pdf"),
            Err(MediaError::UnsupportedContentType(_))
        ));
    }

    #[test]
    fn keys_are_date_partitioned_and_unique() {
        let a = object_key("image/png").unwrap();
        let b = object_key("image/png").unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        // yyyy/mm/dd prefix plus uuid filename
        assert_eq!(a.split('/').count(), 4);
    }
}
