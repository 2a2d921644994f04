//! Magic byte content type detection.

/// Detect a MIME type from leading magic bytes.
///
/// Used when a caller supplies an image without declaring its type. Returns
/// `None` when the signature is not recognized.
pub fn detect_content_type(data: &[u8]) -> Option<String> {
    infer::get(data).map(|kind| kind.mime_type().to_string())
}

/// Whether the detected content type is an image format.
pub fn is_image_content_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_jpeg_magic_bytes() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
        assert_eq!(
            detect_content_type(&jpeg_header),
            Some("image/jpeg".to_string())
        );
    }

    #[test]
    fn test_detect_png_magic_bytes() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(
            detect_content_type(&png_header),
            Some("image/png".to_string())
        );
    }

    #[test]
    fn test_unrecognized_bytes() {
        assert_eq!(detect_content_type(b"plain text"), None);
        assert_eq!(detect_content_type(&[]), None);
    }

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("image/png"));
        assert!(!is_image_content_type("application/pdf"));
    }
}
