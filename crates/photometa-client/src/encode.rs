//! Base64 encoding of displayable images for transmission to the AI service.

use base64::Engine;

use photometa_core::Result;

use crate::handle::ImageHandle;

/// Encode a displayable image's bytes as a bare base64 payload.
///
/// The data-URL header is deliberately absent; the analysis endpoint accepts
/// the payload with or without one. Errors (a released handle, for instance)
/// propagate to the caller rather than substituting a default.
pub fn encode_image_handle(handle: &ImageHandle) -> Result<String> {
    let bytes = handle.bytes()?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_known_bytes() {
        let handle = ImageHandle::new("photo.jpg", "image/jpeg", b"ABCD".to_vec());
        assert_eq!(encode_image_handle(&handle).unwrap(), "QUJDRA==");
    }

    #[test]
    fn test_payload_has_no_data_url_prefix() {
        let handle = ImageHandle::new("photo.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let payload = encode_image_handle(&handle).unwrap();
        assert!(!payload.starts_with("data:"));
        assert_eq!(payload, "/9j/2Q==");
    }

    #[test]
    fn test_released_handle_propagates_error() {
        let mut handle = ImageHandle::new("photo.jpg", "image/jpeg", b"ABCD".to_vec());
        handle.release();
        assert!(encode_image_handle(&handle).is_err());
    }
}
