//! Displayable image handles.

use photometa_core::{Error, Result};

/// Addressable reference to in-memory image bytes usable for rendering.
///
/// The handle's lifetime is the caller's responsibility: release it (or drop
/// it) when a new image supersedes it, so superseded bytes are not retained
/// for the rest of the session.
#[derive(Debug)]
pub struct ImageHandle {
    name: String,
    mime_type: String,
    bytes: Option<Vec<u8>>,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: Some(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Borrow the underlying bytes. Fails once the handle has been released.
    pub fn bytes(&self) -> Result<&[u8]> {
        self.bytes.as_deref().ok_or_else(|| {
            Error::InvalidInput(format!("image handle '{}' has been released", self.name))
        })
    }

    /// Free the underlying bytes. Any further byte access fails.
    pub fn release(&mut self) {
        self.bytes = None;
    }

    pub fn is_released(&self) -> bool {
        self.bytes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_exposes_bytes() {
        let handle = ImageHandle::new("photo.jpg", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(handle.name(), "photo.jpg");
        assert_eq!(handle.mime_type(), "image/jpeg");
        assert_eq!(handle.bytes().unwrap(), &[1, 2, 3]);
        assert!(!handle.is_released());
    }

    #[test]
    fn test_released_handle_refuses_byte_access() {
        let mut handle = ImageHandle::new("photo.jpg", "image/jpeg", vec![1, 2, 3]);
        handle.release();

        assert!(handle.is_released());
        let err = handle.bytes().unwrap_err();
        assert!(err.to_string().contains("released"));
    }
}
