//! Scoped camera capture session.
//!
//! Media-capture hardware is a scoped resource: acquired when capture starts,
//! and every track stopped when capture stops or the owner is torn down.
//! Release is an obligation of this type, never left to implicit collection.

use tracing::debug;

use photometa_core::{Error, Result};

use crate::extract::ImageFile;

/// A live media source delivering camera frames.
///
/// Implemented by the platform-specific capture layer; treated as a black box
/// here.
pub trait MediaStream: Send {
    /// Grab the current frame, encoded as JPEG bytes.
    fn capture_frame(&mut self) -> Result<Vec<u8>>;

    /// Stop all tracks and release the underlying device.
    fn stop(&mut self);
}

/// Scoped owner of an active media stream.
///
/// `stop` releases the stream exactly once; dropping a still-active session
/// releases it too.
pub struct CaptureSession {
    stream: Option<Box<dyn MediaStream>>,
    frames_taken: u32,
}

impl CaptureSession {
    /// Acquire the stream and begin a capture session.
    pub fn start(stream: Box<dyn MediaStream>) -> Self {
        debug!("capture session started");
        Self {
            stream: Some(stream),
            frames_taken: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Capture the current frame as an uploadable image file.
    pub fn capture(&mut self) -> Result<ImageFile> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| Error::InvalidInput("capture session is not active".to_string()))?;

        let bytes = stream.capture_frame()?;
        self.frames_taken += 1;

        Ok(ImageFile {
            name: "webcam-capture.jpg".to_string(),
            mime_type: Some("image/jpeg".to_string()),
            bytes,
        })
    }

    /// Stop all tracks and release the device. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!(frames = self.frames_taken, "capture session stopped");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}
