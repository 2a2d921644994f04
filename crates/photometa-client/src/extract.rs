//! Metadata extraction orchestration.
//!
//! Ties the EXIF reader and the normalizer together: one image resource in,
//! one displayable handle plus its normalized metadata out.

use photometa_core::{
    detect_content_type, process_metadata, read_raw_tags, Error, FileDescriptor, PhotoMetadata,
    Result,
};
use tracing::debug;

use crate::handle::ImageHandle;

/// A binary image resource supplied by upload or camera capture.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    /// Declared MIME type, when the source provides one.
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Displayable handle plus normalized metadata for one image.
#[derive(Debug)]
pub struct ImageMetadataResult {
    pub handle: ImageHandle,
    pub metadata: PhotoMetadata,
}

/// Extract metadata from an image resource and produce a displayable handle.
///
/// Resolves exactly once: with the handle/metadata pair, or with a
/// descriptive error when the resource cannot be read. The EXIF read itself
/// is blocking and runs on the blocking pool. An image that merely carries no
/// EXIF data yields an all-`"Unknown"` record, not an error.
pub async fn extract_image_metadata(file: ImageFile) -> Result<ImageMetadataResult> {
    tokio::task::spawn_blocking(move || {
        let mime_type = file
            .mime_type
            .clone()
            .or_else(|| detect_content_type(&file.bytes))
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let tags = read_raw_tags(&file.bytes)?;
        debug!(
            file = %file.name,
            tag_count = tags.len(),
            "EXIF tags extracted"
        );

        let descriptor = FileDescriptor {
            name: file.name.clone(),
            size: file.bytes.len() as u64,
            mime_type: mime_type.clone(),
        };
        let metadata = process_metadata(&tags, &descriptor);

        Ok(ImageMetadataResult {
            handle: ImageHandle::new(file.name, mime_type, file.bytes),
            metadata,
        })
    })
    .await
    .map_err(|e| Error::Internal(format!("EXIF extraction task failed: {}", e)))?
}
