//! # photometa-client
//!
//! Client-side orchestration for photometa.
//!
//! This crate provides:
//! - Metadata extraction: image resource in, displayable handle plus
//!   normalized metadata out
//! - Base64 encoding of displayable images for the AI service
//! - The best-effort analysis client (absorbs failures into a complete
//!   fallback record)
//! - A scoped camera capture session with explicit acquire/release

pub mod analyze;
pub mod capture;
pub mod encode;
pub mod extract;
pub mod handle;

// Re-export core types
pub use photometa_core::*;

pub use analyze::AnalysisClient;
pub use capture::{CaptureSession, MediaStream};
pub use encode::encode_image_handle;
pub use extract::{extract_image_metadata, ImageFile, ImageMetadataResult};
pub use handle::ImageHandle;
