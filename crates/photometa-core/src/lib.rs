//! # photometa-core
//!
//! Core types, pure transformations, and EXIF extraction for photometa.
//!
//! This crate provides the foundational data structures and tag-processing
//! logic that the other photometa crates depend on.

pub mod analysis;
pub mod error;
pub mod exif;
pub mod file_type;
pub mod format;
pub mod geo;
pub mod metadata;
pub mod tags;

// Re-export commonly used types at crate root
pub use analysis::{
    LocationContext, PhotoAnalysis, PhotoContent, SocialContext, TemporalContext, VisualElements,
};
pub use error::{Error, Result};
pub use exif::read_raw_tags;
pub use file_type::{detect_content_type, is_image_content_type};
pub use format::format_file_size;
pub use geo::convert_dms_to_dd;
pub use metadata::{
    process_metadata, BasicMetadata, CameraMetadata, FileDescriptor, LocationMetadata,
    PhotoMetadata, SoftwareMetadata, UNKNOWN,
};
pub use tags::{RawExifTags, TagValue};
