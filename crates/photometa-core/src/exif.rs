//! EXIF tag extraction for image files.
//!
//! Reads the EXIF container from raw image bytes and surfaces a loosely-typed
//! tag mapping keyed by standard EXIF tag names. Supports the containers the
//! underlying reader understands (JPEG, PNG, HEIF/HEIC, TIFF, WebP).
//!
//! An image that simply carries no EXIF segment yields an empty mapping; only
//! a structurally unreadable resource is an error.

use std::io::Cursor;

use crate::tags::{RawExifTags, TagValue};
use crate::{Error, Result};

/// Tags surfaced with their textual display value.
const TEXT_TAGS: &[(&str, exif::Tag)] = &[
    ("DateTime", exif::Tag::DateTime),
    ("DateTimeOriginal", exif::Tag::DateTimeOriginal),
    ("DateTimeDigitized", exif::Tag::DateTimeDigitized),
    ("Make", exif::Tag::Make),
    ("Model", exif::Tag::Model),
    ("Software", exif::Tag::Software),
    ("Artist", exif::Tag::Artist),
    ("Copyright", exif::Tag::Copyright),
    ("GPSLatitudeRef", exif::Tag::GPSLatitudeRef),
    ("GPSLongitudeRef", exif::Tag::GPSLongitudeRef),
];

/// Tags surfaced as unsigned integers.
const UINT_TAGS: &[(&str, exif::Tag)] = &[
    ("PixelXDimension", exif::Tag::PixelXDimension),
    ("PixelYDimension", exif::Tag::PixelYDimension),
    ("Orientation", exif::Tag::Orientation),
    ("Flash", exif::Tag::Flash),
    ("ISOSpeedRatings", exif::Tag::PhotographicSensitivity),
];

/// Tags surfaced as a single rational converted to f64.
const RATIONAL_TAGS: &[(&str, exif::Tag)] = &[
    ("FNumber", exif::Tag::FNumber),
    ("ExposureTime", exif::Tag::ExposureTime),
    ("FocalLength", exif::Tag::FocalLength),
    ("GPSAltitude", exif::Tag::GPSAltitude),
];

/// Tags surfaced as a rational sequence (degrees/minutes/seconds triplets).
const RATIONAL_LIST_TAGS: &[(&str, exif::Tag)] = &[
    ("GPSLatitude", exif::Tag::GPSLatitude),
    ("GPSLongitude", exif::Tag::GPSLongitude),
];

/// Extract the raw EXIF tag mapping from image file bytes.
///
/// Resolves each known tag independently; anything the file does not carry is
/// simply absent from the result. Unknown or vendor-specific tags are not
/// surfaced.
///
/// # Errors
/// * `Error::InvalidInput` when the resource is empty or the container is
///   structurally unreadable. A missing EXIF segment is NOT an error.
pub fn read_raw_tags(data: &[u8]) -> Result<RawExifTags> {
    if data.is_empty() {
        return Err(Error::InvalidInput("image resource is empty".to_string()));
    }

    let mut reader = exif::Reader::new();
    reader.continue_on_error(true);
    let mut cursor = Cursor::new(data);

    let exif = match reader.read_from_container(&mut cursor).or_else(|e| {
        e.distill_partial_result(|errors| {
            tracing::debug!("EXIF reader suppressed {} field errors", errors.len());
        })
    }) {
        Ok(exif) => exif,
        // No EXIF segment at all: a perfectly valid photo with no metadata.
        Err(exif::Error::NotFound(_)) => return Ok(RawExifTags::new()),
        Err(e) => {
            return Err(Error::InvalidInput(format!(
                "Failed to read EXIF data: {}",
                e
            )))
        }
    };

    let mut tags = RawExifTags::new();

    for (name, tag) in TEXT_TAGS {
        if let Some(value) = text_field(&exif, *tag) {
            tags.insert((*name).to_string(), TagValue::Text(value));
        }
    }

    for (name, tag) in UINT_TAGS {
        if let Some(value) = uint_field(&exif, *tag) {
            tags.insert((*name).to_string(), TagValue::Number(value as f64));
        }
    }

    for (name, tag) in RATIONAL_TAGS {
        if let Some(value) = rational_field(&exif, *tag) {
            tags.insert((*name).to_string(), TagValue::Number(value));
        }
    }

    for (name, tag) in RATIONAL_LIST_TAGS {
        if let Some(values) = rational_list_field(&exif, *tag) {
            tags.insert((*name).to_string(), TagValue::NumberList(values));
        }
    }

    Ok(tags)
}

/// Extract a string field from EXIF.
fn text_field(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    let value = field.display_value().to_string();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extract an unsigned integer field from EXIF.
fn uint_field(exif: &exif::Exif, tag: exif::Tag) -> Option<u32> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

/// Extract the first rational of a field as f64.
fn rational_field(exif: &exif::Exif, tag: exif::Tag) -> Option<f64> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    match &field.value {
        exif::Value::Rational(r) if !r.is_empty() => Some(r[0].to_f64()),
        _ => None,
    }
}

/// Extract all rationals of a field as f64 values.
fn rational_list_field(exif: &exif::Exif, tag: exif::Tag) -> Option<Vec<f64>> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    match &field.value {
        exif::Value::Rational(r) if !r.is_empty() => {
            Some(r.iter().map(|v| v.to_f64()).collect())
        }
        _ => None,
    }
}
