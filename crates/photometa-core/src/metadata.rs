//! Normalization of raw EXIF tags into the fixed-shape metadata record.
//!
//! The normalizer is total: every leaf field of [`PhotoMetadata`] is always a
//! domain-meaningful string or the sentinel `"Unknown"`, never absent. Any
//! missing or malformed tag degrades at the field level so consumers can
//! render unconditionally.

use serde::{Deserialize, Serialize};

use crate::format::format_file_size;
use crate::geo::convert_dms_to_dd;
use crate::tags::{format_tag_number, RawExifTags, TagValue};

/// Sentinel for any metadata or analysis field that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Descriptor for the uploaded or captured file backing a metadata record.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    /// Original filename as supplied by the user.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME type (e.g. "image/jpeg").
    pub mime_type: String,
}

/// File-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicMetadata {
    pub filename: String,
    pub filesize: String,
    pub filetype: String,
    pub dimensions: String,
    pub date_time: String,
}

/// GPS-derived location metadata, in signed decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetadata {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
}

/// Camera body and capture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraMetadata {
    pub make: String,
    pub model: String,
    pub aperture: String,
    pub shutter_speed: String,
    pub iso: String,
    pub focal_length: String,
    pub flash: String,
}

/// Authoring and processing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareMetadata {
    pub software: String,
    pub creator: String,
    pub copyright: String,
}

/// Normalized, fixed-shape metadata record for a single image.
///
/// Created once per uploaded or captured image and held in memory for the
/// session; there is no persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    pub basic: BasicMetadata,
    pub location: LocationMetadata,
    pub camera: CameraMetadata,
    pub software: SoftwareMetadata,
    /// Original tag mapping, retained verbatim for diagnostic display.
    pub raw: RawExifTags,
}

/// Map a raw tag dictionary plus file attributes into a [`PhotoMetadata`].
///
/// Each field is resolved independently against its known tag key with a
/// documented default; no field may fail the whole record.
pub fn process_metadata(tags: &RawExifTags, file: &FileDescriptor) -> PhotoMetadata {
    let basic = BasicMetadata {
        filename: file.name.clone(),
        filesize: format_file_size(file.size),
        filetype: file.mime_type.clone(),
        dimensions: dimensions(tags),
        date_time: display_or_unknown(tags, "DateTime"),
    };

    let location = LocationMetadata {
        latitude: coordinate(tags, "GPSLatitude", "GPSLatitudeRef"),
        longitude: coordinate(tags, "GPSLongitude", "GPSLongitudeRef"),
        altitude: match number_tag(tags, "GPSAltitude") {
            Some(alt) => format!("{} m", format_tag_number(alt)),
            None => UNKNOWN.to_string(),
        },
    };

    let camera = CameraMetadata {
        make: display_or_unknown(tags, "Make"),
        model: display_or_unknown(tags, "Model"),
        aperture: match number_tag(tags, "FNumber") {
            Some(f) => format!("f/{}", format_tag_number(f)),
            None => UNKNOWN.to_string(),
        },
        shutter_speed: shutter_speed(tags),
        iso: display_or_unknown(tags, "ISOSpeedRatings"),
        focal_length: match number_tag(tags, "FocalLength") {
            Some(f) => format!("{} mm", format_tag_number(f)),
            None => UNKNOWN.to_string(),
        },
        // Tag value 1 means "flash fired"; all other codes (including the
        // fired-with-no-strobe-return variants) collapse to "Off".
        flash: match number_tag(tags, "Flash") {
            Some(f) if f == 1.0 => "On".to_string(),
            Some(_) => "Off".to_string(),
            None => UNKNOWN.to_string(),
        },
    };

    let software = SoftwareMetadata {
        software: display_or_unknown(tags, "Software"),
        creator: display_or_unknown(tags, "Artist"),
        copyright: display_or_unknown(tags, "Copyright"),
    };

    PhotoMetadata {
        basic,
        location,
        camera,
        software,
        raw: tags.clone(),
    }
}

/// Dimensions require both pixel tags; either one missing degrades the pair.
fn dimensions(tags: &RawExifTags) -> String {
    match (
        number_tag(tags, "PixelXDimension"),
        number_tag(tags, "PixelYDimension"),
    ) {
        (Some(w), Some(h)) => {
            format!("{} × {}", format_tag_number(w), format_tag_number(h))
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Resolve one GPS coordinate through the DMS converter, using whatever
/// hemisphere reference is present (an absent reference reads as "").
fn coordinate(tags: &RawExifTags, coord_key: &str, ref_key: &str) -> String {
    let dms = match tags.get(coord_key).and_then(TagValue::as_number_list) {
        Some(dms) => dms,
        None => return UNKNOWN.to_string(),
    };
    let reference = tags
        .get(ref_key)
        .and_then(TagValue::as_text)
        .unwrap_or_default();
    convert_dms_to_dd(dms, reference)
}

/// Reciprocal shutter formatting. Exposure times of zero or below (or
/// non-finite values) have no meaningful reciprocal and degrade to the
/// sentinel.
fn shutter_speed(tags: &RawExifTags) -> String {
    match number_tag(tags, "ExposureTime") {
        Some(t) if t > 0.0 && t.is_finite() => format!("1/{}", (1.0 / t).round() as i64),
        _ => UNKNOWN.to_string(),
    }
}

fn number_tag(tags: &RawExifTags, key: &str) -> Option<f64> {
    tags.get(key).and_then(TagValue::as_number)
}

fn display_or_unknown(tags: &RawExifTags, key: &str) -> String {
    match tags.get(key) {
        Some(value) => {
            let s = value.display_string();
            if s.is_empty() {
                UNKNOWN.to_string()
            } else {
                s
            }
        }
        None => UNKNOWN.to_string(),
    }
}
