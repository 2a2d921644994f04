//! Loosely-typed EXIF tag values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open-ended mapping from EXIF tag name to a loosely-typed value.
///
/// Produced by the EXIF reader and never assumed complete; keys are tag names
/// defined by the EXIF specification, when present. Retained verbatim on the
/// normalized metadata record for diagnostic display.
pub type RawExifTags = BTreeMap<String, TagValue>;

/// A single EXIF tag value as surfaced by the reader.
///
/// Tag sets vary by camera and are not exhaustively standardized, so values
/// stay loosely typed and each consumer resolves the tags it knows about
/// individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Number(f64),
    Text(String),
    NumberList(Vec<f64>),
}

impl TagValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TagValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number_list(&self) -> Option<&[f64]> {
        match self {
            TagValue::NumberList(ns) => Some(ns),
            _ => None,
        }
    }

    /// Render the value the way it appears in a normalized metadata field.
    pub fn display_string(&self) -> String {
        match self {
            TagValue::Number(n) => format_tag_number(*n),
            TagValue::Text(s) => s.clone(),
            TagValue::NumberList(ns) => ns
                .iter()
                .map(|n| format_tag_number(*n))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Format a numeric tag without the trailing `.0` whole values would
/// otherwise carry (`f/1.8` but `f/2`, `50 mm` not `50.0 mm`).
pub(crate) fn format_tag_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
