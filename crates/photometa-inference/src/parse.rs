//! Parsing of vision model replies into JSON values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use photometa_core::{Error, Result};

/// First top-level `{...}` group, greedy across newlines.
static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("brace pattern compiles"));

/// Parse the model's reply content into a JSON value.
///
/// The response format is constrained to JSON, so a direct parse is expected
/// to succeed. Failing that, the first `{...}` substring is extracted and
/// parsed. A reply with no brace group at all parses as the default empty
/// object; a brace group that still fails to parse is a fatal error for the
/// request.
pub fn parse_analysis_json(content: &str) -> Result<Value> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(error = %e, "direct JSON parse of model reply failed, extracting brace group");
            match JSON_OBJECT_RE.find(content) {
                Some(m) => serde_json::from_str(m.as_str()).map_err(|e| {
                    Error::Serialization(format!("Model reply is not recoverable JSON: {}", e))
                }),
                None => Ok(Value::Object(serde_json::Map::new())),
            }
        }
    }
}
