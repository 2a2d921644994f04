//! # photometa-inference
//!
//! Vision LLM backend abstraction for photometa.
//!
//! This crate provides:
//! - Pluggable vision backend trait
//! - OpenAI-compatible implementation (chat completions with image content)
//! - The fixed photo-analysis prompt contract
//! - Parsing of model replies into JSON, with brace-extraction fallback

pub mod mock;
pub mod parse;
pub mod prompt;
pub mod types;
pub mod vision;

// Re-export core types
pub use photometa_core::*;

pub use parse::parse_analysis_json;
pub use prompt::photo_analysis_prompt;
pub use vision::{OpenAIVisionBackend, OpenAIVisionConfig, VisionBackend};
