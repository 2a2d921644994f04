//! Fixed-shape AI photo analysis records.
//!
//! The analysis is best-effort enrichment produced by a third-party vision
//! model; it is explicitly not a source of truth. Shape enforcement happens
//! at deserialization: a reply that does not match the record exactly is
//! treated as malformed and replaced by the all-`"Unknown"` fallback.

use serde::{Deserialize, Serialize};

use crate::metadata::UNKNOWN;

/// Core photo content identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoContent {
    pub main_subject: String,
    pub description: String,
    pub occasion: String,
    /// High/Medium/Low. Loosely enforced, not validated.
    pub confidence: String,
}

/// Temporal information inferred from visual cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalContext {
    pub time_of_day: String,
    pub probable_year: String,
    pub season: String,
    pub day_type: String,
}

/// Location information inferred from visual cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContext {
    pub environment: String,
    pub probable_place: String,
    pub probable_city: String,
    pub cultural_indicators: String,
}

/// Visual composition of the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElements {
    /// Short ordered list of color names (3-5 entries from the model).
    pub dominant_colors: Vec<String>,
    pub lighting: String,
    pub composition: String,
    pub people_count: String,
}

/// Social setting of the photographed scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialContext {
    pub group_dynamics: String,
    pub activity: String,
    pub mood: String,
    pub formality_level: String,
}

/// Structured contextual interpretation of a photo.
///
/// Requested on demand per image, replaced on re-request, and cleared when
/// the source image changes. When analysis fails, [`PhotoAnalysis::unknown`]
/// stands in so consumers never see a partial or absent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAnalysis {
    pub photo_content: PhotoContent,
    pub temporal_context: TemporalContext,
    pub location_context: LocationContext,
    pub visual_elements: VisualElements,
    pub social_context: SocialContext,
}

impl PhotoAnalysis {
    /// Complete fallback record with every leaf field set to the sentinel.
    pub fn unknown() -> Self {
        let unknown = || UNKNOWN.to_string();
        Self {
            photo_content: PhotoContent {
                main_subject: unknown(),
                description: unknown(),
                occasion: unknown(),
                confidence: unknown(),
            },
            temporal_context: TemporalContext {
                time_of_day: unknown(),
                probable_year: unknown(),
                season: unknown(),
                day_type: unknown(),
            },
            location_context: LocationContext {
                environment: unknown(),
                probable_place: unknown(),
                probable_city: unknown(),
                cultural_indicators: unknown(),
            },
            visual_elements: VisualElements {
                dominant_colors: vec![unknown()],
                lighting: unknown(),
                composition: unknown(),
                people_count: unknown(),
            },
            social_context: SocialContext {
                group_dynamics: unknown(),
                activity: unknown(),
                mood: unknown(),
                formality_level: unknown(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_record_is_complete() {
        let analysis = PhotoAnalysis::unknown();

        assert_eq!(analysis.photo_content.main_subject, "Unknown");
        assert_eq!(analysis.photo_content.confidence, "Unknown");
        assert_eq!(analysis.temporal_context.day_type, "Unknown");
        assert_eq!(analysis.location_context.probable_city, "Unknown");
        assert_eq!(analysis.visual_elements.lighting, "Unknown");
        assert_eq!(analysis.social_context.formality_level, "Unknown");
        assert_eq!(
            analysis.visual_elements.dominant_colors,
            vec!["Unknown".to_string()]
        );
    }

    #[test]
    fn test_serialized_shape_matches_wire_contract() {
        let analysis = PhotoAnalysis::unknown();
        let json = serde_json::to_value(&analysis).unwrap();

        assert!(json["photoContent"]["mainSubject"].is_string());
        assert!(json["temporalContext"]["timeOfDay"].is_string());
        assert!(json["locationContext"]["culturalIndicators"].is_string());
        assert!(json["visualElements"]["dominantColors"].is_array());
        assert!(json["socialContext"]["groupDynamics"].is_string());
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = serde_json::json!({
            "photoContent": {
                "mainSubject": "Beach sunset",
                "description": "Waves rolling in at golden hour.",
                "occasion": "Vacation",
                "confidence": "High"
            },
            "temporalContext": {
                "timeOfDay": "Evening",
                "probableYear": "2020s",
                "season": "Summer",
                "dayType": "Weekend"
            },
            "locationContext": {
                "environment": "Outdoor",
                "probablePlace": "Beach",
                "probableCity": "Lisbon",
                "culturalIndicators": "Atlantic coastline"
            },
            "visualElements": {
                "dominantColors": ["orange", "blue", "gold"],
                "lighting": "Natural, warm",
                "composition": "Amateur, casual",
                "peopleCount": "0"
            },
            "socialContext": {
                "groupDynamics": "Strangers",
                "activity": "None visible",
                "mood": "Calm",
                "formalityLevel": "Casual"
            }
        });

        let analysis: PhotoAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(analysis.photo_content.main_subject, "Beach sunset");
        assert_eq!(analysis.visual_elements.dominant_colors.len(), 3);
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        // A reply missing a whole sub-group is malformed, not partially usable.
        let json = serde_json::json!({
            "photoContent": {
                "mainSubject": "Beach sunset",
                "description": "Waves.",
                "occasion": "Vacation",
                "confidence": "High"
            }
        });

        assert!(serde_json::from_value::<PhotoAnalysis>(json).is_err());
    }

    #[test]
    fn test_round_trip() {
        let analysis = PhotoAnalysis::unknown();
        let json = serde_json::to_string(&analysis).unwrap();
        let back: PhotoAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis, back);
    }
}
