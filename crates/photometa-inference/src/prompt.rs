//! The fixed instructional prompt for photo context analysis.

/// Prompt demanding a JSON object matching the photo analysis shape exactly.
///
/// The shape here is advisory enforcement only; the client-side fallback is
/// the real safety net against shape drift.
const PHOTO_ANALYSIS_PROMPT: &str = r#"Analyze this image in detail and provide a comprehensive assessment in JSON format. Focus on extracting visual information that would help identify:

1. The main content and context of the photo
2. When and where it was likely taken
3. The social and visual elements present

Return ONLY a valid JSON object with this structure:
{
  "photoContent": {
    "mainSubject": "Primary subject of the photo",
    "description": "Detailed description of what's in the image (2-3 sentences)",
    "occasion": "Type of event/occasion if applicable (be specific)",
    "confidence": "Your confidence level in this analysis (High/Medium/Low)"
  },
  "temporalContext": {
    "timeOfDay": "Morning/Afternoon/Evening/Night",
    "probableYear": "Estimated year or decade based on visual cues",
    "season": "Season if determinable",
    "dayType": "Weekday/Weekend/Holiday inference"
  },
  "locationContext": {
    "environment": "Indoor/Outdoor/Urban/Rural",
    "probablePlace": "Specific type of place (be detailed)",
    "probableCity": "Possible city or region based on visual cues (if identifiable)",
    "culturalIndicators": "Cultural elements visible in the photo"
  },
  "visualElements": {
    "dominantColors": ["3-5 main colors in the image"],
    "lighting": "Quality and type of lighting",
    "composition": "Professional/Amateur, formal/casual",
    "peopleCount": "Approximate number of people if present"
  },
  "socialContext": {
    "groupDynamics": "Family/Friends/Colleagues/Strangers",
    "activity": "What people are doing in the photo",
    "mood": "Overall emotional tone",
    "formalityLevel": "Formal/Semi-formal/Casual gathering"
  }
}

Be specific and detailed in your analysis. If you're uncertain about any element, provide your best guess but indicate lower confidence. For probable city/location, look for architectural styles, signage, natural features, or other cultural indicators."#;

/// The fixed analysis prompt sent with every dispatched image.
pub fn photo_analysis_prompt() -> &'static str {
    PHOTO_ANALYSIS_PROMPT
}
