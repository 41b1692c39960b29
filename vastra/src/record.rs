//! The analysis record and the fixed fallback

use serde::{Deserialize, Serialize};
use vastra_color::ColorCategory;
use vastra_recog::{
    PatternCategory, PatternKind, QualityRating, TextureCategory, TextureKind, suggestions,
};

/// Whether a record was computed from pixels or substituted after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Computed,
    Fallback,
}

/// Result of analyzing one fabric photo
///
/// Created once per call and owned by the caller; the pipeline keeps no
/// reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Display name of the dominant color, e.g. "Navy Blue"
    pub color: String,
    pub color_category: ColorCategory,
    /// Dominant color as `#rrggbb`
    pub color_hex: String,
    /// Most frequent exact colors, most frequent first
    pub dominant_colors: Vec<String>,
    pub texture: String,
    pub texture_category: TextureCategory,
    pub pattern: String,
    pub pattern_category: PatternCategory,
    /// Quality score in [0, 1], two decimals
    pub quality: f64,
    pub quality_rating: QualityRating,
    /// Kilograms, one decimal
    pub estimated_weight: f64,
    pub textile_name: String,
    /// At most five reuse ideas
    pub suggestions: Vec<String>,
    pub provenance: Provenance,
}

impl AnalysisRecord {
    /// The record returned whenever analysis fails.
    pub fn fallback() -> Self {
        let texture = TextureKind::CottonBlend;
        let pattern = PatternKind::Textured;
        Self {
            color: "Multi-color".to_string(),
            color_category: ColorCategory::Multi,
            color_hex: "#d4af37".to_string(),
            dominant_colors: ["#d4af37", "#c94b7d", "#667eea"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            texture: texture.name().to_string(),
            texture_category: texture.category(),
            pattern: pattern.name().to_string(),
            pattern_category: pattern.category(),
            quality: 0.75,
            quality_rating: QualityRating::Good,
            estimated_weight: 1.5,
            textile_name: "Multi-color Cotton Blend".to_string(),
            suggestions: suggestions(texture.category(), pattern.category())
                .into_iter()
                .map(str::to_string)
                .collect(),
            provenance: Provenance::Fallback,
        }
    }

    /// Check whether this is the substituted fallback record.
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    /// Compact JSON form, as stored by the material catalogue.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_contents() {
        let r = AnalysisRecord::fallback();
        assert!(r.is_fallback());
        assert_eq!(r.color, "Multi-color");
        assert_eq!(r.texture, "Cotton Blend");
        assert_eq!(r.texture_category, TextureCategory::Cotton);
        assert_eq!(r.pattern, "Textured");
        assert_eq!(r.quality_rating, QualityRating::Good);
        assert_eq!(r.suggestions[0], "Tote bags");
        assert_eq!(r.suggestions.len(), 5);
    }

    #[test]
    fn test_json_tags() {
        let json = AnalysisRecord::fallback().to_json_string().unwrap();
        assert!(json.contains(r#""provenance":"fallback""#));
        assert!(json.contains(r#""color_category":"multi""#));
        assert!(json.contains(r#""texture_category":"cotton""#));
        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AnalysisRecord::fallback());
    }
}
