//! Quality scoring
//!
//! `score = min(0.95, 0.65 + (pixels / 2_000_000) * 0.20 + (variance / 10_000) * 0.10)`,
//! clamped to [0, 1] and rounded to two decimals before tiering, so the
//! reported score and tier always agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the score
pub const QUALITY_CAP: f64 = 0.95;
/// Score of a zero-pixel, zero-variance input
pub const QUALITY_FLOOR: f64 = 0.65;

/// Quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityRating {
    Excellent,
    Good,
    Fair,
}

impl QualityRating {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::Good => "Good",
            QualityRating::Fair => "Fair",
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the quality score.
///
/// # Arguments
/// * `pixel_count` - Pixels of the original image, before downsampling
/// * `variance` - Luminance variance of the analyzed image
pub fn quality_score(pixel_count: u64, variance: f64) -> f64 {
    let raw = QUALITY_FLOOR
        + (pixel_count as f64 / 2_000_000.0) * 0.20
        + (variance / 10_000.0) * 0.10;
    let bounded = if raw.is_nan() {
        QUALITY_FLOOR
    } else {
        raw.min(QUALITY_CAP)
    };
    (bounded.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Map a score to its tier: >= 0.85 Excellent, >= 0.70 Good, else Fair.
pub fn rate_quality(score: f64) -> QualityRating {
    if score >= 0.85 {
        QualityRating::Excellent
    } else if score >= 0.70 {
        QualityRating::Good
    } else {
        QualityRating::Fair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_uniform_is_fair() {
        let s = quality_score(50 * 50, 0.0);
        assert_eq!(s, 0.65);
        assert_eq!(rate_quality(s), QualityRating::Fair);
    }

    #[test]
    fn test_large_image_is_capped() {
        let s = quality_score(4000 * 3000, 5000.0);
        assert_eq!(s, 0.95);
        assert_eq!(rate_quality(s), QualityRating::Excellent);
    }

    #[test]
    fn test_rounding_before_tiering() {
        // 0.65 + 0.1999 = 0.8499 rounds to 0.85
        let s = quality_score(1_999_000, 0.0);
        assert_eq!(s, 0.85);
        assert_eq!(rate_quality(s), QualityRating::Excellent);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(rate_quality(0.70), QualityRating::Good);
        assert_eq!(rate_quality(0.69), QualityRating::Fair);
        assert_eq!(rate_quality(0.84), QualityRating::Good);
    }

    #[test]
    fn test_always_in_unit_interval() {
        for &pc in &[0u64, 1, 90_000, 12_000_000, u64::MAX] {
            for &var in &[0.0, 1.0, 16_256.25, f64::NAN] {
                let s = quality_score(pc, var);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
