//! Listing price helper

use crate::record::AnalysisRecord;
use vastra_recog::QualityRating;

/// Marketplace base price per kilogram
pub const DEFAULT_BASE_PRICE: f64 = 300.0;

/// Price multiplier for a quality tier.
pub fn tier_multiplier(rating: QualityRating) -> f64 {
    match rating {
        QualityRating::Excellent => 1.3,
        QualityRating::Good => 1.1,
        QualityRating::Fair => 1.0,
    }
}

/// Suggest a whole-number price per kilogram for an analyzed material.
///
/// Exact halves round to the even neighbour, so 370.5 becomes 370.
///
/// # Arguments
/// * `record` - Analysis of the material photo
/// * `base_price` - Marketplace base price per kilogram
pub fn suggest_price_per_kg(record: &AnalysisRecord, base_price: f64) -> f64 {
    (base_price * tier_multiplier(record.quality_rating) * record.quality).round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_price() {
        // 100 * 1.1 * 0.75 lands just above 82.5
        assert_eq!(suggest_price_per_kg(&AnalysisRecord::fallback(), 100.0), 83.0);
    }

    #[test]
    fn test_default_base() {
        // 300 * 1.1 * 0.75 = 247.5
        assert_eq!(
            suggest_price_per_kg(&AnalysisRecord::fallback(), DEFAULT_BASE_PRICE),
            248.0
        );
    }

    #[test]
    fn test_excellent_price() {
        let mut rec = AnalysisRecord::fallback();
        rec.quality = 0.9;
        rec.quality_rating = QualityRating::Excellent;
        // 50 * 1.3 * 0.9 = 58.5
        assert_eq!(suggest_price_per_kg(&rec, 50.0), 58.0);
    }

    #[test]
    fn test_capped_quality_price() {
        let mut rec = AnalysisRecord::fallback();
        rec.quality = 0.95;
        rec.quality_rating = QualityRating::Excellent;
        // 300 * 1.3 * 0.95 = 370.5
        assert_eq!(suggest_price_per_kg(&rec, DEFAULT_BASE_PRICE), 370.0);
    }
}
