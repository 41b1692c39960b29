//! Marketplace listing filter over analysis records

use crate::record::AnalysisRecord;
use serde::{Deserialize, Serialize};

/// Color and texture constraints for browsing materials
///
/// A field matches when it is empty, `"all"`, or a case-insensitive
/// substring of the record's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialFilter {
    pub color: String,
    pub texture: String,
}

impl MaterialFilter {
    pub fn new(color: &str, texture: &str) -> Self {
        Self {
            color: color.to_string(),
            texture: texture.to_string(),
        }
    }

    /// Check whether a record satisfies both constraints.
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        field_matches(&self.color, &record.color) && field_matches(&self.texture, &record.texture)
    }
}

fn field_matches(wanted: &str, actual: &str) -> bool {
    let wanted = wanted.trim();
    if wanted.is_empty() || wanted.eq_ignore_ascii_case("all") {
        return true;
    }
    actual.to_lowercase().contains(&wanted.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained() {
        let rec = AnalysisRecord::fallback();
        assert!(MaterialFilter::default().matches(&rec));
        assert!(MaterialFilter::new("all", "ALL").matches(&rec));
    }

    #[test]
    fn test_substring_case_insensitive() {
        let rec = AnalysisRecord::fallback();
        assert!(MaterialFilter::new("multi", "").matches(&rec));
        assert!(MaterialFilter::new("", "cotton").matches(&rec));
        assert!(!MaterialFilter::new("blue", "").matches(&rec));
        assert!(!MaterialFilter::new("multi", "denim").matches(&rec));
    }
}
