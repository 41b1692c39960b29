//! Analysis configuration
//!
//! Every tunable of the pipeline lives in [`AnalysisOptions`]. Options can
//! be built in code with the `with_*` setters or loaded from JSON; missing
//! JSON fields take their default.
//!
//! ```no_run
//! use vastra::AnalysisOptions;
//! use std::path::Path;
//!
//! let opts = AnalysisOptions::from_json_file(Path::new("vastra.json"))?;
//! let opts = AnalysisOptions::default().with_max_side(400);
//! # Ok::<(), vastra::ConfigError>(())
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vastra_color::{DEFAULT_ACHROMATIC_SATURATION, GrayConversion};
use vastra_filter::DEFAULT_EDGE_THRESHOLD;
use vastra_transform::ScaleMethod;

/// Default cap on the longer side of the analyzed image
pub const DEFAULT_MAX_SIDE: u32 = 300;

/// Default number of hex colors in the dominant palette
pub const DEFAULT_PALETTE_SIZE: usize = 3;

/// Largest allowed dominant palette
pub const MAX_PALETTE_SIZE: usize = 8;

/// Tunable parameters of the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Cap on the longer side after downsampling
    pub max_side: u32,

    /// Downsampling algorithm
    pub scale_method: ScaleMethod,

    /// Luminance formula for the grayscale buffer
    pub gray_conversion: GrayConversion,

    /// Neighbour difference above which a position is an edge
    pub edge_threshold: u8,

    /// Saturation (percent) below which colors are named by brightness only
    pub achromatic_saturation: f32,

    /// Number of colors reported in `dominant_colors`
    pub dominant_palette_size: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_side: DEFAULT_MAX_SIDE,
            scale_method: ScaleMethod::AreaMap,
            gray_conversion: GrayConversion::Perceptual,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            achromatic_saturation: DEFAULT_ACHROMATIC_SATURATION,
            dominant_palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl AnalysisOptions {
    pub fn with_max_side(mut self, max_side: u32) -> Self {
        self.max_side = max_side;
        self
    }

    pub fn with_scale_method(mut self, method: ScaleMethod) -> Self {
        self.scale_method = method;
        self
    }

    pub fn with_gray_conversion(mut self, conversion: GrayConversion) -> Self {
        self.gray_conversion = conversion;
        self
    }

    pub fn with_edge_threshold(mut self, threshold: u8) -> Self {
        self.edge_threshold = threshold;
        self
    }

    pub fn with_achromatic_saturation(mut self, saturation: f32) -> Self {
        self.achromatic_saturation = saturation;
        self
    }

    pub fn with_dominant_palette_size(mut self, size: usize) -> Self {
        self.dominant_palette_size = size;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_side < 2 {
            return Err(ConfigError::InvalidMaxSide(self.max_side));
        }
        if self.edge_threshold == 0 || self.edge_threshold == 255 {
            return Err(ConfigError::InvalidEdgeThreshold(self.edge_threshold));
        }
        if !(0.0..=100.0).contains(&self.achromatic_saturation) {
            return Err(ConfigError::InvalidSaturation(self.achromatic_saturation));
        }
        if !(1..=MAX_PALETTE_SIZE).contains(&self.dominant_palette_size) {
            return Err(ConfigError::InvalidPaletteSize(self.dominant_palette_size));
        }
        Ok(())
    }

    /// Parse options from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file and validate them.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save options to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = AnalysisOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.max_side, 300);
        assert_eq!(opts.edge_threshold, 25);
        assert_eq!(opts.dominant_palette_size, 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let opts =
            AnalysisOptions::from_json_str(r#"{"max_side": 200, "scale_method": "sampling"}"#)
                .unwrap();
        assert_eq!(opts.max_side, 200);
        assert_eq!(opts.scale_method, ScaleMethod::Sampling);
        assert_eq!(opts.gray_conversion, GrayConversion::Perceptual);
    }

    #[test]
    fn test_json_roundtrip() {
        let opts = AnalysisOptions::default()
            .with_gray_conversion(GrayConversion::Average)
            .with_dominant_palette_size(5);
        let json = opts.to_json_string().unwrap();
        assert!(json.contains("\"average\""));
        assert_eq!(AnalysisOptions::from_json_str(&json).unwrap(), opts);
    }

    #[test]
    fn test_validation_errors() {
        let base = AnalysisOptions::default();
        assert!(matches!(
            base.clone().with_max_side(1).validate(),
            Err(ConfigError::InvalidMaxSide(1))
        ));
        assert!(matches!(
            base.clone().with_edge_threshold(0).validate(),
            Err(ConfigError::InvalidEdgeThreshold(0))
        ));
        assert!(matches!(
            base.clone().with_achromatic_saturation(f32::NAN).validate(),
            Err(ConfigError::InvalidSaturation(_))
        ));
        assert!(matches!(
            base.with_dominant_palette_size(9).validate(),
            Err(ConfigError::InvalidPaletteSize(9))
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
