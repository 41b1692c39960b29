//! Error types for the analysis pipeline
//!
//! None of these cross [`crate::Analyzer::analyze`]; they exist so the
//! pipeline can name what went wrong before substituting the fallback
//! record, and so tests can inspect failures through
//! [`crate::Analyzer::try_analyze`].

use crate::pipeline::Stage;
use thiserror::Error;
use vastra_io::IoError;

/// A failure inside one analysis stage
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The bytes are not a decodable image in a supported format
    #[error("decode error: {0}")]
    Decode(#[source] IoError),

    /// The decoded image has no pixels
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Downsampling failed
    #[error("transform error: {0}")]
    Transform(#[from] vastra_transform::TransformError),

    /// Color conversion or ranking failed
    #[error("color error: {0}")]
    Color(#[from] vastra_color::ColorError),

    /// Descriptor computation failed
    #[error("filter error: {0}")]
    Filter(#[from] vastra_filter::FilterError),

    /// A dependency panicked while the stage was running
    #[error("stage panicked: {0}")]
    Panicked(String),
}

impl From<IoError> for AnalysisError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Core(vastra_core::Error::InvalidDimension { width, height }) => {
                AnalysisError::EmptyImage { width, height }
            }
            other => AnalysisError::Decode(other),
        }
    }
}

impl AnalysisError {
    /// Short name of the error kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Decode(_) => "DecodeError",
            AnalysisError::EmptyImage { .. } => "EmptyImageError",
            AnalysisError::Transform(_) => "TransformError",
            AnalysisError::Color(_) => "ColorError",
            AnalysisError::Filter(_) => "FilterError",
            AnalysisError::Panicked(_) => "Panic",
        }
    }
}

/// An [`AnalysisError`] tagged with the stage it came from
#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    pub source: AnalysisError,
}

/// Errors from loading or validating [`crate::AnalysisOptions`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Downsample cap below 2
    #[error("max_side must be at least 2, got {0}")]
    InvalidMaxSide(u32),

    /// Edge threshold outside 1..=254
    #[error("edge_threshold must be in 1..=254, got {0}")]
    InvalidEdgeThreshold(u8),

    /// Achromatic saturation outside [0, 100]
    #[error("achromatic_saturation must be in [0, 100], got {0}")]
    InvalidSaturation(f32),

    /// Palette size outside 1..=8
    #[error("dominant_palette_size must be in 1..=8, got {0}")]
    InvalidPaletteSize(usize),

    /// Malformed JSON
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or written
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_maps_to_empty_image() {
        let io = IoError::Core(vastra_core::Error::InvalidDimension {
            width: 0,
            height: 12,
        });
        let err = AnalysisError::from(io);
        assert!(matches!(
            err,
            AnalysisError::EmptyImage {
                width: 0,
                height: 12
            }
        ));
        assert_eq!(err.kind(), "EmptyImageError");
    }

    #[test]
    fn test_other_io_errors_are_decode() {
        let err = AnalysisError::from(IoError::UnsupportedFormat("bmp".to_string()));
        assert_eq!(err.kind(), "DecodeError");
    }

    #[test]
    fn test_stage_error_display() {
        let err = StageError {
            stage: Stage::Decoding,
            source: AnalysisError::Panicked("boom".to_string()),
        };
        assert_eq!(err.to_string(), "decoding stage failed: stage panicked: boom");
    }
}
