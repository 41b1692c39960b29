//! Downsampled view of a decoded image
//!
//! Holds the capped RGB buffer the classifiers read, the original
//! dimensions the quality scorer needs, and a luminance grid built on
//! first use.

use crate::config::AnalysisOptions;
use crate::error::AnalysisError;
use std::cell::OnceCell;
use vastra_color::{GrayConversion, convert_to_gray};
use vastra_core::{GrayBuffer, PixelBuffer};
use vastra_transform::scale_to_fit;

/// One analysis call's working image
#[derive(Debug)]
pub struct SampledImage {
    original_width: u32,
    original_height: u32,
    buffer: PixelBuffer,
    gray_conversion: GrayConversion,
    gray: OnceCell<GrayBuffer>,
}

impl SampledImage {
    /// Downsample a decoded image to the configured cap.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyImage`] for a zero-dimension buffer
    /// and [`AnalysisError::Transform`] if scaling fails.
    pub fn new(decoded: &PixelBuffer, options: &AnalysisOptions) -> Result<Self, AnalysisError> {
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(AnalysisError::EmptyImage { width, height });
        }
        let buffer = scale_to_fit(decoded, options.max_side, options.scale_method)?;
        Ok(Self {
            original_width: width,
            original_height: height,
            buffer,
            gray_conversion: options.gray_conversion,
            gray: OnceCell::new(),
        })
    }

    /// Dimensions before downsampling.
    pub fn original_dimensions(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// Pixels before downsampling.
    pub fn original_pixel_count(&self) -> u64 {
        u64::from(self.original_width) * u64::from(self.original_height)
    }

    /// The capped RGB buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Luminance of the capped buffer, converted once.
    pub fn gray(&self) -> Result<&GrayBuffer, AnalysisError> {
        if let Some(gray) = self.gray.get() {
            return Ok(gray);
        }
        let gray = convert_to_gray(&self.buffer, self.gray_conversion)?;
        Ok(self.gray.get_or_init(|| gray))
    }
}
