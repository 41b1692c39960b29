//! Texture descriptors
//!
//! Computed once per analysis and shared by the texture ladder, the
//! pattern ladder and the quality scorer.

use crate::FilterResult;
use crate::edge::{EdgeOptions, edge_density};
use crate::stats::gray_stats;
use vastra_core::GrayBuffer;

/// Statistical summary of a luminance grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureDescriptors {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Fraction of interior positions that are edges, in [0, 1]
    pub edge_density: f64,
}

/// Compute all four descriptors.
pub fn compute_descriptors(
    gray: &GrayBuffer,
    options: &EdgeOptions,
) -> FilterResult<TextureDescriptors> {
    let stats = gray_stats(gray);
    let edge_density = edge_density(gray, options)?;
    Ok(TextureDescriptors {
        mean: stats.mean,
        variance: stats.variance,
        std_dev: stats.std_dev,
        edge_density,
    })
}
