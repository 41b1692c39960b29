//! Edge density
//!
//! A position `(x, y)` with `x < w - 1` and `y < h - 1` is an edge when the
//! absolute luminance difference to its right neighbour or to its lower
//! neighbour is strictly greater than the threshold. Each position counts
//! at most once.

use crate::{FilterError, FilterResult};
use vastra_core::GrayBuffer;

/// Luminance difference above which neighbours form an edge
pub const DEFAULT_EDGE_THRESHOLD: u8 = 25;

/// Options for edge counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOptions {
    /// Strict lower bound on the neighbour difference, 1..=254
    pub threshold: u8,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl EdgeOptions {
    pub fn validate(&self) -> FilterResult<()> {
        if self.threshold == 0 || self.threshold == 255 {
            return Err(FilterError::InvalidParameters(format!(
                "edge threshold must be in 1..=254, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Count edge positions and the number of positions examined.
///
/// Returns `(0, 0)` when either dimension is below 2.
pub fn count_edges(gray: &GrayBuffer, options: &EdgeOptions) -> FilterResult<(u64, u64)> {
    options.validate()?;
    let (w, h) = (gray.width(), gray.height());
    if w < 2 || h < 2 {
        return Ok((0, 0));
    }
    let t = i16::from(options.threshold);

    let mut edges = 0u64;
    for y in 0..h - 1 {
        let row = gray.row(y);
        let below = gray.row(y + 1);
        for x in 0..(w - 1) as usize {
            let v = i16::from(row[x]);
            if (v - i16::from(row[x + 1])).abs() > t || (v - i16::from(below[x])).abs() > t {
                edges += 1;
            }
        }
    }
    let positions = u64::from(w - 1) * u64::from(h - 1);
    Ok((edges, positions))
}

/// Fraction of interior positions that are edges, in [0, 1].
///
/// Returns 0 when either dimension is below 2.
///
/// # Arguments
/// * `gray` - Luminance grid
/// * `options` - Edge threshold
pub fn edge_density(gray: &GrayBuffer, options: &EdgeOptions) -> FilterResult<f64> {
    let (edges, positions) = count_edges(gray, options)?;
    if positions == 0 {
        return Ok(0.0);
    }
    Ok(edges as f64 / positions as f64)
}
