//! Color content analysis
//!
//! Exact-pixel frequency over a (downsampled) buffer:
//! - Dominant color (the mode)
//! - Top-N color ranking
//! - Unique color count
//!
//! Ties are always broken by first-seen order in row-major scan, so the
//! result never depends on hash iteration order.

use crate::{ColorError, ColorResult};
use std::collections::HashMap;
use vastra_core::{PixelBuffer, color};

/// One color and how many pixels carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub rgb: (u8, u8, u8),
    pub count: u32,
}

impl ColorCount {
    /// Lowercase `#rrggbb` form of the color.
    pub fn hex(&self) -> String {
        color::to_hex(self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// Count pixels per color, remembering where each color was first seen.
fn histogram(buf: &PixelBuffer) -> HashMap<u32, (u32, usize)> {
    let mut hist: HashMap<u32, (u32, usize)> = HashMap::new();
    for (i, &p) in buf.data().iter().enumerate() {
        hist.entry(p).or_insert((0, i)).0 += 1;
    }
    hist
}

fn ranked(buf: &PixelBuffer) -> Vec<(u32, u32, usize)> {
    let mut entries: Vec<(u32, u32, usize)> = histogram(buf)
        .into_iter()
        .map(|(p, (count, first))| (p, count, first))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries
}

/// Find the most frequent exact color.
///
/// Among equally frequent colors, the one appearing first in row-major
/// order wins.
pub fn dominant_color(buf: &PixelBuffer) -> ColorCount {
    let mut best = (buf.data()[0], 0u32, usize::MAX);
    for (p, (count, first)) in histogram(buf) {
        if count > best.1 || (count == best.1 && first < best.2) {
            best = (p, count, first);
        }
    }
    ColorCount {
        rgb: color::extract_rgb(best.0),
        count: best.1,
    }
}

/// Rank the `n` most frequent exact colors, most frequent first.
///
/// Fewer than `n` entries are returned when the image has fewer colors.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `n` is 0.
pub fn dominant_colors(buf: &PixelBuffer, n: usize) -> ColorResult<Vec<ColorCount>> {
    if n == 0 {
        return Err(ColorError::InvalidParameters(
            "palette size must be positive".to_string(),
        ));
    }
    Ok(ranked(buf)
        .into_iter()
        .take(n)
        .map(|(p, count, _)| ColorCount {
            rgb: color::extract_rgb(p),
            count,
        })
        .collect())
}
