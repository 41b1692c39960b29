//! Image scaling operations
//!
//! Only reduction is needed: the analyzer never enlarges an image.
//!
//! | Function | Use |
//! |---|---|
//! | `scale_to_fit` | shrink so the longer side is at most a cap |
//! | `scale_to_size` | shrink to an explicit size with a chosen method |
//! | `scale_area_map` | box-average reduction |
//! | `scale_by_sampling` | nearest-neighbour reduction |

use crate::{TransformError, TransformResult};
use serde::{Deserialize, Serialize};
use vastra_core::{PixelBuffer, PixelBufferMut, color};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, keeps exact source colors)
    Sampling,
    /// Area mapping (anti-aliased, averages covered pixels)
    #[default]
    AreaMap,
}

/// Compute the size that fits `width` x `height` inside a square of side `max_side`.
///
/// Images already within the cap keep their size. Otherwise the longer
/// side becomes exactly `max_side` and the shorter one is rounded to the
/// nearest integer, never below 1.
///
/// # Examples
///
/// ```
/// use vastra_transform::fit_dimensions;
///
/// assert_eq!(fit_dimensions(4000, 3000, 300), (300, 225));
/// assert_eq!(fit_dimensions(120, 80, 300), (120, 80));
/// assert_eq!(fit_dimensions(10_000, 3, 300), (300, 1));
/// ```
pub fn fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= max_side || longer == 0 {
        return (width, height);
    }
    let fit = |side: u32| -> u32 {
        let num = u64::from(side) * u64::from(max_side) * 2 + u64::from(longer);
        let den = u64::from(longer) * 2;
        ((num / den) as u32).max(1)
    };
    (fit(width), fit(height))
}

/// Shrink an image so its longer side does not exceed `max_side`.
///
/// Returns a shared clone when the image is already small enough.
///
/// # Arguments
/// * `buf` - Input image
/// * `max_side` - Cap on the longer side, at least 1
/// * `method` - Reduction algorithm
pub fn scale_to_fit(
    buf: &PixelBuffer,
    max_side: u32,
    method: ScaleMethod,
) -> TransformResult<PixelBuffer> {
    if max_side == 0 {
        return Err(TransformError::InvalidParameters(
            "max_side must be positive".to_string(),
        ));
    }
    let (w, h) = fit_dimensions(buf.width(), buf.height(), max_side);
    if (w, h) == buf.dimensions() {
        return Ok(buf.clone());
    }
    scale_to_size(buf, w, h, method)
}

/// Shrink an image to an explicit size.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] when the target is zero or
/// larger than the source in either dimension.
pub fn scale_to_size(
    buf: &PixelBuffer,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<PixelBuffer> {
    match method {
        ScaleMethod::Sampling => scale_by_sampling(buf, width, height),
        ScaleMethod::AreaMap => scale_area_map(buf, width, height),
    }
}

fn check_target(buf: &PixelBuffer, width: u32, height: u32) -> TransformResult<()> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size {}x{} has a zero dimension",
            width, height
        )));
    }
    if width > buf.width() || height > buf.height() {
        return Err(TransformError::InvalidParameters(format!(
            "target size {}x{} exceeds source {}x{}",
            width,
            height,
            buf.width(),
            buf.height()
        )));
    }
    Ok(())
}

/// Nearest-neighbour reduction.
///
/// Each destination pixel takes the source pixel under its center.
pub fn scale_by_sampling(
    buf: &PixelBuffer,
    width: u32,
    height: u32,
) -> TransformResult<PixelBuffer> {
    check_target(buf, width, height)?;
    let (sw, sh) = (u64::from(buf.width()), u64::from(buf.height()));
    let (dw, dh) = (u64::from(width), u64::from(height));

    let xmap: Vec<u32> = (0..dw)
        .map(|dx| ((2 * dx + 1) * sw / (2 * dw)) as u32)
        .collect();

    let mut out = PixelBufferMut::new(width, height)?;
    out.set_source_format(buf.source_format());
    out.set_source_mode(buf.source_mode());
    let dst = out.data_mut();
    for dy in 0..dh {
        let sy = ((2 * dy + 1) * sh / (2 * dh)) as u32;
        let src_row = buf.row(sy);
        let dst_row = &mut dst[(dy * dw) as usize..((dy + 1) * dw) as usize];
        for (d, &sx) in dst_row.iter_mut().zip(&xmap) {
            *d = src_row[sx as usize];
        }
    }
    Ok(out.into())
}

/// Box-average reduction.
///
/// Each destination pixel averages the source rectangle
/// `[dx*sw/dw, (dx+1)*sw/dw) x [dy*sh/dh, (dy+1)*sh/dh)`, rounded to nearest.
pub fn scale_area_map(buf: &PixelBuffer, width: u32, height: u32) -> TransformResult<PixelBuffer> {
    check_target(buf, width, height)?;
    let (sw, sh) = (u64::from(buf.width()), u64::from(buf.height()));
    let (dw, dh) = (u64::from(width), u64::from(height));

    let span = |d: u64, src: u64, dst: u64| -> (u32, u32) {
        let lo = d * src / dst;
        let hi = ((d + 1) * src / dst).max(lo + 1);
        (lo as u32, hi as u32)
    };
    let xspans: Vec<(u32, u32)> = (0..dw).map(|dx| span(dx, sw, dw)).collect();

    let mut out = PixelBufferMut::new(width, height)?;
    out.set_source_format(buf.source_format());
    out.set_source_mode(buf.source_mode());
    let dst = out.data_mut();
    for dy in 0..dh {
        let (y0, y1) = span(dy, sh, dh);
        for (dx, &(x0, x1)) in xspans.iter().enumerate() {
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for y in y0..y1 {
                for &p in &buf.row(y)[x0 as usize..x1 as usize] {
                    let (pr, pg, pb) = color::extract_rgb(p);
                    r += u64::from(pr);
                    g += u64::from(pg);
                    b += u64::from(pb);
                }
            }
            let n = u64::from(x1 - x0) * u64::from(y1 - y0);
            let avg = |sum: u64| ((sum + n / 2) / n) as u8;
            dst[(dy * dw) as usize + dx] = color::compose_rgb(avg(r), avg(g), avg(b));
        }
    }
    Ok(out.into())
}
