//! GIF image format support
//!
//! Reads single-frame GIF images. Animated GIFs are rejected.

use crate::{IoError, IoResult, buffer_from_samples, check_pixel_budget};
use gif::{ColorOutput, DecodeOptions};
use std::io::Read;
use vastra_core::{ColorMode, ImageFormat, PixelBuffer};

/// Read a GIF image.
///
/// The decoder expands the palette to RGBA; transparency is dropped.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] when the logical screen is larger than
/// [`crate::MAX_DECODE_PIXELS`], before the screen is allocated.
pub fn read_gif<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let width = u32::from(decoder.width());
    let height = u32::from(decoder.height());
    check_pixel_budget(width, height)?;

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    // Frames smaller than the logical screen are composited at their offset
    let mut rgba = vec![0u8; width as usize * height as usize * 4];
    let (fl, ft) = (usize::from(frame.left), usize::from(frame.top));
    let (fw, fh) = (usize::from(frame.width), usize::from(frame.height));
    for y in 0..fh {
        let dy = ft + y;
        if dy >= height as usize {
            break;
        }
        for x in 0..fw {
            let dx = fl + x;
            if dx >= width as usize {
                break;
            }
            let src = (y * fw + x) * 4;
            let dst = (dy * width as usize + dx) * 4;
            if src + 4 <= frame.buffer.len() {
                rgba[dst..dst + 4].copy_from_slice(&frame.buffer[src..src + 4]);
            }
        }
    }

    if decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .is_some()
    {
        return Err(IoError::UnsupportedFormat(
            "animated GIF not supported".to_string(),
        ));
    }

    buffer_from_samples(
        width,
        height,
        &rgba,
        width as usize * 4,
        4,
        ImageFormat::Gif,
        ColorMode::Indexed,
    )
}
