//! Synthetic fabric fixtures
//!
//! Deterministic images standing in for photographed swatches: flat
//! dyed cloth, woven checks, printed stripes.

use crate::error::{TestError, TestResult};
use vastra_core::{GrayBuffer, ImageFormat, PixelBuffer, PixelBufferMut};

/// A single-color swatch.
pub fn make_uniform_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<PixelBuffer> {
    let mut pm = PixelBufferMut::new(width, height)?;
    pm.fill_rgb(rgb.0, rgb.1, rgb.2);
    Ok(pm.into())
}

/// A checkerboard of square cells alternating between `a` and `b`.
pub fn make_checkerboard_rgb(
    width: u32,
    height: u32,
    cell: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> TestResult<PixelBuffer> {
    let cell = cell.max(1);
    let mut pm = PixelBufferMut::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let (r, g, bl) = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
            pm.set_rgb(x, y, r, g, bl);
        }
    }
    Ok(pm.into())
}

/// Vertical stripes `stripe` pixels wide alternating between `a` and `b`.
pub fn make_stripes_rgb(
    width: u32,
    height: u32,
    stripe: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> TestResult<PixelBuffer> {
    let stripe = stripe.max(1);
    let mut pm = PixelBufferMut::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let (r, g, bl) = if (x / stripe) % 2 == 0 { a } else { b };
            pm.set_rgb(x, y, r, g, bl);
        }
    }
    Ok(pm.into())
}

/// A luminance checkerboard alternating between `lo` and `hi`.
pub fn make_gray_checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    lo: u8,
    hi: u8,
) -> TestResult<GrayBuffer> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(if ((x / cell) + (y / cell)) % 2 == 0 { lo } else { hi });
        }
    }
    Ok(GrayBuffer::from_raw(width, height, data)?)
}

/// A flat luminance image.
pub fn make_uniform_gray(width: u32, height: u32, value: u8) -> TestResult<GrayBuffer> {
    Ok(GrayBuffer::new_filled(width, height, value)?)
}

/// A GIF89a holding one white pixel at the origin of a logical screen of
/// any declared size, including sizes no encoder would write.
///
/// Nothing covers the rest of the screen.
pub fn encode_pixel_gif(screen_width: u16, screen_height: u16) -> Vec<u8> {
    let mut out = b"GIF89a".to_vec();
    out.extend_from_slice(&screen_width.to_le_bytes());
    out.extend_from_slice(&screen_height.to_le_bytes());
    // Two-entry global color table (white, black), background 0, square pixels
    out.extend_from_slice(&[0x80, 0, 0]);
    out.extend_from_slice(&[0xff, 0xff, 0xff, 0x00, 0x00, 0x00]);
    // 1x1 image descriptor at (0, 0)
    out.extend_from_slice(&[0x2c, 0, 0, 0, 0, 1, 0, 1, 0, 0]);
    // LZW minimum code size 2: clear, index 0, end of information
    out.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00]);
    out.push(0x3b);
    out
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buf: &PixelBuffer) -> TestResult<Vec<u8>> {
    vastra_io::write_image_mem(buf, ImageFormat::Png).map_err(|e| TestError::Encode {
        message: e.to_string(),
    })
}

/// Encode a buffer as JPEG bytes at the given quality.
pub fn encode_jpeg(buf: &PixelBuffer, quality: u8) -> TestResult<Vec<u8>> {
    let mut out = Vec::new();
    vastra_io::jpeg::write_jpeg(buf, &mut out, quality).map_err(|e| TestError::Encode {
        message: e.to_string(),
    })?;
    Ok(out)
}
