//! Vastra I/O - Image decoding and encoding
//!
//! Turns encoded image bytes into an RGB [`PixelBuffer`]:
//!
//! - Format detection by magic bytes ([`detect_format_from_bytes`])
//! - PNG, JPEG, GIF and WebP decoding, each behind a cargo feature
//! - PNG, JPEG and WebP encoding
//!
//! BMP, TIFF, PNM and JPEG 2000 are recognized but rejected with
//! [`IoError::UnsupportedFormat`].
//!
//! Every decoder normalizes its output to three 8-bit channels and records
//! the original [`ColorMode`] on the buffer. Declared dimensions are checked
//! against [`MAX_DECODE_PIXELS`] before any pixel storage is allocated.

mod error;
mod format;

#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "webp-format")]
pub mod webp;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use vastra_core::{ColorMode, ImageFormat};

use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use vastra_core::{PixelBuffer, PixelBufferMut, color};

/// Largest image, in pixels, any decoder will allocate for
pub const MAX_DECODE_PIXELS: u64 = 64 * 1024 * 1024;

/// Reject declared dimensions above [`MAX_DECODE_PIXELS`].
pub(crate) fn check_pixel_budget(width: u32, height: u32) -> IoResult<()> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_DECODE_PIXELS {
        return Err(IoError::InvalidData(format!(
            "declared size {}x{} exceeds {} pixels",
            width, height, MAX_DECODE_PIXELS
        )));
    }
    Ok(())
}

/// Decode an image from memory.
///
/// # Errors
///
/// - [`IoError::InvalidData`] / [`IoError::UnsupportedFormat`] when the
///   bytes are empty, unrecognized, or a rejected format family
/// - [`IoError::DecodeError`] when the codec fails on truncated data
/// - [`IoError::Core`] when the decoded image has a zero dimension
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    let buf = read_image_format(data, format)?;
    debug!(
        "decoded {:?} image {}x{} from {:?} source",
        format,
        buf.width(),
        buf.height(),
        buf.source_mode()
    );
    Ok(buf)
}

/// Decode an image file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = fs::read(path)?;
    read_image_mem(&data)
}

fn read_image_format(data: &[u8], format: ImageFormat) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::read_gif(Cursor::new(data)),
        #[cfg(feature = "webp-format")]
        ImageFormat::WebP => webp::read_webp(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} decoding not supported",
            other
        ))),
    }
}

/// Encode an image to memory in the given format.
pub fn write_image_mem(buf: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(buf, &mut out)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(buf, &mut out, jpeg::DEFAULT_JPEG_QUALITY)?,
        #[cfg(feature = "webp-format")]
        ImageFormat::WebP => webp::write_webp(buf, &mut out)?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} encoding not supported",
                other
            )));
        }
    }
    Ok(out)
}

/// Encode an image and write it to a file.
pub fn write_image<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let data = write_image_mem(buf, format)?;
    fs::write(path, data)?;
    Ok(())
}

/// Build an RGB buffer from interleaved 8-bit samples.
///
/// `channels` is 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA); alpha is
/// discarded and gray is replicated.
pub(crate) fn buffer_from_samples(
    width: u32,
    height: u32,
    data: &[u8],
    line_size: usize,
    channels: usize,
    format: ImageFormat,
    mode: ColorMode,
) -> IoResult<PixelBuffer> {
    let mut pm = PixelBufferMut::new(width, height)?;
    let row_bytes = width as usize * channels;
    if line_size < row_bytes || data.len() < line_size * (height as usize - 1) + row_bytes {
        return Err(IoError::InvalidData(format!(
            "sample data too short for {}x{} with {} channels",
            width, height, channels
        )));
    }

    let w = width as usize;
    let pixels = pm.data_mut();
    for y in 0..height as usize {
        let row = &data[y * line_size..y * line_size + row_bytes];
        let dst = &mut pixels[y * w..(y + 1) * w];
        for (d, s) in dst.iter_mut().zip(row.chunks_exact(channels)) {
            *d = match channels {
                1 | 2 => color::compose_rgb(s[0], s[0], s[0]),
                _ => color::compose_rgb(s[0], s[1], s[2]),
            };
        }
    }

    pm.set_source_format(format);
    pm.set_source_mode(mode);
    Ok(pm.into())
}
