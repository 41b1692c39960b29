//! WebP image format support
//!
//! Reads still WebP images (lossy and lossless) and writes lossless
//! RGB WebP. Animated WebP images are rejected.

use crate::{IoError, IoResult, buffer_from_samples, check_pixel_budget};
use image_webp::{ColorType, WebPDecoder, WebPEncoder};
use std::io::{BufRead, Seek, Write};
use vastra_core::{ColorMode, ImageFormat, PixelBuffer};

/// Read a WebP image.
pub fn read_webp<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = WebPDecoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("WebP decode error: {}", e)))?;

    if decoder.is_animated() {
        return Err(IoError::UnsupportedFormat(
            "animated WebP not supported".to_string(),
        ));
    }

    let (width, height) = decoder.dimensions();
    check_pixel_budget(width, height)?;
    let has_alpha = decoder.has_alpha();

    let buffer_size = decoder.output_buffer_size().ok_or_else(|| {
        IoError::DecodeError("failed to determine output buffer size".to_string())
    })?;
    let mut buffer = vec![0u8; buffer_size];
    decoder
        .read_image(&mut buffer)
        .map_err(|e| IoError::DecodeError(format!("WebP read error: {}", e)))?;

    let (channels, mode) = if has_alpha {
        (4, ColorMode::Rgba)
    } else {
        (3, ColorMode::Rgb)
    };
    buffer_from_samples(
        width,
        height,
        &buffer,
        width as usize * channels,
        channels,
        ImageFormat::WebP,
        mode,
    )
}

/// Write a lossless RGB WebP image.
pub fn write_webp<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let encoder = WebPEncoder::new(writer);
    encoder
        .encode(&buf.to_rgb_bytes(), buf.width(), buf.height(), ColorType::Rgb8)
        .map_err(|e| IoError::EncodeError(format!("WebP encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vastra_core::PixelBufferMut;

    #[test]
    fn test_webp_lossless_roundtrip() {
        let mut pm = PixelBufferMut::new(5, 4).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                pm.set_rgb(x, y, (x * 50) as u8, (y * 60) as u8, 77);
            }
        }
        let buf: PixelBuffer = pm.into();

        let mut bytes = Vec::new();
        write_webp(&buf, &mut bytes).unwrap();
        let back = read_webp(Cursor::new(bytes)).unwrap();
        assert_eq!(back.data(), buf.data());
        assert_eq!(back.source_format(), ImageFormat::WebP);
    }
}
