//! PNG image format support
//!
//! All PNG color types are accepted. Palette, low-bit grayscale and
//! 16-bit samples are expanded to 8 bits by the decoder, then alpha is
//! dropped and grayscale is replicated across the three channels.

use crate::{IoError, IoResult, buffer_from_samples, check_pixel_budget};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use vastra_core::{ColorMode, ImageFormat, PixelBuffer};

/// Read a PNG image.
///
/// # Returns
/// An RGB `PixelBuffer` whose source mode records the PNG color type.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    check_pixel_budget(width, height)?;
    let source_mode = match info.color_type {
        ColorType::Grayscale => ColorMode::Gray,
        ColorType::GrayscaleAlpha => ColorMode::GrayAlpha,
        ColorType::Rgb => ColorMode::Rgb,
        ColorType::Rgba => ColorMode::Rgba,
        ColorType::Indexed => ColorMode::Indexed,
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let (out_color, out_depth) = reader.output_color_type();
    if out_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            out_depth
        )));
    }
    let channels = match out_color {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    buffer_from_samples(
        width,
        height,
        &buf[..output_info.buffer_size()],
        output_info.line_size,
        channels,
        ImageFormat::Png,
        source_mode,
    )
}

/// Write an RGB PNG image.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&buf.to_rgb_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
