//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes baseline
//! RGB JPEGs using `jpeg-encoder`.
//!
//! Grayscale, 16-bit grayscale and CMYK sources are normalized to RGB.

use crate::{IoError, IoResult, buffer_from_samples, check_pixel_budget};
use jpeg_decoder::PixelFormat;
use std::io::Read;
use vastra_core::{ColorMode, ImageFormat, PixelBuffer, PixelBufferMut, color};

/// Default encoder quality
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("JPEG header error: {}", e)))?;
    let header = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;
    check_pixel_budget(u32::from(header.width), u32::from(header.height))?;

    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    match info.pixel_format {
        PixelFormat::L8 => buffer_from_samples(
            width,
            height,
            &data,
            width as usize,
            1,
            ImageFormat::Jpeg,
            ColorMode::Gray,
        ),
        PixelFormat::RGB24 => buffer_from_samples(
            width,
            height,
            &data,
            width as usize * 3,
            3,
            ImageFormat::Jpeg,
            ColorMode::Rgb,
        ),
        PixelFormat::L16 => {
            // Big-endian samples; keep the high byte
            let high: Vec<u8> = data.chunks_exact(2).map(|s| s[0]).collect();
            buffer_from_samples(
                width,
                height,
                &high,
                width as usize,
                1,
                ImageFormat::Jpeg,
                ColorMode::Gray,
            )
        }
        PixelFormat::CMYK32 => read_cmyk(width, height, &data),
    }
}

fn read_cmyk(width: u32, height: u32, data: &[u8]) -> IoResult<PixelBuffer> {
    let expected = width as usize * height as usize * 4;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "CMYK data too short: {} < {}",
            data.len(),
            expected
        )));
    }
    let mut pm = PixelBufferMut::new(width, height)?;
    for (dst, px) in pm.data_mut().iter_mut().zip(data.chunks_exact(4)) {
        let k = 255 - u32::from(px[3]);
        let r = ((255 - u32::from(px[0])) * k / 255) as u8;
        let g = ((255 - u32::from(px[1])) * k / 255) as u8;
        let b = ((255 - u32::from(px[2])) * k / 255) as u8;
        *dst = color::compose_rgb(r, g, b);
    }
    pm.set_source_format(ImageFormat::Jpeg);
    pm.set_source_mode(ColorMode::Cmyk);
    Ok(pm.into())
}

/// Write an RGB JPEG image into a byte vector.
///
/// # Arguments
/// * `quality` - Encoder quality in `1..=100`
pub fn write_jpeg(buf: &PixelBuffer, out: &mut Vec<u8>, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality out of range: {}",
            quality
        )));
    }
    let (width, height) = buf.dimensions();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(IoError::EncodeError(format!(
            "image too large for JPEG: {}x{}",
            width, height
        )));
    }
    let encoder = jpeg_encoder::Encoder::new(out, quality);
    encoder
        .encode(
            &buf.to_rgb_bytes(),
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
