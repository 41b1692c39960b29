//! Image format detection
//!
//! Detects image formats by examining magic numbers in the header.
//! Only the leading bytes are inspected; file extensions are ignored.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use vastra_core::ImageFormat;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    pub const GIF87A: &[u8] = b"GIF87a";
    pub const GIF89A: &[u8] = b"GIF89a";

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";

    pub const BMP: &[u8] = b"BM";

    /// TIFF little-endian: II 2A 00, big-endian: MM 00 2A
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// JP2 signature box and raw J2K codestream
    pub const JP2_SIGNATURE: &[u8] = &[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20];
    pub const J2K_SIGNATURE: &[u8] = &[0xFF, 0x4F, 0xFF, 0x51];
}

/// Detect image format from a file path.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from the leading bytes of an encoded image.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if fewer than 2 bytes are given and
/// [`IoError::UnsupportedFormat`] if no known signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }
    if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        return Ok(ImageFormat::WebP);
    }
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }
    if data.starts_with(magic::JP2_SIGNATURE) || data.starts_with(magic::J2K_SIGNATURE) {
        return Ok(ImageFormat::Jp2);
    }
    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }
    // P1..P6
    if data[0] == b'P' && (b'1'..=b'6').contains(&data[1]) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_gif_and_webp() {
        assert_eq!(
            detect_format_from_bytes(b"GIF89a\x01\x00").unwrap(),
            ImageFormat::Gif
        );
        assert_eq!(
            detect_format_from_bytes(b"RIFF\x00\x00\x00\x00WEBPVP8 ").unwrap(),
            ImageFormat::WebP
        );
    }

    #[test]
    fn test_detect_rejected_families() {
        assert_eq!(
            detect_format_from_bytes(b"BM\x00\x00").unwrap(),
            ImageFormat::Bmp
        );
        assert_eq!(
            detect_format_from_bytes(&[0x49, 0x49, 0x2A, 0x00]).unwrap(),
            ImageFormat::Tiff
        );
        assert_eq!(detect_format_from_bytes(b"P6\n").unwrap(), ImageFormat::Pnm);
        assert_eq!(
            detect_format_from_bytes(&[0xFF, 0x4F, 0xFF, 0x51]).unwrap(),
            ImageFormat::Jp2
        );
    }

    #[test]
    fn test_detect_garbage() {
        assert!(matches!(
            detect_format_from_bytes(b"hello world"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(&[0x89]),
            Err(IoError::InvalidData(_))
        ));
        assert!(detect_format_from_bytes(&[]).is_err());
    }
}
