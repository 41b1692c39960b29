//! PixelBuffer - The decoded RGB image container
//!
//! A `PixelBuffer` is a rectangular grid of RGB triples produced by the
//! decoder and the downsampler. Every source color mode (grayscale,
//! alpha, palette, CMYK) is normalized to three channels before a buffer
//! is created, so consumers never need to branch on depth.
//!
//! # Pixel layout
//!
//! - One packed `u32` per pixel, row-major, no padding
//! - Color order is RGB with red in the MSB (see [`crate::color`])
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared, read-only).
//! Buffers are built through [`PixelBufferMut`] and frozen with `Into<PixelBuffer>`.

mod access;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Encoded image format of the bytes a buffer was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown or synthesized in memory
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// GIF format
    Gif,
    /// WebP format
    WebP,
    /// BMP format (detected, not decoded)
    Bmp,
    /// TIFF format (detected, not decoded)
    Tiff,
    /// PNM format (detected, not decoded)
    Pnm,
    /// JPEG 2000 (detected, not decoded)
    Jp2,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::WebP => "webp",
            Self::Bmp => "bmp",
            Self::Tiff => "tif",
            Self::Pnm => "pnm",
            Self::Jp2 => "jp2",
        }
    }
}

/// Color mode of the source data before normalization to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Single luminance channel
    Gray,
    /// Luminance plus alpha (alpha dropped)
    GrayAlpha,
    /// Three color channels
    #[default]
    Rgb,
    /// Three color channels plus alpha (alpha dropped)
    Rgba,
    /// Palette-indexed color
    Indexed,
    /// Four-channel CMYK (converted to RGB)
    Cmyk,
}

impl ColorMode {
    /// Check whether the source carried an alpha channel.
    pub fn had_alpha(self) -> bool {
        matches!(self, ColorMode::GrayAlpha | ColorMode::Rgba)
    }
}

/// Internal buffer data
#[derive(Debug, Clone)]
struct BufferData {
    width: u32,
    height: u32,
    format: ImageFormat,
    mode: ColorMode,
    data: Vec<u32>,
}

impl BufferData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            format: ImageFormat::Unknown,
            mode: ColorMode::Rgb,
            data: vec![color::compose_rgb(0, 0, 0); size],
        })
    }
}

/// Immutable RGB image
///
/// # Examples
///
/// ```
/// use vastra_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(64, 48).unwrap();
/// assert_eq!(buf.width(), 64);
/// assert_eq!(buf.pixel_count(), 64 * 48);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new all-black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelBufferMut::new(width, height)?.into())
    }

    /// Create a buffer from interleaved 8-bit RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLengthMismatch`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let mut inner = BufferData::new(width, height)?;
        let expected = inner.data.len() * 3;
        if rgb.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        for (dst, src) in inner.data.iter_mut().zip(rgb.chunks_exact(3)) {
            *dst = color::compose_rgb(src[0], src[1], src[2]);
        }
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.inner.width) * u64::from(self.inner.height)
    }

    /// Format of the bytes this buffer was decoded from.
    #[inline]
    pub fn source_format(&self) -> ImageFormat {
        self.inner.format
    }

    /// Color mode of the source before normalization.
    #[inline]
    pub fn source_mode(&self) -> ColorMode {
        self.inner.mode
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Serialize to interleaved 8-bit RGB samples.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 3);
        for &p in &self.inner.data {
            let (r, g, b) = color::extract_rgb(p);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}

/// Mutable RGB image, used while decoding or scaling
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new all-black mutable buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: BufferData::new(width, height)?,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Record the encoded format the data came from.
    pub fn set_source_format(&mut self, format: ImageFormat) {
        self.inner.format = format;
    }

    /// Record the color mode the data was normalized from.
    pub fn set_source_mode(&mut self, mode: ColorMode) {
        self.inner.mode = mode;
    }

    /// Get mutable access to the packed pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
