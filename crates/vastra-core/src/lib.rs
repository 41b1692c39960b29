//! Vastra Core - Basic data structures for fabric image analysis
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the analysis pipeline:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - Packed RGB image (immutable / mutable)
//! - [`GrayBuffer`] - 8-bit luminance grid derived from a `PixelBuffer`
//! - [`ImageFormat`] / [`ColorMode`] - Provenance of decoded image data
//!
//! Buffers are never mutated once frozen into a [`PixelBuffer`]; classifiers
//! receive them by shared reference.

pub mod buffer;
pub mod error;
pub mod gray;

pub use buffer::{ColorMode, ImageFormat, PixelBuffer, PixelBufferMut};
pub use error::{Error, Result};
pub use gray::GrayBuffer;

/// Color channel helpers for packed 32-bit RGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBFF` (red in MSB, the low byte is always
/// 255 since alpha is dropped during decoding).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT) | 0xff
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Format an RGB triple as a lowercase `#rrggbb` string.
    pub fn to_hex(r: u8, g: u8, b: u8) -> String {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

}
