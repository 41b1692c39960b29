//! vastra-color - Color analysis for fabric images
//!
//! This crate provides:
//!
//! - Color space conversion (RGB to HSV, RGB to luminance)
//! - Grayscale conversion of whole buffers
//! - Dominant color ranking by exact-pixel frequency
//! - Color naming by hue bucket, saturation and value

pub mod analysis;
pub mod classify;
pub mod colorspace;
mod error;

pub use analysis::{ColorCount, dominant_color, dominant_colors};
pub use classify::{
    ColorCategory, ColorClass, ColorSample, DEFAULT_ACHROMATIC_SATURATION, classify_hsv,
};
pub use colorspace::{
    GrayConversion, Hsv, convert_to_gray, hsv_to_rgb, rgb_to_gray, rgb_to_gray_average, rgb_to_hsv,
};
pub use error::{ColorError, ColorResult};
