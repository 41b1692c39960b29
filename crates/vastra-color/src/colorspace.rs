//! Color space conversion
//!
//! - RGB <-> HSV (hue in degrees, saturation and value in percent)
//! - RGB -> luminance, perceptual or unweighted

use crate::ColorResult;
use serde::{Deserialize, Serialize};
use vastra_core::{GrayBuffer, PixelBuffer, color};

/// HSV color representation
///
/// - `h`: Hue in degrees, range [0.0, 360.0)
/// - `s`: Saturation in percent, range [0.0, 100.0]
/// - `v`: Value in percent, range [0.0, 100.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB to HSV.
///
/// Achromatic colors (r == g == b) get hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = f32::from(r);
    let gf = f32::from(g);
    let bf = f32::from(b);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max / 255.0 * 100.0;
    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsv { h, s, v }
}

/// Convert HSV back to RGB, rounding each channel.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let s = (hsv.s / 100.0).clamp(0.0, 1.0);
    let v = (hsv.v / 100.0).clamp(0.0, 1.0);
    let h = hsv.h.rem_euclid(360.0) / 60.0;

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

/// Perceptual luminance with BT.601 weights, rounded to nearest.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b) + 500) / 1000) as u8
}

/// Unweighted channel average, truncated.
#[inline]
pub fn rgb_to_gray_average(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u8
}

/// Luminance formula applied when building a [`GrayBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrayConversion {
    /// BT.601 weighted sum
    #[default]
    Perceptual,
    /// Plain mean of the three channels
    Average,
}

impl GrayConversion {
    /// Apply this conversion to one pixel.
    #[inline]
    pub fn luminance(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayConversion::Perceptual => rgb_to_gray(r, g, b),
            GrayConversion::Average => rgb_to_gray_average(r, g, b),
        }
    }
}

/// Convert a whole RGB buffer to luminance.
pub fn convert_to_gray(buf: &PixelBuffer, method: GrayConversion) -> ColorResult<GrayBuffer> {
    let data = buf
        .data()
        .iter()
        .map(|&p| {
            let (r, g, b) = color::extract_rgb(p);
            method.luminance(r, g, b)
        })
        .collect();
    Ok(GrayBuffer::from_raw(buf.width(), buf.height(), data)?)
}
