//! Color naming
//!
//! Maps one representative color to a display name and a coarse
//! [`ColorCategory`]. Low-saturation colors are named by brightness alone;
//! everything else falls into one of nine hue buckets covering the whole
//! circle, then a saturation/value split picks the label inside the bucket.

use crate::colorspace::{Hsv, rgb_to_hsv};
use serde::{Deserialize, Serialize};
use std::fmt;
use vastra_core::color;

/// Saturation (percent) below which a color counts as achromatic
pub const DEFAULT_ACHROMATIC_SATURATION: f32 = 10.0;

/// Coarse color family used for lookups and listing filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    White,
    Gray,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    /// No single family; used by the fallback record
    Multi,
}

impl ColorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorCategory::White => "white",
            ColorCategory::Gray => "gray",
            ColorCategory::Black => "black",
            ColorCategory::Red => "red",
            ColorCategory::Orange => "orange",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Green => "green",
            ColorCategory::Cyan => "cyan",
            ColorCategory::Blue => "blue",
            ColorCategory::Purple => "purple",
            ColorCategory::Pink => "pink",
            ColorCategory::Multi => "multi",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One RGB triple with its HSV equivalent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub rgb: (u8, u8, u8),
    pub hsv: Hsv,
}

impl ColorSample {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            hsv: rgb_to_hsv(r, g, b),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        color::to_hex(self.rgb.0, self.rgb.1, self.rgb.2)
    }

    /// Classify with the default achromatic threshold.
    pub fn classify(&self) -> ColorClass {
        self.classify_with(DEFAULT_ACHROMATIC_SATURATION)
    }

    /// Classify with a caller-chosen saturation floor for hue naming.
    pub fn classify_with(&self, achromatic_saturation: f32) -> ColorClass {
        classify_hsv(&self.hsv, achromatic_saturation)
    }
}

/// Result of color naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClass {
    pub name: &'static str,
    pub category: ColorCategory,
}

/// A half-open hue range `[start, end)`; wraps through 0 when `start > end`.
struct HueBucket {
    start: f32,
    end: f32,
    category: ColorCategory,
    dark: &'static str,
    bright: &'static str,
    base: &'static str,
    light: &'static str,
}

impl HueBucket {
    fn contains(&self, h: f32) -> bool {
        if self.start <= self.end {
            h >= self.start && h < self.end
        } else {
            h >= self.start || h < self.end
        }
    }

    fn label(&self, s: f32, v: f32) -> &'static str {
        if v < 30.0 {
            self.dark
        } else if s > 80.0 && v > 60.0 {
            self.bright
        } else if s > 50.0 {
            self.base
        } else {
            self.light
        }
    }
}

static HUE_BUCKETS: [HueBucket; 9] = [
    HueBucket {
        start: 345.0,
        end: 15.0,
        category: ColorCategory::Red,
        dark: "Dark Red",
        bright: "Bright Red",
        base: "Red",
        light: "Light Red/Pink",
    },
    HueBucket {
        start: 15.0,
        end: 45.0,
        category: ColorCategory::Orange,
        dark: "Brown",
        bright: "Bright Orange",
        base: "Orange",
        light: "Peach",
    },
    HueBucket {
        start: 45.0,
        end: 70.0,
        category: ColorCategory::Yellow,
        dark: "Olive",
        bright: "Bright Yellow",
        base: "Yellow",
        light: "Cream",
    },
    HueBucket {
        start: 70.0,
        end: 165.0,
        category: ColorCategory::Green,
        dark: "Dark Green",
        bright: "Bright Green",
        base: "Green",
        light: "Light Green",
    },
    HueBucket {
        start: 165.0,
        end: 195.0,
        category: ColorCategory::Cyan,
        dark: "Teal",
        bright: "Bright Cyan",
        base: "Cyan",
        light: "Light Cyan",
    },
    HueBucket {
        start: 195.0,
        end: 255.0,
        category: ColorCategory::Blue,
        dark: "Navy Blue",
        bright: "Bright Blue",
        base: "Blue",
        light: "Light Blue",
    },
    HueBucket {
        start: 255.0,
        end: 290.0,
        category: ColorCategory::Purple,
        dark: "Dark Purple",
        bright: "Bright Purple",
        base: "Purple",
        light: "Lavender",
    },
    HueBucket {
        start: 290.0,
        end: 320.0,
        category: ColorCategory::Pink,
        dark: "Plum",
        bright: "Bright Magenta",
        base: "Magenta",
        light: "Orchid",
    },
    HueBucket {
        start: 320.0,
        end: 345.0,
        category: ColorCategory::Pink,
        dark: "Maroon",
        bright: "Hot Pink",
        base: "Pink",
        light: "Light Pink",
    },
];

/// Achromatic ladder, brightest first: (minimum value, exclusive)
static ACHROMATIC_LADDER: [(f32, &str, ColorCategory); 4] = [
    (90.0, "White", ColorCategory::White),
    (70.0, "Light Gray", ColorCategory::Gray),
    (40.0, "Gray", ColorCategory::Gray),
    (20.0, "Dark Gray", ColorCategory::Gray),
];

/// Name a color from its HSV components.
///
/// # Arguments
/// * `hsv` - Hue in degrees, saturation and value in percent
/// * `achromatic_saturation` - Saturation below which only value is used
pub fn classify_hsv(hsv: &Hsv, achromatic_saturation: f32) -> ColorClass {
    if hsv.s < achromatic_saturation {
        return ACHROMATIC_LADDER
            .iter()
            .find(|(min_v, _, _)| hsv.v > *min_v)
            .map(|&(_, name, category)| ColorClass { name, category })
            .unwrap_or(ColorClass {
                name: "Black",
                category: ColorCategory::Black,
            });
    }

    let h = hsv.h.rem_euclid(360.0);
    // The buckets tile [0, 360); index 0 (red) catches anything left over
    let bucket = HUE_BUCKETS
        .iter()
        .find(|b| b.contains(h))
        .unwrap_or(&HUE_BUCKETS[0]);
    ColorClass {
        name: bucket.label(hsv.s, hsv.v),
        category: bucket.category,
    }
}
