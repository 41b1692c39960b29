//! Texture classification
//!
//! The ladder orders extreme signatures (very smooth, very busy) before
//! the generic fallbacks. Thresholds:
//!
//! | Condition | Texture | Category |
//! |---|---|---|
//! | variance<300 ∧ edge<0.03 | Smooth Silk | silk |
//! | variance<600 ∧ edge<0.06 ∧ std<20 | Satin | silk |
//! | variance<1000 ∧ edge<0.10 | Smooth Cotton | cotton |
//! | variance<1500 ∧ edge<0.15 | Cotton Poplin (mean>140) / Cotton Twill | cotton |
//! | variance<2000 ∧ edge<0.18 | Cotton | cotton |
//! | variance<2500 ∧ edge<0.22 | Cotton Canvas (std>35) / Textured Cotton | cotton |
//! | edge>0.25 ∧ variance>2000 | Denim (std>50) / Heavy Cotton | denim / cotton |
//! | variance>3000 ∧ edge>0.20 | Canvas | canvas |
//! | variance>2500 ∧ mean>120 | Polyester | polyester |
//! | variance<800 ∧ std<25 | Linen | linen |
//! | edge>0.15 | Cotton Blend | cotton |
//! | otherwise | Synthetic Blend | polyester |

use serde::{Deserialize, Serialize};
use std::fmt;
use vastra_filter::TextureDescriptors;

/// Fabric family used as the suggestion lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureCategory {
    Silk,
    Cotton,
    Denim,
    Canvas,
    Polyester,
    Linen,
}

impl TextureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TextureCategory::Silk => "silk",
            TextureCategory::Cotton => "cotton",
            TextureCategory::Denim => "denim",
            TextureCategory::Canvas => "canvas",
            TextureCategory::Polyester => "polyester",
            TextureCategory::Linen => "linen",
        }
    }
}

impl fmt::Display for TextureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    SmoothSilk,
    Satin,
    SmoothCotton,
    CottonPoplin,
    CottonTwill,
    Cotton,
    CottonCanvas,
    TexturedCotton,
    Denim,
    HeavyCotton,
    Canvas,
    Polyester,
    Linen,
    CottonBlend,
    SyntheticBlend,
}

impl TextureKind {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            TextureKind::SmoothSilk => "Smooth Silk",
            TextureKind::Satin => "Satin",
            TextureKind::SmoothCotton => "Smooth Cotton",
            TextureKind::CottonPoplin => "Cotton Poplin",
            TextureKind::CottonTwill => "Cotton Twill",
            TextureKind::Cotton => "Cotton",
            TextureKind::CottonCanvas => "Cotton Canvas",
            TextureKind::TexturedCotton => "Textured Cotton",
            TextureKind::Denim => "Denim",
            TextureKind::HeavyCotton => "Heavy Cotton",
            TextureKind::Canvas => "Canvas",
            TextureKind::Polyester => "Polyester",
            TextureKind::Linen => "Linen",
            TextureKind::CottonBlend => "Cotton Blend",
            TextureKind::SyntheticBlend => "Synthetic Blend",
        }
    }

    pub fn category(self) -> TextureCategory {
        match self {
            TextureKind::SmoothSilk | TextureKind::Satin => TextureCategory::Silk,
            TextureKind::Denim => TextureCategory::Denim,
            TextureKind::Canvas => TextureCategory::Canvas,
            TextureKind::Polyester | TextureKind::SyntheticBlend => TextureCategory::Polyester,
            TextureKind::Linen => TextureCategory::Linen,
            TextureKind::SmoothCotton
            | TextureKind::CottonPoplin
            | TextureKind::CottonTwill
            | TextureKind::Cotton
            | TextureKind::CottonCanvas
            | TextureKind::TexturedCotton
            | TextureKind::HeavyCotton
            | TextureKind::CottonBlend => TextureCategory::Cotton,
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ladder row: a guard and the texture it yields
struct TextureRule {
    when: fn(&TextureDescriptors) -> bool,
    then: fn(&TextureDescriptors) -> TextureKind,
}

static TEXTURE_LADDER: [TextureRule; 12] = [
    TextureRule {
        when: |d| d.variance < 300.0 && d.edge_density < 0.03,
        then: |_| TextureKind::SmoothSilk,
    },
    TextureRule {
        when: |d| d.variance < 600.0 && d.edge_density < 0.06 && d.std_dev < 20.0,
        then: |_| TextureKind::Satin,
    },
    TextureRule {
        when: |d| d.variance < 1000.0 && d.edge_density < 0.10,
        then: |_| TextureKind::SmoothCotton,
    },
    TextureRule {
        when: |d| d.variance < 1500.0 && d.edge_density < 0.15,
        then: |d| {
            if d.mean > 140.0 {
                TextureKind::CottonPoplin
            } else {
                TextureKind::CottonTwill
            }
        },
    },
    TextureRule {
        when: |d| d.variance < 2000.0 && d.edge_density < 0.18,
        then: |_| TextureKind::Cotton,
    },
    TextureRule {
        when: |d| d.variance < 2500.0 && d.edge_density < 0.22,
        then: |d| {
            if d.std_dev > 35.0 {
                TextureKind::CottonCanvas
            } else {
                TextureKind::TexturedCotton
            }
        },
    },
    TextureRule {
        when: |d| d.edge_density > 0.25 && d.variance > 2000.0,
        then: |d| {
            if d.std_dev > 50.0 {
                TextureKind::Denim
            } else {
                TextureKind::HeavyCotton
            }
        },
    },
    TextureRule {
        when: |d| d.variance > 3000.0 && d.edge_density > 0.20,
        then: |_| TextureKind::Canvas,
    },
    TextureRule {
        when: |d| d.variance > 2500.0 && d.mean > 120.0,
        then: |_| TextureKind::Polyester,
    },
    TextureRule {
        when: |d| d.variance < 800.0 && d.std_dev < 25.0,
        then: |_| TextureKind::Linen,
    },
    TextureRule {
        when: |d| d.edge_density > 0.15,
        then: |_| TextureKind::CottonBlend,
    },
    TextureRule {
        when: |_| true,
        then: |_| TextureKind::SyntheticBlend,
    },
];

/// Classify texture from descriptors. The first matching rule wins.
pub fn classify_texture(d: &TextureDescriptors) -> TextureKind {
    TEXTURE_LADDER
        .iter()
        .find(|rule| (rule.when)(d))
        .map_or(TextureKind::SyntheticBlend, |rule| (rule.then)(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(mean: f64, variance: f64, edge: f64) -> TextureDescriptors {
        TextureDescriptors {
            mean,
            variance,
            std_dev: variance.sqrt(),
            edge_density: edge,
        }
    }

    #[test]
    fn test_smooth_end_of_ladder() {
        assert_eq!(classify_texture(&desc(100.0, 0.0, 0.0)), TextureKind::SmoothSilk);
        assert_eq!(classify_texture(&desc(100.0, 350.0, 0.04)), TextureKind::Satin);
        assert_eq!(classify_texture(&desc(100.0, 900.0, 0.05)), TextureKind::SmoothCotton);
    }

    #[test]
    fn test_mean_and_std_splits() {
        assert_eq!(classify_texture(&desc(150.0, 1200.0, 0.12)), TextureKind::CottonPoplin);
        assert_eq!(classify_texture(&desc(100.0, 1200.0, 0.12)), TextureKind::CottonTwill);
        // std 47 > 35
        assert_eq!(classify_texture(&desc(100.0, 2200.0, 0.20)), TextureKind::CottonCanvas);
        let mut d = desc(100.0, 2200.0, 0.20);
        d.std_dev = 30.0;
        assert_eq!(classify_texture(&d), TextureKind::TexturedCotton);
    }

    #[test]
    fn test_denim_needs_edges_and_spread() {
        // std 70.7 > 50
        assert_eq!(classify_texture(&desc(100.0, 5000.0, 0.40)), TextureKind::Denim);
        let mut d = desc(100.0, 2400.0, 0.30);
        d.std_dev = 45.0;
        // variance < 2500 and edge 0.30 skips the cotton bands
        assert_eq!(classify_texture(&d), TextureKind::HeavyCotton);
        assert_eq!(TextureKind::Denim.category(), TextureCategory::Denim);
    }

    #[test]
    fn test_later_rows() {
        assert_eq!(classify_texture(&desc(100.0, 3500.0, 0.22)), TextureKind::Canvas);
        assert_eq!(classify_texture(&desc(130.0, 2600.0, 0.10)), TextureKind::Polyester);
        assert_eq!(classify_texture(&desc(100.0, 2600.0, 0.10)), TextureKind::SyntheticBlend);
        let mut d = desc(100.0, 700.0, 0.30);
        d.std_dev = 20.0;
        assert_eq!(classify_texture(&d), TextureKind::Linen);
        assert_eq!(classify_texture(&desc(100.0, 2600.0, 0.23)), TextureKind::CottonBlend);
    }

    #[test]
    fn test_categories() {
        assert_eq!(TextureKind::Satin.category(), TextureCategory::Silk);
        assert_eq!(TextureKind::HeavyCotton.category(), TextureCategory::Cotton);
        assert_eq!(TextureKind::SyntheticBlend.category(), TextureCategory::Polyester);
        assert_eq!(TextureCategory::Linen.to_string(), "linen");
    }
}
