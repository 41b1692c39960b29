//! Textile names and reuse suggestions
//!
//! A static knowledge base keyed by texture category. Busy patterns get
//! one extra idea appended before the list is cut to [`MAX_SUGGESTIONS`].

use crate::pattern::{PatternCategory, PatternKind};
use crate::texture::{TextureCategory, TextureKind};

/// Longest suggestion list ever returned
pub const MAX_SUGGESTIONS: usize = 5;

/// Idea appended for patchwork and geometric patterns
pub const PATTERN_EXTRA: &str = "Bohemian wall art";

static COTTON_IDEAS: [&str; 5] = [
    "Tote bags",
    "Patchwork quilts",
    "Kitchen towels",
    "Cushion covers",
    "Gift wrapping",
];

static SILK_IDEAS: [&str; 5] = [
    "Scarves",
    "Decorative cushions",
    "Wall art",
    "Jewelry pouches",
    "Luxury gift wrapping",
];

static DENIM_IDEAS: [&str; 5] = [
    "Upcycled jackets",
    "Denim bags",
    "Aprons",
    "Wall organizers",
    "Pet accessories",
];

static POLYESTER_IDEAS: [&str; 5] = [
    "Outdoor cushions",
    "Reusable shopping bags",
    "Sports bags",
    "Zipper pouches",
    "Pet beds",
];

static CANVAS_IDEAS: [&str; 5] = [
    "Heavy-duty bags",
    "Art canvas",
    "Outdoor covers",
    "Tool organizers",
    "Work aprons",
];

static LINEN_IDEAS: [&str; 5] = [
    "Table runners",
    "Napkins",
    "Summer clothing",
    "Curtains",
    "Bread bags",
];

/// Base reuse ideas for a texture category.
pub fn suggestion_base(texture: TextureCategory) -> &'static [&'static str] {
    match texture {
        TextureCategory::Cotton => &COTTON_IDEAS,
        TextureCategory::Silk => &SILK_IDEAS,
        TextureCategory::Denim => &DENIM_IDEAS,
        TextureCategory::Polyester => &POLYESTER_IDEAS,
        TextureCategory::Canvas => &CANVAS_IDEAS,
        TextureCategory::Linen => &LINEN_IDEAS,
    }
}

/// Reuse ideas for a texture and pattern, at most [`MAX_SUGGESTIONS`] long.
///
/// The pattern extra is appended first and the list truncated after, so
/// it only survives when the base list has room for it.
pub fn suggestions(texture: TextureCategory, pattern: PatternCategory) -> Vec<&'static str> {
    let mut ideas = suggestion_base(texture).to_vec();
    if matches!(pattern, PatternCategory::Patchwork | PatternCategory::Geometric) {
        ideas.push(PATTERN_EXTRA);
    }
    ideas.truncate(MAX_SUGGESTIONS);
    ideas
}

/// Names that read better than the generic `"{color} {texture}"`
static NAME_OVERRIDES: [(TextureKind, PatternKind, &str); 9] = [
    (TextureKind::Cotton, PatternKind::SolidPlain, "Plain Cotton Fabric"),
    (TextureKind::SmoothCotton, PatternKind::SolidPlain, "Plain Cotton Fabric"),
    (TextureKind::SmoothSilk, PatternKind::SolidPlain, "Pure Silk Fabric"),
    (TextureKind::Satin, PatternKind::SolidPlain, "Satin Fabric"),
    (TextureKind::Denim, PatternKind::SolidPlain, "Classic Denim"),
    (TextureKind::Denim, PatternKind::Patchwork, "Patchwork Denim"),
    (TextureKind::Denim, PatternKind::ComplexPatchwork, "Patchwork Denim"),
    (TextureKind::Linen, PatternKind::SolidPlain, "Natural Linen"),
    (TextureKind::Canvas, PatternKind::SolidPlain, "Duck Canvas"),
];

/// Compose the textile name for a classified swatch.
pub fn textile_name(color_name: &str, texture: TextureKind, pattern: PatternKind) -> String {
    NAME_OVERRIDES
        .iter()
        .find(|(t, p, _)| *t == texture && *p == pattern)
        .map_or_else(
            || format!("{} {}", color_name, texture.name()),
            |(_, _, name)| (*name).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_plain() {
        let s = suggestions(TextureCategory::Linen, PatternCategory::Solid);
        assert_eq!(s, LINEN_IDEAS.to_vec());
    }

    #[test]
    fn test_pattern_extra_is_truncated_away() {
        for texture in [
            TextureCategory::Silk,
            TextureCategory::Cotton,
            TextureCategory::Denim,
            TextureCategory::Canvas,
            TextureCategory::Polyester,
            TextureCategory::Linen,
        ] {
            for pattern in [PatternCategory::Patchwork, PatternCategory::Geometric] {
                let s = suggestions(texture, pattern);
                assert_eq!(s.len(), MAX_SUGGESTIONS);
                assert!(!s.contains(&PATTERN_EXTRA));
                assert!(s.iter().all(|idea| suggestion_base(texture).contains(idea)));
            }
        }
    }

    #[test]
    fn test_textile_name_default() {
        assert_eq!(
            textile_name("Navy Blue", TextureKind::CottonTwill, PatternKind::StripedLinear),
            "Navy Blue Cotton Twill"
        );
    }

    #[test]
    fn test_textile_name_override() {
        assert_eq!(
            textile_name("Blue", TextureKind::SmoothSilk, PatternKind::SolidPlain),
            "Pure Silk Fabric"
        );
        assert_eq!(
            textile_name("Red", TextureKind::Denim, PatternKind::ComplexPatchwork),
            "Patchwork Denim"
        );
    }
}
