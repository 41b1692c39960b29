//! Pattern classification
//!
//! Reuses the texture descriptors; no further pixel scan. Each rule owns a
//! band of edge density, and its rank orders the bands from plain to busy
//! so callers can compare how patterned two swatches are.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Solid,
    Striped,
    Geometric,
    Patchwork,
    Textured,
}

impl PatternCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternCategory::Solid => "solid",
            PatternCategory::Striped => "striped",
            PatternCategory::Geometric => "geometric",
            PatternCategory::Patchwork => "patchwork",
            PatternCategory::Textured => "textured",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    ComplexPatchwork,
    Patchwork,
    Geometric,
    StripedLinear,
    Textured,
    SolidPlain,
    SubtlePattern,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::ComplexPatchwork => "Complex Patchwork",
            PatternKind::Patchwork => "Patchwork",
            PatternKind::Geometric => "Geometric",
            PatternKind::StripedLinear => "Striped/Linear",
            PatternKind::Textured => "Textured",
            PatternKind::SolidPlain => "Solid/Plain",
            PatternKind::SubtlePattern => "Subtle Pattern",
        }
    }

    pub fn category(self) -> PatternCategory {
        match self {
            PatternKind::ComplexPatchwork | PatternKind::Patchwork => PatternCategory::Patchwork,
            PatternKind::Geometric => PatternCategory::Geometric,
            PatternKind::StripedLinear => PatternCategory::Striped,
            PatternKind::SolidPlain => PatternCategory::Solid,
            PatternKind::Textured | PatternKind::SubtlePattern => PatternCategory::Textured,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of pattern classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternClass {
    pub kind: PatternKind,
    /// Edge band of the rule that fired: 0 (solid) up to 5 (complex patchwork)
    pub rank: u8,
}

struct PatternRule {
    rank: u8,
    when: fn(f64) -> bool,
    then: fn(f64) -> PatternKind,
}

static PATTERN_LADDER: [PatternRule; 6] = [
    PatternRule {
        rank: 5,
        when: |edge| edge > 0.35,
        then: |_| PatternKind::ComplexPatchwork,
    },
    PatternRule {
        rank: 4,
        when: |edge| edge > 0.25,
        then: |variance| {
            if variance > 3000.0 {
                PatternKind::Patchwork
            } else {
                PatternKind::Geometric
            }
        },
    },
    PatternRule {
        rank: 3,
        when: |edge| edge > 0.18,
        then: |_| PatternKind::StripedLinear,
    },
    PatternRule {
        rank: 2,
        when: |edge| edge > 0.12,
        then: |variance| {
            if variance > 2000.0 {
                PatternKind::Geometric
            } else {
                PatternKind::Textured
            }
        },
    },
    PatternRule {
        rank: 0,
        when: |edge| edge < 0.08,
        then: |_| PatternKind::SolidPlain,
    },
    PatternRule {
        rank: 1,
        when: |_| true,
        then: |_| PatternKind::SubtlePattern,
    },
];

/// Classify pattern from edge density and variance. The first matching rule wins.
pub fn classify_pattern(edge_density: f64, variance: f64) -> PatternClass {
    PATTERN_LADDER
        .iter()
        .find(|rule| (rule.when)(edge_density))
        .map_or(
            PatternClass {
                kind: PatternKind::SubtlePattern,
                rank: 1,
            },
            |rule| PatternClass {
                kind: (rule.then)(variance),
                rank: rule.rank,
            },
        )
}
