//! vastra-recog - Fabric classification rules
//!
//! Every classifier here is a pure function of [`TextureDescriptors`]
//! (plus resolution for quality), expressed as an ordered rule table
//! evaluated first-match-wins.
//!
//! # Modules
//!
//! - [`texture`]: texture ladder over variance, edge density, std dev and mean
//! - [`pattern`]: pattern ladder over edge density and variance
//! - [`quality`]: bounded quality score and rating tiers
//! - [`naming`]: textile names and reuse suggestions

pub mod naming;
pub mod pattern;
pub mod quality;
pub mod texture;

pub use naming::{MAX_SUGGESTIONS, PATTERN_EXTRA, suggestion_base, suggestions, textile_name};
pub use pattern::{PatternCategory, PatternClass, PatternKind, classify_pattern};
pub use quality::{QualityRating, quality_score, rate_quality};
pub use texture::{TextureCategory, TextureKind, classify_texture};

pub use vastra_filter::TextureDescriptors;
