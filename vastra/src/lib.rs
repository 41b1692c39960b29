//! Vastra - Deterministic fabric photo analysis
//!
//! Turns an uploaded fabric photograph into an [`AnalysisRecord`]: a
//! dominant color name, a texture and pattern class, a quality score and
//! tier, a textile name, and reuse suggestions. Every decision is a fixed
//! statistical rule over pixel values.
//!
//! # Crates
//!
//! Buffer types from `vastra-core` are re-exported at the top level.
//!
//! - [`io`] - format detection and decoding
//! - [`transform`] - downsampling
//! - [`color`] - HSV, luminance and color naming
//! - [`filter`] - texture descriptors
//! - [`recog`] - texture, pattern, quality and naming ladders
//!
//! # Example
//!
//! ```no_run
//! let bytes = std::fs::read("swatch.jpg")?;
//! let record = vastra::analyze_image(&bytes);
//! println!("{} / {} / {}", record.color, record.texture, record.pattern);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod pipeline;
pub mod pricing;
pub mod record;
pub mod sampler;

// Re-export layer crates as modules to avoid name conflicts
pub use vastra_color as color;
pub use vastra_filter as filter;
pub use vastra_io as io;
pub use vastra_recog as recog;
pub use vastra_transform as transform;

pub use config::AnalysisOptions;
pub use error::{AnalysisError, ConfigError, StageError};
pub use listing::MaterialFilter;
pub use pipeline::{Analyzer, Stage};
pub use pricing::{DEFAULT_BASE_PRICE, suggest_price_per_kg, tier_multiplier};
pub use record::{AnalysisRecord, Provenance};
pub use sampler::SampledImage;
// Buffer types used by callers that decode images themselves
pub use vastra_core::{ColorMode, GrayBuffer, ImageFormat, PixelBuffer, PixelBufferMut};

/// Analyze encoded image bytes with default options.
///
/// Never fails; undecodable input yields [`AnalysisRecord::fallback`].
pub fn analyze_image(bytes: &[u8]) -> AnalysisRecord {
    Analyzer::default().analyze(bytes)
}
