//! Analysis orchestration
//!
//! Runs one photo through the stages
//!
//! ```text
//! Decoding -> Sampling -> Classifying -> Scoring -> Naming -> Done
//! ```
//!
//! with a single error edge from every stage to `Fallback`. The public
//! [`Analyzer::analyze`] never fails: any stage error, including a panic
//! inside a codec, is logged and replaced by [`AnalysisRecord::fallback`].
//! [`Analyzer::try_analyze`] exposes the failure for diagnostics.
//!
//! An `Analyzer` holds only its options and is `Send + Sync`; every
//! intermediate buffer is allocated per call.

use crate::config::AnalysisOptions;
use crate::error::{AnalysisError, ConfigError, StageError};
use crate::record::{AnalysisRecord, Provenance};
use crate::sampler::SampledImage;
use log::{debug, info, warn};
use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use vastra_color::{ColorClass, ColorCount, ColorSample, dominant_colors};
use vastra_core::PixelBuffer;
use vastra_filter::{EdgeOptions, TextureDescriptors, compute_descriptors};
use vastra_recog::{
    PatternClass, QualityRating, TextureKind, classify_pattern, classify_texture, quality_score,
    rate_quality, suggestions, textile_name,
};

/// Base weight of a sample in kilograms
const BASE_WEIGHT_KG: f64 = 1.5;

/// Pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Decoding,
    Sampling,
    Classifying,
    Scoring,
    Naming,
    Done,
    Fallback,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Decoding => "decoding",
            Stage::Sampling => "sampling",
            Stage::Classifying => "classifying",
            Stage::Scoring => "scoring",
            Stage::Naming => "naming",
            Stage::Done => "done",
            Stage::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifying stage
struct Classification {
    color: ColorClass,
    hex: String,
    palette: Vec<String>,
    descriptors: TextureDescriptors,
    texture: TextureKind,
    pattern: PatternClass,
}

/// Output of the scoring stage
struct Scores {
    quality: f64,
    rating: QualityRating,
    weight: f64,
}

/// Deterministic fabric photo analyzer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    /// Create an analyzer after validating `options`.
    pub fn new(options: AnalysisOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze encoded image bytes, substituting the fallback record on
    /// any failure.
    pub fn analyze(&self, bytes: &[u8]) -> AnalysisRecord {
        self.try_analyze(bytes).unwrap_or_else(log_fallback)
    }

    /// Analyze an already decoded image, substituting the fallback record
    /// on any failure.
    pub fn analyze_buffer(&self, decoded: &PixelBuffer) -> AnalysisRecord {
        self.try_analyze_buffer(decoded).unwrap_or_else(log_fallback)
    }

    /// Analyze encoded image bytes, reporting the failing stage.
    pub fn try_analyze(&self, bytes: &[u8]) -> Result<AnalysisRecord, StageError> {
        let decoded = run_stage(Stage::Decoding, || Ok(vastra_io::read_image_mem(bytes)?))?;
        self.try_analyze_buffer(&decoded)
    }

    /// Analyze an already decoded image, reporting the failing stage.
    pub fn try_analyze_buffer(&self, decoded: &PixelBuffer) -> Result<AnalysisRecord, StageError> {
        let opts = &self.options;
        let sampled = run_stage(Stage::Sampling, || SampledImage::new(decoded, opts))?;
        let class = run_stage(Stage::Classifying, || self.classify(&sampled))?;
        let scores = run_stage(Stage::Scoring, || Ok(score(&sampled, &class.descriptors)))?;
        let record = run_stage(Stage::Naming, || Ok(assemble(class, scores)))?;

        debug!("entering {} stage", Stage::Done);
        info!(
            "analyzed {}x{} image: color={:?} texture={:?} pattern={:?}",
            sampled.original_dimensions().0,
            sampled.original_dimensions().1,
            record.color,
            record.texture,
            record.pattern
        );
        Ok(record)
    }

    fn classify(&self, sampled: &SampledImage) -> Result<Classification, AnalysisError> {
        let opts = &self.options;
        let palette = dominant_colors(sampled.buffer(), opts.dominant_palette_size)?;
        let dominant = palette
            .first()
            .copied()
            .ok_or_else(|| empty_error(sampled.buffer()))?;
        let (r, g, b) = dominant.rgb;
        let sample = ColorSample::from_rgb(r, g, b);
        let color = sample.classify_with(opts.achromatic_saturation);

        let edge = EdgeOptions {
            threshold: opts.edge_threshold,
        };
        let descriptors = compute_descriptors(sampled.gray()?, &edge)?;
        let texture = classify_texture(&descriptors);
        let pattern = classify_pattern(descriptors.edge_density, descriptors.variance);

        Ok(Classification {
            color,
            hex: sample.hex(),
            palette: palette.iter().map(ColorCount::hex).collect(),
            descriptors,
            texture,
            pattern,
        })
    }
}

fn score(sampled: &SampledImage, descriptors: &TextureDescriptors) -> Scores {
    let quality = quality_score(sampled.original_pixel_count(), descriptors.variance);
    Scores {
        quality,
        rating: rate_quality(quality),
        weight: round1(BASE_WEIGHT_KG * (1.0 + descriptors.edge_density)),
    }
}

fn assemble(class: Classification, scores: Scores) -> AnalysisRecord {
    let texture = class.texture;
    let pattern = class.pattern.kind;
    AnalysisRecord {
        color: class.color.name.to_string(),
        color_category: class.color.category,
        color_hex: class.hex,
        dominant_colors: class.palette,
        texture: texture.name().to_string(),
        texture_category: texture.category(),
        pattern: pattern.name().to_string(),
        pattern_category: pattern.category(),
        quality: scores.quality,
        quality_rating: scores.rating,
        estimated_weight: scores.weight,
        textile_name: textile_name(class.color.name, texture, pattern),
        suggestions: suggestions(texture.category(), pattern.category())
            .into_iter()
            .map(str::to_string)
            .collect(),
        provenance: Provenance::Computed,
    }
}

/// Run one stage, tagging its error and absorbing panics.
fn run_stage<T>(
    stage: Stage,
    f: impl FnOnce() -> Result<T, AnalysisError>,
) -> Result<T, StageError> {
    debug!("entering {} stage", stage);
    let outcome = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(AnalysisError::Panicked(panic_message(payload.as_ref()))),
    };
    outcome.map_err(|source| StageError { stage, source })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn log_fallback(err: StageError) -> AnalysisRecord {
    warn!(
        "{} stage failed with {}: {}; entering {} stage",
        err.stage,
        err.source.kind(),
        err.source,
        Stage::Fallback
    );
    AnalysisRecord::fallback()
}

fn empty_error(buf: &PixelBuffer) -> AnalysisError {
    AnalysisError::EmptyImage {
        width: buf.width(),
        height: buf.height(),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
