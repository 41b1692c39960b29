//! vastra-transform - Downsampling for analysis
//!
//! Bounds the cost of every later pixel scan by shrinking images so the
//! longer side fits a fixed cap, preserving aspect ratio.
//!
//! - Area mapping (box average over the covered source pixels)
//! - Sampling (nearest neighbour)

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{
    ScaleMethod, fit_dimensions, scale_area_map, scale_by_sampling, scale_to_fit, scale_to_size,
};
