//! vastra-filter - Texture descriptors over luminance
//!
//! This crate provides the statistics both the texture and the pattern
//! classifiers consume:
//!
//! - Mean, variance and standard deviation of luminance
//! - Edge density from right and below neighbour differences
//! - [`TextureDescriptors`] bundling all four, computed in one call

pub mod descriptors;
pub mod edge;
mod error;
pub mod stats;

pub use descriptors::{TextureDescriptors, compute_descriptors};
pub use edge::{DEFAULT_EDGE_THRESHOLD, EdgeOptions, count_edges, edge_density};
pub use error::{FilterError, FilterResult};
pub use stats::{GrayStats, gray_stats};
