//! vastra-test - Regression test helpers for Vastra
//!
//! Provides the [`RegParams`] bookkeeping used by every `*_reg.rs` test and
//! a set of synthetic fabric fixtures, so tests never depend on image files
//! checked into the repository.
//!
//! # Usage
//!
//! ```ignore
//! use vastra_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("texture");
//! let gray = fixtures::make_uniform_gray(64, 64, 128)?;
//! rp.compare_values(0.0, variance, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to also write intermediate buffers
//!   under `tests/regout`

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // vastra-test is at crates/vastra-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
