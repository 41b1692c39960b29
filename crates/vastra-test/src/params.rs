//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use std::fs;
use vastra_core::{ImageFormat, PixelBuffer};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values only (default)
    #[default]
    Compare,
    /// Check values and write intermediate buffers for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, a running check index and every failure, so a
/// single `*_reg` test can run many checks and report them all at once.
pub struct RegParams {
    /// Name of the test (e.g., "texture")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "texture")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || actual.is_nan() {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two labels (color names, texture names, hex strings)
    pub fn compare_labels(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;
        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: label comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Check that a condition holds
    pub fn check(&mut self, cond: bool, what: &str) -> bool {
        self.index += 1;
        if !cond {
            self.fail(format!(
                "Failure in {}_reg: check for index {} did not hold: {}",
                self.test_name, self.index, what
            ));
        }
        cond
    }

    /// Compare two buffers for exact equality
    pub fn compare_buffers(&mut self, buf1: &PixelBuffer, buf2: &PixelBuffer) -> bool {
        self.index += 1;

        if buf1.dimensions() != buf2.dimensions() {
            self.fail(format!(
                "Failure in {}_reg: buffer comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                buf1.dimensions(),
                buf2.dimensions()
            ));
            return false;
        }

        let width = buf1.width() as usize;
        if let Some(i) = buf1
            .data()
            .iter()
            .zip(buf2.data())
            .position(|(a, b)| a != b)
        {
            self.fail(format!(
                "Failure in {}_reg: buffer comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % width,
                i / width
            ));
            return false;
        }

        true
    }

    /// Write a buffer as PNG under the regout directory in display mode.
    ///
    /// Does nothing in compare mode.
    pub fn write_buffer(&mut self, buf: &PixelBuffer, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        fs::create_dir_all(regout_dir())?;
        let path = format!(
            "{}/{}.{:02}.{}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            label,
            ImageFormat::Png.extension()
        );
        vastra_io::write_image(buf, &path, ImageFormat::Png).map_err(|e| {
            TestError::ImageWrite {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.compare_values(0.0, f64::NAN, 1.0));
        assert_eq!(rp.failures().len(), 2);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_labels() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_labels("Blue", "Blue"));
        assert!(!rp.compare_labels("Blue", "Navy Blue"));
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_buffers_mismatch() {
        let mut rp = RegParams::new("test");
        let a = PixelBuffer::new(2, 2).unwrap();
        let b = PixelBuffer::from_rgb_bytes(2, 2, &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0]).unwrap();
        assert!(rp.compare_buffers(&a, &a.clone()));
        assert!(!rp.compare_buffers(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
    }
}
