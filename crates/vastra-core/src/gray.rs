//! GrayBuffer - 8-bit luminance grid
//!
//! Derived once per analysis from a [`crate::PixelBuffer`] and shared
//! read-only by the texture and pattern stages.

use crate::error::{Error, Result};

/// Read-only luminance image, one byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Create a buffer filled with a single value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        })
    }

    /// Wrap existing luminance samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the luminance at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the luminance at (x, y) without bounds checking.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let g = GrayBuffer::from_raw(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(g.get(2, 1), Some(5));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_from_raw_errors() {
        assert!(GrayBuffer::from_raw(0, 2, vec![]).is_err());
        assert!(matches!(
            GrayBuffer::from_raw(2, 2, vec![0; 3]),
            Err(Error::DataLengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_new_filled() {
        let g = GrayBuffer::new_filled(4, 4, 128).unwrap();
        assert!(g.data().iter().all(|&v| v == 128));
        assert!(GrayBuffer::new_filled(4, 0, 0).is_err());
    }
}
