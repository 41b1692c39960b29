//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and rows.

use super::{PixelBuffer, PixelBufferMut};
use crate::color;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get one row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.width() as usize;
        let start = (y as usize) * w;
        &self.data()[start..start + w]
    }

    /// Iterate over all pixels as RGB triples in row-major order.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data().iter().map(|&p| color::extract_rgb(p))
    }
}

impl PixelBufferMut {
    /// Get a packed pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.inner.data[(y as usize) * (self.width() as usize) + (x as usize)])
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            let len = self.inner.data.len();
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width() as usize) + (x as usize),
                len,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let w = self.width() as usize;
        self.inner.data[(y as usize) * w + (x as usize)] = val;
    }

    /// Set RGB values at (x, y), ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if x < self.width() && y < self.height() {
            self.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }

    /// Fill the whole buffer with one color.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        let p = color::compose_rgb(r, g, b);
        self.inner.data.fill(p);
    }
}
