//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel blocks of the DXT texture compression formats.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Safety
//!
//! The unchecked accessors (`get_pixel_unchecked`, `set_pixel_unchecked`) bypass bounds
//! checking for use in the block decoders, and require coordinates within 0-3.

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of DXT pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use vtf_decode_common::color_8888::Color8888;
    /// use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets a pixel at the specified coordinates, or [`None`] if outside the block.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color8888> {
        if x < 4 && y < 4 {
            Some(self.pixels[y * 4 + x])
        } else {
            None
        }
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn get_pixel_unchecked(&self, x: usize, y: usize) -> Color8888 {
        *self.pixels.get_unchecked(y * 4 + x)
    }

    /// Sets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn set_pixel_unchecked(&mut self, x: usize, y: usize, pixel: Color8888) {
        *self.pixels.get_unchecked_mut(y * 4 + x) = pixel;
    }

    /// Returns one row of the block (0-3) as RGBA8888 bytes.
    ///
    /// # Panics
    ///
    /// If `y >= 4`.
    #[inline]
    pub fn row_bytes(&self, y: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (x, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.pixels[y * 4 + x].to_bytes());
        }
        out
    }
}
