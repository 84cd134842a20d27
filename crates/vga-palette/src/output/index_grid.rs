//! IndexGrid struct: the quantized image.
//!
//! [`IndexGrid`] wraps palette indices with dimension metadata and an owned
//! [`Palette`]. The indexed form is canonical; RGB output is computed on
//! demand by looking up palette colors.

use crate::palette::{Palette, PALETTE_SIZE};

/// The output of quantization.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette used for matching.
///
/// # Example
///
/// ```
/// use vga_palette::{IndexGrid, Palette};
///
/// let grid = IndexGrid::new(vec![0, 15, 15, 0], 2, 2, Palette::VGA);
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(1, 0), 15);
///
/// let rows: Vec<&[u8]> = grid.rows().collect();
/// assert_eq!(rows, vec![&[0u8, 15][..], &[15u8, 0][..]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// The palette the indices refer to.
    palette: Palette,
}

impl IndexGrid {
    /// Create a new `IndexGrid` from palette indices.
    ///
    /// # Arguments
    ///
    /// * `indices` - Palette indices, one `u8` per pixel, in row-major order.
    ///   Each value must be in `0..16`.
    /// * `width` - Image width in pixels.
    /// * `height` - Image height in pixels.
    /// * `palette` - The palette the indices refer to.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is in range.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < PALETTE_SIZE),
            "palette index out of range"
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Returns the palette indices as a slice, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to the palette used for this grid.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.indices[y * self.width + x]
    }

    /// Iterate over rows, top to bottom. Each row is left to right.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        // chunks() rejects 0; a zero-width grid has no indices anyway
        self.indices.chunks(self.width.max(1))
    }

    /// Convert to RGB bytes by palette lookup.
    ///
    /// Produces a flat `[R, G, B, R, G, B, ...]` buffer of length
    /// `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Number of pixels assigned to each palette index.
    pub fn histogram(&self) -> [usize; PALETTE_SIZE] {
        let mut counts = [0usize; PALETTE_SIZE];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }
}
