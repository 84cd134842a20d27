//! Nearest-color quantization of whole images.
//!
//! [`Quantizer`] maps every pixel of an RGB grid to the index of its nearest
//! palette entry and returns the result as an [`IndexGrid`].

use crate::color::Rgb;
use crate::output::IndexGrid;
use crate::palette::{Palette, PALETTE_SIZE};

/// Batch quantizer for a fixed palette.
///
/// The palette is unpacked once into per-channel integer arrays so the hot
/// loop does plain `i32` arithmetic over 16 entries. Runs of identical
/// pixels (flat areas, upscaled images) reuse the previous result.
///
/// [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
/// reused across many images.
///
/// # Example
///
/// ```
/// use vga_palette::{Palette, Quantizer, Rgb};
///
/// let quantizer = Quantizer::new(Palette::VGA);
/// let pixels = vec![
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 0, 0),
///     Rgb::new(250, 250, 250),
///     Rgb::new(255, 255, 255),
/// ];
/// let grid = quantizer.quantize(&pixels, 2, 2);
///
/// assert_eq!(grid.indices(), &[0, 8, 15, 15]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    reds: [i32; PALETTE_SIZE],
    greens: [i32; PALETTE_SIZE],
    blues: [i32; PALETTE_SIZE],
}

impl Quantizer {
    /// Create a quantizer for the given palette.
    pub fn new(palette: Palette) -> Self {
        let mut reds = [0; PALETTE_SIZE];
        let mut greens = [0; PALETTE_SIZE];
        let mut blues = [0; PALETTE_SIZE];
        for (i, color) in palette.colors().iter().enumerate() {
            reds[i] = color.r as i32;
            greens[i] = color.g as i32;
            blues[i] = color.b as i32;
        }
        Self {
            palette,
            reds,
            greens,
            blues,
        }
    }

    /// The palette this quantizer matches against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the nearest palette entry for a single pixel.
    ///
    /// Same result as [`Palette::find_nearest()`]: squared RGB distance,
    /// lowest index on ties.
    #[inline]
    pub fn nearest_index(&self, pixel: Rgb) -> u8 {
        let (r, g, b) = (pixel.r as i32, pixel.g as i32, pixel.b as i32);

        let mut best_idx = 0usize;
        let mut best_dist = i32::MAX;
        for i in 0..PALETTE_SIZE {
            let dr = r - self.reds[i];
            let dg = g - self.greens[i];
            let db = b - self.blues[i];
            let dist = dr * dr + dg * dg + db * db;
            // Strict comparison keeps the first (lowest) index on ties
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx as u8
    }

    /// Quantize a row-major RGB grid.
    ///
    /// # Arguments
    ///
    /// * `pixels` - Input pixels, row-major, `width * height` entries
    /// * `width` - Grid width in pixels
    /// * `height` - Grid height in pixels
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn quantize(&self, pixels: &[Rgb], width: usize, height: usize) -> IndexGrid {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );

        let mut indices = Vec::with_capacity(pixels.len());
        let mut last: Option<(Rgb, u8)> = None;
        for &pixel in pixels {
            let idx = match last {
                Some((prev, idx)) if prev == pixel => idx,
                _ => self.nearest_index(pixel),
            };
            last = Some((pixel, idx));
            indices.push(idx);
        }

        IndexGrid::new(indices, width, height, self.palette.clone())
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Quantizer::new(Palette::default())
    }
}
