//! Palette struct with nearest-color matching.
//!
//! A VGA-style framebuffer stores one 4-bit index per pixel, so the palette
//! always holds exactly [`PALETTE_SIZE`] entries.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 16;

/// A fixed, ordered set of 16 reference colors.
///
/// Index order matters: the index is what ends up in the framebuffer, and
/// it decides ties in [`find_nearest()`](Palette::find_nearest).
///
/// # Example
///
/// ```
/// use vga_palette::{Palette, Rgb};
///
/// let palette = Palette::default();
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.color(15), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// The built-in palette of the VGA driver.
    pub const VGA: Palette = Palette {
        colors: [
            Rgb::new(0, 0, 0),
            Rgb::new(46, 210, 62),
            Rgb::new(35, 168, 59),
            Rgb::new(66, 245, 75),
            Rgb::new(0, 37, 233),
            Rgb::new(3, 192, 237),
            Rgb::new(1, 128, 239),
            Rgb::new(29, 251, 248),
            Rgb::new(236, 41, 19),
            Rgb::new(213, 207, 66),
            Rgb::new(217, 140, 49),
            Rgb::new(205, 247, 79),
            Rgb::new(191, 53, 240),
            Rgb::new(185, 195, 234),
            Rgb::new(183, 131, 239),
            Rgb::new(255, 255, 255),
        ],
    };

    /// Create a palette from caller-supplied colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` does not hold exactly 16 entries ([`PaletteError::WrongSize`])
    /// - a color appears twice ([`PaletteError::DuplicateColor`])
    ///
    /// # Example
    ///
    /// ```
    /// use vga_palette::{Palette, PaletteError, Rgb};
    ///
    /// let greys: Vec<Rgb> = (0..16u8).map(|i| Rgb::new(i * 17, i * 17, i * 17)).collect();
    /// let palette = Palette::new(&greys).unwrap();
    /// assert_eq!(palette.color(1), Rgb::new(17, 17, 17));
    ///
    /// let too_few = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
    /// assert!(matches!(Palette::new(&too_few), Err(PaletteError::WrongSize { .. })));
    /// ```
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let colors: [Rgb; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::WrongSize {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            })?;

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self { colors })
    }

    /// Create a palette from hex color strings such as `"#EC2913"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first unparsable string,
    /// or the validation errors of [`Palette::new()`].
    ///
    /// # Example
    ///
    /// ```
    /// use vga_palette::{Palette, Rgb};
    ///
    /// let hex: Vec<String> = Palette::VGA.colors().iter().map(|c| c.to_string()).collect();
    /// let refs: Vec<&str> = hex.iter().map(String::as_str).collect();
    /// assert_eq!(Palette::from_hex(&refs).unwrap(), Palette::VGA);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed: Vec<Rgb> = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.parse::<Rgb>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette (always 16).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept alongside [`len()`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 16`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Find the nearest palette color to `pixel`.
    ///
    /// Returns `(index, squared_distance)`. Distance is squared Euclidean
    /// RGB distance. When several entries are equally close the lowest index
    /// wins: entries are scanned in order and only a strictly smaller
    /// distance replaces the current best.
    ///
    /// # Example
    ///
    /// ```
    /// use vga_palette::{Palette, Rgb};
    ///
    /// let (idx, dist) = Palette::VGA.find_nearest(Rgb::new(250, 250, 250));
    /// assert_eq!(idx, 15);
    /// assert_eq!(dist, 75);
    /// ```
    #[inline]
    pub fn find_nearest(&self, pixel: Rgb) -> (usize, u32) {
        // Linear scan - 16 entries
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = pixel.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::VGA
    }
}
