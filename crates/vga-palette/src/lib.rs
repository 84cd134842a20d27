#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! vga-palette: nearest-color quantization for 16-color VGA framebuffers
//!
//! This library maps RGB pixels to indices of a fixed 16-entry palette.
//! A VGA-style framebuffer stores one palette index per pixel rather than a
//! color value; this crate produces that index grid.
//!
//! # Quick Start
//!
//! ```
//! use vga_palette::{Palette, Quantizer, Rgb};
//!
//! let quantizer = Quantizer::new(Palette::VGA);
//! let pixels = vec![Rgb::new(255, 0, 0); 4];
//! let grid = quantizer.quantize(&pixels, 2, 2);
//!
//! assert_eq!(grid.width(), 2);
//! assert_eq!(grid.height(), 2);
//! assert!(grid.indices().iter().all(|&i| i == 8));
//! ```
//!
//! # Matching Rule
//!
//! For a pixel `(r, g, b)` and palette entry `(pr, pg, pb)` the distance is
//!
//! ```text
//! d = (r - pr)^2 + (g - pg)^2 + (b - pb)^2
//! ```
//!
//! and the pixel receives the index with the smallest `d`. When several
//! entries share the smallest distance the **lowest index** wins, so output
//! is reproducible byte for byte.
//!
//! There is deliberately no gamma handling, no perceptual color space and no
//! dithering: the palette is matched exactly as given, in plain RGB.
//!
//! # Custom Palettes
//!
//! [`Palette::VGA`] is the built-in palette. Other palettes must also have
//! exactly 16 distinct entries:
//!
//! ```
//! use vga_palette::Palette;
//!
//! let hex = [
//!     "#000", "#111", "#222", "#333", "#444", "#555", "#666", "#777",
//!     "#888", "#999", "#AAA", "#BBB", "#CCC", "#DDD", "#EEE", "#FFF",
//! ];
//! let palette = Palette::from_hex(&hex).unwrap();
//! assert_eq!(palette.len(), 16);
//! ```

pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;


pub use color::Rgb;
pub use output::IndexGrid;
pub use palette::{Palette, PaletteError, ParseColorError, PALETTE_SIZE};
pub use quantize::Quantizer;
