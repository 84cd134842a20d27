//! Palette types and utilities
//!
//! This module provides the fixed-size [`Palette`] and the error types for
//! color parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PALETTE_SIZE};
