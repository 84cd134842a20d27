//! Output types for the quantization pipeline.
//!
//! [`IndexGrid`] stores palette indices with dimension metadata and an owned
//! [`Palette`](crate::palette::Palette), offering two views on demand:
//!
//! - **Indexed** ([`IndexGrid::indices`], [`IndexGrid::rows`]): raw `u8`
//!   palette indices, the framebuffer payload
//! - **RGB** ([`IndexGrid::to_rgb`]): palette colors, for previews

mod index_grid;

pub use index_grid::IndexGrid;
