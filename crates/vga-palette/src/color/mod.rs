//! Color types
//!
//! The crate works on plain 8-bit RGB triples: image pixels and palette
//! entries are compared channel by channel.
//!
//! # Example
//!
//! ```
//! use vga_palette::Rgb;
//!
//! let pixel: Rgb = "#EC2913".parse().unwrap();
//! assert_eq!(pixel, Rgb::new(236, 41, 19));
//! ```

mod rgb;

pub use rgb::Rgb;
