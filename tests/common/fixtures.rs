//! Test fixtures and constants.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Colors with a known palette index in the built-in VGA palette
pub mod colors {
    /// Maps to index 8 (236, 41, 19)
    pub const RED: [u8; 3] = [255, 0, 0];

    /// Maps to index 15 (white)
    pub const NEAR_WHITE: [u8; 3] = [250, 250, 250];

    /// Maps to index 0 (black)
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Write a solid-color PNG and return its path
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("failed to write fixture image");
    path
}

/// Write a PNG with a horizontal hue/brightness sweep, so many palette
/// entries appear after quantization
pub fn gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.saturating_sub(1).max(1)) as u8,
            (y * 255 / height.saturating_sub(1).max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
    .save(&path)
    .expect("failed to write fixture image");
    path
}

/// Write a YAML config file and return its path
pub fn config_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, content).expect("failed to write config");
    path
}
