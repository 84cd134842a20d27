//! vga-picture - images to VGA framebuffer headers
//!
//! Converts an arbitrary image into a 640x480 grid of 16-color palette
//! indices and emits it as a C array in a header file.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
