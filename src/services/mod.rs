pub mod converter;
pub mod loader;

pub use converter::{ConversionReport, Converter};
