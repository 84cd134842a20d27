pub mod config;
pub mod frame_spec;

pub use config::{ConverterConfig, ResizeFilter};
pub use frame_spec::FrameSpec;
