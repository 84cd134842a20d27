pub mod header;
pub mod preview;

pub use header::{render_header, write_header, write_header_file};
pub use preview::{encode_preview, write_preview_png};
