//! C header emitter for quantized images.
//!
//! Produces a `const unsigned short` array wrapped in an include guard:
//!
//! ```text
//! #ifndef VGA_IMAGE_H
//! #define VGA_IMAGE_H
//!
//! const unsigned short vga_image[480 * 640] = {
//! 0, 0, 15, ...,
//! ...
//! };
//!
//! #endif // VGA_IMAGE_H
//! ```
//!
//! The declared size is taken from the grid (`height * width`), which is the
//! literal `480 * 640` for a VGA frame.

use crate::error::ConvertError;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use vga_palette::IndexGrid;

/// Include guard macro
pub const INCLUDE_GUARD: &str = "VGA_IMAGE_H";

/// Name of the emitted array
pub const ARRAY_NAME: &str = "vga_image";

/// Decimal text of every possible palette index
const INDEX_TEXT: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
];

/// Render the header into a string.
pub fn render_header(grid: &IndexGrid) -> String {
    // Up to 4 bytes per value ("15, ") plus framing
    let mut out = String::with_capacity(grid.indices().len() * 4 + 256);

    out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n"));
    out.push_str(&format!("#define {INCLUDE_GUARD}\n\n"));
    out.push_str(&format!(
        "const unsigned short {ARRAY_NAME}[{} * {}] = {{\n",
        grid.height(),
        grid.width()
    ));

    for row in grid.rows() {
        for (i, &idx) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(INDEX_TEXT[idx as usize]);
        }
        out.push_str(",\n");
    }

    out.push_str("};\n\n");
    out.push_str(&format!("#endif // {INCLUDE_GUARD}\n"));
    out
}

/// Write the header to any writer.
pub fn write_header<W: Write>(grid: &IndexGrid, out: &mut W) -> io::Result<()> {
    out.write_all(render_header(grid).as_bytes())
}

/// Write the header to `path`, creating the parent directory if needed.
///
/// The content is staged in a temporary file next to the target and renamed
/// into place, so a failure never leaves a truncated header behind.
/// Returns the number of bytes written.
pub fn write_header_file(grid: &IndexGrid, path: &Path) -> Result<u64, ConvertError> {
    let dir = ensure_parent_dir(path)?;
    let output_error = |source: io::Error| ConvertError::Output {
        path: path.to_path_buf(),
        source,
    };

    let text = render_header(grid);

    let mut builder = tempfile::Builder::new();
    builder.prefix(".vga-picture-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same mode a plain create would give (before umask)
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let staged = builder.tempfile_in(dir).map_err(output_error)?;

    {
        let mut writer = BufWriter::new(staged.as_file());
        writer.write_all(text.as_bytes()).map_err(output_error)?;
        writer.flush().map_err(output_error)?;
    }

    staged
        .persist(path)
        .map_err(|e| output_error(e.error))?;

    Ok(text.len() as u64)
}

/// Create the parent directory of `path` if it has one.
///
/// Returns the directory the file will live in (`.` for a bare file name).
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<&Path, ConvertError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|source| ConvertError::OutputDir {
                path: dir.to_path_buf(),
                source,
            })?;
            Ok(dir)
        }
        None => Ok(Path::new(".")),
    }
}
