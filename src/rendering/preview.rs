//! Indexed PNG preview of a quantized image.
//!
//! The preview is a 4-bit palette PNG whose PLTE chunk holds the 16 palette
//! colors, so what you see is exactly what the framebuffer will show.

use crate::error::ConvertError;
use crate::rendering::header::ensure_parent_dir;
use std::io::Cursor;
use std::path::Path;
use vga_palette::IndexGrid;

/// Encode the grid as a 4-bit indexed PNG.
pub fn encode_preview(grid: &IndexGrid) -> Result<Vec<u8>, png::EncodingError> {
    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let plte: Vec<u8> = grid
        .palette()
        .colors()
        .iter()
        .flat_map(|c| c.to_bytes())
        .collect();
    let packed = pack_nibbles(grid.indices(), grid.width());

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_palette(plte);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
    }
    Ok(buf.into_inner())
}

/// Write the preview PNG to `path`, creating the parent directory if needed.
pub fn write_preview_png(grid: &IndexGrid, path: &Path) -> Result<(), ConvertError> {
    ensure_parent_dir(path)?;
    let bytes = encode_preview(grid).map_err(|e| ConvertError::Preview {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, &bytes).map_err(|source| ConvertError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Pack 4-bit indices into PNG row data, high nibble first, rows padded to a byte.
fn pack_nibbles(indices: &[u8], width: usize) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let bytes_per_row = width.div_ceil(2);
    let height = indices.len() / width;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width) {
        for pair in row.chunks(2) {
            let hi = pair[0] & 0x0F;
            let lo = pair.get(1).map_or(0, |&v| v & 0x0F);
            packed.push((hi << 4) | lo);
        }
    }

    packed
}
