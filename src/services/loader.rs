use crate::error::ConvertError;
use crate::models::{FrameSpec, ResizeFilter};
use image::{imageops, ImageReader, RgbImage};
use std::path::Path;
use vga_palette::Rgb;

/// Decode an image file of any supported format and force 3-channel RGB.
///
/// The format is detected from the file content, not the extension.
/// Alpha is dropped, grayscale is expanded, 16-bit channels are reduced.
pub fn load_rgb(path: &Path) -> Result<RgbImage, ConvertError> {
    let input_error = |source: image::ImageError| ConvertError::Input {
        path: path.to_path_buf(),
        source,
    };
    // Sniff the format from the content; the extension may be missing or wrong
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| input_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(input_error)?;
    tracing::info!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Loaded image"
    );
    Ok(decoded.into_rgb8())
}

/// Resample to exactly the frame size, ignoring aspect ratio.
///
/// Images that already have the frame size are returned as-is.
pub fn resize(image: RgbImage, spec: FrameSpec, filter: ResizeFilter) -> RgbImage {
    if image.dimensions() == (spec.width, spec.height) {
        return image;
    }
    tracing::debug!(
        from_width = image.width(),
        from_height = image.height(),
        to_width = spec.width,
        to_height = spec.height,
        ?filter,
        "Resizing"
    );
    imageops::resize(&image, spec.width, spec.height, filter.filter_type())
}

/// Flatten an RGB image into row-major pixels.
pub fn to_pixels(image: &RgbImage) -> Vec<Rgb> {
    image.pixels().map(|p| Rgb::from_bytes(p.0)).collect()
}
