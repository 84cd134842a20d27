use crate::error::{ConfigError, ConvertError};
use crate::models::{ConverterConfig, FrameSpec, ResizeFilter};
use crate::rendering::{write_header_file, write_preview_png};
use crate::services::loader;
use image::RgbImage;
use std::path::{Path, PathBuf};
use vga_palette::{IndexGrid, Palette, Quantizer, PALETTE_SIZE};

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub source_width: u32,
    pub source_height: u32,
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
    pub bytes_written: u64,
    /// Pixels per palette index
    pub histogram: [usize; PALETTE_SIZE],
}

/// The image → header pipeline: load, resize, quantize, emit
pub struct Converter {
    quantizer: Quantizer,
    spec: FrameSpec,
    filter: ResizeFilter,
}

impl Converter {
    pub fn new(palette: Palette, spec: FrameSpec, filter: ResizeFilter) -> Self {
        Self {
            quantizer: Quantizer::new(palette),
            spec,
            filter,
        }
    }

    /// Build a converter from validated configuration
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.palette()?,
            config.frame_spec()?,
            config.filter,
        ))
    }

    pub fn spec(&self) -> FrameSpec {
        self.spec
    }

    pub fn palette(&self) -> &Palette {
        self.quantizer.palette()
    }

    /// Resize and quantize an already decoded image
    pub fn quantize_image(&self, image: RgbImage) -> Result<IndexGrid, ConvertError> {
        let resized = loader::resize(image, self.spec, self.filter);
        let pixels = loader::to_pixels(&resized);
        let grid = self.quantizer.quantize(
            &pixels,
            resized.width() as usize,
            resized.height() as usize,
        );
        self.spec.validate_grid(grid.width(), grid.height())?;
        Ok(grid)
    }

    /// Convert `input` into a C header at `output`
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        self.convert_with_preview(input, output, None)
    }

    /// Convert `input` into a C header at `output`, optionally also writing
    /// an indexed PNG preview
    pub fn convert_with_preview(
        &self,
        input: &Path,
        output: &Path,
        preview: Option<&Path>,
    ) -> Result<ConversionReport, ConvertError> {
        if let Some(preview) = preview {
            if same_path(preview, output) {
                return Err(ConvertError::PreviewConflict {
                    path: preview.to_path_buf(),
                });
            }
        }

        let image = loader::load_rgb(input)?;
        let (source_width, source_height) = image.dimensions();

        let grid = self.quantize_image(image)?;
        let histogram = grid.histogram();
        tracing::debug!(?histogram, "Quantized");

        // Preview first: a failing preview must not replace the header
        if let Some(preview) = preview {
            write_preview_png(&grid, preview)?;
            tracing::info!(preview = %preview.display(), "Preview written");
        }

        let bytes_written = write_header_file(&grid, output)?;
        tracing::info!(
            output = %output.display(),
            width = grid.width(),
            height = grid.height(),
            bytes = bytes_written,
            "Header written"
        );

        Ok(ConversionReport {
            source_width,
            source_height,
            width: grid.width(),
            height: grid.height(),
            output: output.to_path_buf(),
            bytes_written,
            histogram,
        })
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Palette::VGA, FrameSpec::VGA, ResizeFilter::default())
    }
}
