use std::path::PathBuf;
use thiserror::Error;
use vga_palette::PaletteError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to load image {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG encode error for {}: {message}", .path.display())]
    Preview { path: PathBuf, message: String },

    #[error("Preview path {} is the header output path", .path.display())]
    PreviewConflict { path: PathBuf },

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "Index grid is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid frame dimensions: {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_error_names_path() {
        let error = ConvertError::OutputDir {
            path: PathBuf::from("/readonly/out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to create output directory /readonly/out: denied"
        );
    }

    #[test]
    fn test_output_error_names_path() {
        let error = ConvertError::Output {
            path: PathBuf::from("out/image.h"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(error.to_string(), "Failed to write out/image.h: disk full");
    }

    #[test]
    fn test_invalid_dimensions() {
        let error = ConvertError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(error.to_string(), "Invalid frame dimensions: 0x480");
    }

    #[test]
    fn test_dimension_mismatch() {
        let error = ConvertError::DimensionMismatch {
            expected_width: 640,
            expected_height: 480,
            actual_width: 320,
            actual_height: 200,
        };
        assert_eq!(
            error.to_string(),
            "Index grid is 320x200, expected 640x480"
        );
    }

    #[test]
    fn test_preview_error() {
        let error = ConvertError::Preview {
            path: PathBuf::from("preview.png"),
            message: "bad data".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "PNG encode error for preview.png: bad data"
        );
    }

    #[test]
    fn test_config_error_from_palette_error() {
        let palette_error = PaletteError::WrongSize {
            expected: 16,
            actual: 3,
        };
        let config_error: ConfigError = palette_error.into();
        match config_error {
            ConfigError::Palette(_) => {}
            _ => panic!("Expected Palette variant"),
        }
        assert_eq!(
            ConfigError::Palette(PaletteError::EmptyPalette).to_string(),
            "Invalid palette: palette cannot be empty"
        );
    }
}
