use crate::error::ConfigError;
use crate::models::FrameSpec;
use image::imageops::FilterType;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use vga_palette::Palette;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "VGA_PICTURE_CONFIG";

/// Converter configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Palette as 16 hex colors; the built-in VGA palette when absent
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// Output width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Resampling filter used when resizing the source image
    #[serde(default)]
    pub filter: ResizeFilter,
}

fn default_width() -> u32 {
    FrameSpec::VGA.width
}

fn default_height() -> u32 {
    FrameSpec::VGA.height
}

/// Resampling filter for the resize step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    /// Nearest neighbour
    Nearest,
    /// Linear (triangle) filter
    Bilinear,
    /// Catmull-Rom cubic filter
    #[default]
    Bicubic,
    /// Gaussian filter
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Bilinear => FilterType::Triangle,
            ResizeFilter::Bicubic => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file means "all defaults"
        if content.trim().is_empty() {
            tracing::info!(path = %path.display(), "Empty config, using defaults");
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            custom_palette = config.palette.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve configuration from an explicit path, then `VGA_PICTURE_CONFIG`,
    /// then built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve_from(explicit, from_env.as_deref())
    }

    fn resolve_from(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.or(from_env) {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replace the palette with a comma-separated hex list (e.g. from `--colors`)
    pub fn with_colors(mut self, colors: &str) -> Self {
        self.palette = Some(parse_color_list(colors));
        self
    }

    /// Build the validated palette
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.palette {
            Some(hex) => {
                let refs: Vec<&str> = hex.iter().map(String::as_str).collect();
                Ok(Palette::from_hex(&refs)?)
            }
            None => Ok(Palette::VGA),
        }
    }

    /// Build the validated target frame
    pub fn frame_spec(&self) -> Result<FrameSpec, ConfigError> {
        FrameSpec::new(self.width, self.height).map_err(|_| ConfigError::Dimensions {
            width: self.width,
            height: self.height,
        })
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            palette: None,
            width: default_width(),
            height: default_height(),
            filter: ResizeFilter::default(),
        }
    }
}

/// Split a comma-separated color list.
///
/// Blank entries are kept so palette validation reports their position.
pub fn parse_color_list(colors: &str) -> Vec<String> {
    if colors.trim().is_empty() {
        return Vec::new();
    }
    colors
        .split(',')
        .map(|s| s.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vga_palette::{PaletteError, Rgb};

    fn vga_hex() -> Vec<String> {
        Palette::VGA.colors().iter().map(|c| c.to_string()).collect()
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();

        assert_eq!(config.palette, None);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.filter, ResizeFilter::Bicubic);
        assert_eq!(config.palette().unwrap(), Palette::VGA);
        assert_eq!(config.frame_spec().unwrap(), FrameSpec::VGA);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = format!(
            "palette: [{}]\nwidth: 320\nheight: 200\nfilter: lanczos3\n",
            vga_hex()
                .iter()
                .map(|h| format!("\"{h}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let config: ConverterConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
        assert_eq!(config.filter, ResizeFilter::Lanczos3);
        assert_eq!(config.palette().unwrap(), Palette::VGA);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ConverterConfig = serde_yaml::from_str("filter: nearest\n").unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.palette, None);
        assert_eq!(config.filter, ResizeFilter::Nearest);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ConverterConfig, _> = serde_yaml::from_str("dither: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("width: 64\nheight: 48\n");
        let config = ConverterConfig::load(file.path()).unwrap();
        assert_eq!(config.frame_spec().unwrap(), FrameSpec::new(64, 48).unwrap());
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let file = write_config("   \n");
        let config = ConverterConfig::load(file.path()).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConverterConfig::load(Path::new("/nonexistent/vga-picture.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let file = write_config("width: [not a number\n");
        let result = ConverterConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let explicit = write_config("width: 10\n");
        let env = write_config("width: 20\n");

        let config =
            ConverterConfig::resolve_from(Some(explicit.path()), Some(env.path())).unwrap();
        assert_eq!(config.width, 10);

        let config = ConverterConfig::resolve_from(None, Some(env.path())).unwrap();
        assert_eq!(config.width, 20);

        let config = ConverterConfig::resolve_from(None, None).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_with_colors_overrides_palette() {
        let mut hex = vga_hex();
        hex.swap(0, 15);
        let config = ConverterConfig::default().with_colors(&hex.join(", "));

        let palette = config.palette().unwrap();
        assert_eq!(palette.color(0), Rgb::new(255, 255, 255));
        assert_eq!(palette.color(15), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_palette_wrong_size_is_error() {
        let config = ConverterConfig::default().with_colors("#000000,#FFFFFF");
        assert!(matches!(
            config.palette(),
            Err(ConfigError::Palette(PaletteError::WrongSize {
                expected: 16,
                actual: 2
            }))
        ));
    }

    #[test]
    fn test_zero_dimension_is_error() {
        let config = ConverterConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.frame_spec(),
            Err(ConfigError::Dimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_parse_color_list() {
        assert_eq!(
            parse_color_list(" #000 ,#FFF,, #F00 "),
            vec![
                "#000".to_string(),
                "#FFF".to_string(),
                String::new(),
                "#F00".to_string()
            ]
        );
        assert!(parse_color_list("").is_empty());
        assert!(parse_color_list("  ").is_empty());
    }

    #[test]
    fn test_blank_color_entry_is_reported() {
        // 16 valid colors plus a blank field at position 1
        let mut hex = vga_hex();
        hex.insert(1, String::new());
        let config = ConverterConfig::default().with_colors(&hex.join(","));

        assert!(matches!(
            config.palette(),
            Err(ConfigError::Palette(PaletteError::ParseColor { index: 1, .. }))
        ));
    }

    #[test]
    fn test_filter_mapping() {
        assert_eq!(ResizeFilter::Bilinear.filter_type(), FilterType::Triangle);
        assert_eq!(ResizeFilter::Bicubic.filter_type(), FilterType::CatmullRom);
        assert_eq!(ResizeFilter::Nearest.filter_type(), FilterType::Nearest);
    }
}
