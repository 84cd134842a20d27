use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vga_picture::models::{ConverterConfig, ResizeFilter};
use vga_picture::services::Converter;

#[derive(Parser)]
#[command(name = "vga-picture", version)]
#[command(about = "Convert an image to a VGA-compatible format.")]
struct Cli {
    /// Path to the input image file.
    image_path: PathBuf,

    /// Path to the output C header file.
    output_path: PathBuf,

    /// YAML config file (palette, width, height, filter).
    /// Falls back to $VGA_PICTURE_CONFIG.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Palette as 16 comma-separated hex RGB colors (e.g. "#000000,#2ED23E,...")
    #[arg(long)]
    colors: Option<String>,

    /// Resampling filter for the resize step
    #[arg(long, value_enum)]
    filter: Option<ResizeFilter>,

    /// Also write the quantized image as an indexed PNG
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vga_picture=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config =
        ConverterConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(ref colors) = cli.colors {
        config = config.with_colors(colors);
    }
    if let Some(filter) = cli.filter {
        config.filter = filter;
    }

    let converter = Converter::from_config(&config).context("Invalid configuration")?;
    let report = converter.convert_with_preview(
        &cli.image_path,
        &cli.output_path,
        cli.preview.as_deref(),
    )?;

    tracing::info!(
        source_width = report.source_width,
        source_height = report.source_height,
        bytes = report.bytes_written,
        "Conversion finished"
    );
    println!("Image converted and saved to {}", report.output.display());

    Ok(())
}
