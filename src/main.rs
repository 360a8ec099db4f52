//! logoprep CLI - prepare logo image assets.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logoprep::image::{load_rgba, save_rgba};
use logoprep::ops::analyze::analyze_components;
use logoprep::ops::background::{remove_background, BackgroundConfig};
use logoprep::ops::crop::{
    crop_to_content, crop_to_filtered, crop_to_largest, FilteredCropConfig, LargestCropConfig,
};
use logoprep::ops::favicon::{compose_favicon, FaviconConfig};

/// Prepare logo image assets: background removal, content-aware cropping,
/// and circular favicon generation.
#[derive(Parser, Debug)]
#[command(name = "logoprep")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recolor near-black pixels to fully transparent.
    RemoveBg {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// RGB channels each below this value count as background.
        #[arg(short, long, default_value = "50", value_name = "INT")]
        threshold: u8,
    },

    /// Crop to the tight bounding box of all visible pixels.
    Crop {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Crop to the largest connected component, discarding stray artifacts.
    CropLargest {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Alpha values above this count as visible.
        #[arg(short, long, default_value = "5", value_name = "INT")]
        alpha_threshold: u8,

        /// Padding around the kept bounding box, in pixels.
        #[arg(short, long, default_value = "10", value_name = "INT")]
        padding: u32,
    },

    /// Crop to the union of all components above a size floor.
    CropComponents {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Alpha values above this count as visible.
        #[arg(short, long, default_value = "5", value_name = "INT")]
        alpha_threshold: u8,

        /// Components with at most this many pixels are discarded.
        #[arg(short, long, default_value = "500", value_name = "INT")]
        min_pixels: usize,

        /// Padding around the union bounding box, in pixels.
        #[arg(short, long, default_value = "5", value_name = "INT")]
        padding: u32,
    },

    /// Report all connected components sorted by size, without cropping.
    Analyze {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Alpha values above this count as visible.
        #[arg(short, long, default_value = "5", value_name = "INT")]
        alpha_threshold: u8,
    },

    /// Stamp a pre-cropped logo onto a circular backdrop favicon.
    Favicon {
        /// Input image path (already cropped logo).
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Circle diameter as a multiple of the logo's longest side.
        #[arg(long, default_value = "1.4", value_name = "FLOAT")]
        scale: f32,

        /// Side length of the square output.
        #[arg(long, default_value = "256", value_name = "INT")]
        size: u32,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("logoprep={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::RemoveBg {
            input,
            output,
            threshold,
        } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            let config = BackgroundConfig {
                threshold: *threshold,
            };
            let result = remove_background(&img, &config)?;
            save_rgba(&result, output).context("Failed to save output image")?;
            println!("Saved transparent logo to {}", output.display());
        }

        Command::Crop { input, output } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            match crop_to_content(&img) {
                Some(result) => {
                    save_rgba(&result.image, output).context("Failed to save output image")?;
                    println!("Cropped logo saved to {}", output.display());
                    println!(
                        "Original size: {}x{}, new size: {}x{}",
                        img.width(),
                        img.height(),
                        result.rect.width,
                        result.rect.height
                    );
                }
                None => println!("Image is fully transparent, nothing to crop."),
            }
        }

        Command::CropLargest {
            input,
            output,
            alpha_threshold,
            padding,
        } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            let config = LargestCropConfig {
                alpha_threshold: *alpha_threshold,
                padding: *padding,
            };
            match crop_to_largest(&img, &config)? {
                Some(result) => {
                    save_rgba(&result.image, output).context("Failed to save output image")?;
                    println!("Smart-cropped logo saved to {}", output.display());
                    println!(
                        "Cropped region: left={}, top={}, right={}, bottom={}",
                        result.rect.x,
                        result.rect.y,
                        result.rect.x + result.rect.width,
                        result.rect.y + result.rect.height
                    );
                    println!("New size: {}x{}", result.rect.width, result.rect.height);
                }
                None => println!("Image appears fully transparent."),
            }
        }

        Command::CropComponents {
            input,
            output,
            alpha_threshold,
            min_pixels,
            padding,
        } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            let config = FilteredCropConfig {
                alpha_threshold: *alpha_threshold,
                min_pixels: *min_pixels,
                padding: *padding,
            };
            match crop_to_filtered(&img, &config)? {
                Some(result) => {
                    save_rgba(&result.image, output).context("Failed to save output image")?;
                    println!("Final smart crop saved to {}", output.display());
                    println!(
                        "Kept {} component(s), discarded {} artifact(s)",
                        result.kept.len(),
                        result.discarded.len()
                    );
                    println!("New size: {}x{}", result.rect.width, result.rect.height);
                }
                None => println!("No logo components above the size floor."),
            }
        }

        Command::Analyze {
            input,
            alpha_threshold,
        } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            println!(
                "Analyzing {} ({}x{})...",
                input.display(),
                img.width(),
                img.height()
            );

            let regions = analyze_components(&img, *alpha_threshold);
            if regions.is_empty() {
                println!("Image appears fully transparent.");
                return Ok(());
            }

            println!("Found {} component(s).", regions.len());
            for (i, r) in regions.iter().enumerate() {
                println!(
                    "Component {}: size {} px | bbox ({}, {})-({}, {}) | dims {}x{}",
                    i + 1,
                    r.pixel_count,
                    r.bbox.min_x,
                    r.bbox.min_y,
                    r.bbox.max_x,
                    r.bbox.max_y,
                    r.bbox.width(),
                    r.bbox.height()
                );
            }
        }

        Command::Favicon {
            input,
            output,
            scale,
            size,
        } => {
            let img = load_rgba(input).context("Failed to load input image")?;
            let config = FaviconConfig {
                scale: *scale,
                size: *size,
                ..FaviconConfig::default()
            };
            let favicon = compose_favicon(&img, &config)?;
            save_rgba(&favicon, output).context("Failed to save output image")?;
            println!("Created circular icon at {}", output.display());
        }
    }

    Ok(())
}
