//! Circular favicon composition.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::error::{Error, Result};

/// Configuration for favicon composition.
#[derive(Debug, Clone)]
pub struct FaviconConfig {
    /// Circle diameter as a multiple of the logo's longest side. Values
    /// above 1.0 leave breathing room between the logo and the circle edge.
    pub scale: f32,

    /// Side length of the square output image.
    pub size: u32,

    /// Fill color of the circular backdrop.
    pub color: Rgba<u8>,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            scale: 1.4,
            size: 256,
            color: Rgba([0, 0, 0, 255]),
        }
    }
}

impl FaviconConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale < 1.0 {
            return Err(Error::InvalidParameter {
                name: "scale".to_string(),
                reason: "must be a finite value of at least 1.0".to_string(),
            });
        }

        if self.size == 0 {
            return Err(Error::InvalidParameter {
                name: "size".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Stamp a pre-cropped logo onto a solid circular backdrop.
///
/// The circle diameter is `scale` times the logo's longest side (truncated
/// to whole pixels). The logo is alpha-composited centered on a filled
/// circle drawn on a transparent square canvas, and the composite is
/// downsampled to `size`x`size` with Lanczos3.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the logo has a zero
/// dimension.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn compose_favicon(logo: &RgbaImage, config: &FaviconConfig) -> Result<RgbaImage> {
    config.validate()?;

    let (width, height) = logo.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: "logo must have at least one visible pixel".to_string(),
        });
    }

    let max_dim = width.max(height);
    // Safe: scale >= 1.0, so the product is at least max_dim
    #[allow(clippy::cast_precision_loss)]
    let diameter = (max_dim as f32 * config.scale) as u32;

    tracing::debug!("Logo {width}x{height}, circle diameter {diameter}");

    let mut canvas = RgbaImage::new(diameter, diameter);
    let center = (diameter / 2) as i32;
    draw_filled_circle_mut(&mut canvas, (center, center), center, config.color);

    let offset_x = (diameter - width) / 2;
    let offset_y = (diameter - height) / 2;
    imageops::overlay(&mut canvas, logo, i64::from(offset_x), i64::from(offset_y));

    Ok(imageops::resize(
        &canvas,
        config.size,
        config.size,
        FilterType::Lanczos3,
    ))
}
