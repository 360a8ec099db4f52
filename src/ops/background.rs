//! Near-black background removal.

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Configuration for background removal.
#[derive(Debug, Clone)]
pub struct BackgroundConfig {
    /// Pixels with R, G, and B each strictly below this value become
    /// transparent.
    pub threshold: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { threshold: 50 }
    }
}

impl BackgroundConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is zero (which would match nothing).
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Replace every near-black pixel with fully transparent white.
///
/// A pixel qualifies when each of its R, G, and B channels is strictly below
/// the configured threshold; its original alpha is ignored. All other pixels
/// pass through unchanged. Pure per-pixel map with no neighbor dependence.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn remove_background(img: &RgbaImage, config: &BackgroundConfig) -> Result<RgbaImage> {
    config.validate()?;

    let mut output = RgbaImage::new(img.width(), img.height());
    let mut cleared = 0u64;

    for (x, y, pixel) in img.enumerate_pixels() {
        let near_black = pixel[0] < config.threshold
            && pixel[1] < config.threshold
            && pixel[2] < config.threshold;

        if near_black {
            output.put_pixel(x, y, Rgba([255, 255, 255, 0]));
            cleared += 1;
        } else {
            output.put_pixel(x, y, *pixel);
        }
    }

    tracing::debug!(
        "Cleared {cleared} of {} pixels",
        u64::from(img.width()) * u64::from(img.height())
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_black_becomes_transparent_white() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([49, 49, 49, 255]));
        img.put_pixel(1, 0, Rgba([50, 49, 49, 255]));

        let out = remove_background(&img, &BackgroundConfig::default()).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([50, 49, 49, 255]));
    }

    #[test]
    fn test_threshold_is_strict_per_channel() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 200, 0, 255]));
        img.put_pixel(2, 0, Rgba([200, 200, 200, 255]));

        let config = BackgroundConfig { threshold: 1 };
        let out = remove_background(&img, &config).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([0, 200, 0, 255]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let img = RgbaImage::new(1, 1);
        let config = BackgroundConfig { threshold: 0 };
        let err = remove_background(&img, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn test_already_transparent_dark_pixel_is_normalized() {
        // Alpha is ignored by the predicate; a dark translucent pixel is
        // rewritten to the canonical transparent white.
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([10, 10, 10, 128]));

        let out = remove_background(&img, &BackgroundConfig::default()).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }
}
