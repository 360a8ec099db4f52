//! Binary mask extraction from the alpha channel.

use image::RgbaImage;
use ndarray::Array2;

use crate::image::ALPHA_CHANNEL;

/// Build a boolean mask of pixels whose alpha exceeds `threshold`.
///
/// The mask is indexed `[y, x]` (row-major), matching raster scan order.
/// A threshold of 0 selects every pixel with any visible alpha at all;
/// small positive thresholds drop near-transparent fringe pixels.
#[must_use]
pub fn alpha_mask(img: &RgbaImage, threshold: u8) -> Array2<bool> {
    let (width, height) = img.dimensions();
    let mut mask = Array2::from_elem((height as usize, width as usize), false);

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[ALPHA_CHANNEL] > threshold {
            mask[[y as usize, x as usize]] = true;
        }
    }

    mask
}
