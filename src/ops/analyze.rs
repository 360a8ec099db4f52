//! Component analysis reporting.

use image::RgbaImage;

use crate::segment::{alpha_mask, label_components, Region};

/// Label all visible components and return them sorted by descending pixel
/// count, for manual inspection. Takes no cropping action.
///
/// An empty vector means the image is fully transparent.
#[must_use]
pub fn analyze_components(img: &RgbaImage, alpha_threshold: u8) -> Vec<Region> {
    let mask = alpha_mask(img, alpha_threshold);
    let mut regions = label_components(&mask);
    regions.sort_by(|a, b| b.pixel_count.cmp(&a.pixel_count));
    regions
}
