//! Content-aware cropping.
//!
//! Three policies over the same segmentation primitive: a tight crop to any
//! visible pixel, a crop to the single largest connected component, and a
//! crop to the union of all components above a size floor. The latter two
//! exist to discard small stray artifacts left behind by background removal.

use image::{imageops, RgbaImage};

use crate::error::Result;
use crate::image::ALPHA_CHANNEL;
use crate::segment::{
    alpha_mask, label_components, largest_region, regions_above, union_bbox, BBox, Region,
};

/// Rectangle actually cropped from the source image, in source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Outcome of a crop operation.
#[derive(Debug, Clone)]
pub struct CropResult {
    /// The cropped raster.
    pub image: RgbaImage,
    /// Where the crop was taken from the source.
    pub rect: CropRect,
}

/// Configuration for the largest-component crop.
#[derive(Debug, Clone)]
pub struct LargestCropConfig {
    /// Alpha values strictly above this count as visible.
    pub alpha_threshold: u8,
    /// Pixels of padding added around the component's bounding box,
    /// clamped to the image bounds.
    pub padding: u32,
}

impl Default for LargestCropConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 5,
            padding: 10,
        }
    }
}

/// Configuration for the filtered-component crop.
#[derive(Debug, Clone)]
pub struct FilteredCropConfig {
    /// Alpha values strictly above this count as visible.
    pub alpha_threshold: u8,
    /// Components with pixel count strictly above this are kept; the rest
    /// are treated as artifacts and discarded.
    pub min_pixels: usize,
    /// Pixels of padding added around the union bounding box, clamped to
    /// the image bounds.
    pub padding: u32,
}

impl Default for FilteredCropConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 5,
            min_pixels: 500,
            padding: 5,
        }
    }
}

/// Outcome of the filtered-component crop, including which components were
/// kept and which were discarded as artifacts.
#[derive(Debug, Clone)]
pub struct FilteredCropResult {
    pub image: RgbaImage,
    pub rect: CropRect,
    pub kept: Vec<Region>,
    pub discarded: Vec<Region>,
}

/// Crop to the tight bounding box of all pixels with non-zero alpha.
///
/// No segmentation and no padding. Returns `None` when the image is fully
/// transparent (nothing to crop).
#[must_use]
pub fn crop_to_content(img: &RgbaImage) -> Option<CropResult> {
    let mut bbox: Option<BBox> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[ALPHA_CHANNEL] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => BBox {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            },
            Some(b) => b.union(&BBox {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            }),
        });
    }

    Some(crop_bbox(img, &bbox?, 0))
}

/// Crop to the largest 4-connected visible component plus padding.
///
/// Small detached artifacts are dropped entirely. Returns `Ok(None)` when
/// the image is fully transparent.
///
/// # Errors
///
/// Currently infallible beyond the `Result` surface shared by all ops.
pub fn crop_to_largest(
    img: &RgbaImage,
    config: &LargestCropConfig,
) -> Result<Option<CropResult>> {
    let mask = alpha_mask(img, config.alpha_threshold);
    let regions = label_components(&mask);

    let Some(largest) = largest_region(&regions) else {
        return Ok(None);
    };

    tracing::info!(
        "Found {} components, keeping largest (label {}, {} pixels)",
        regions.len(),
        largest.label,
        largest.pixel_count
    );

    Ok(Some(crop_bbox(img, &largest.bbox, config.padding)))
}

/// Crop to the union of all visible components above the size floor, plus
/// padding.
///
/// Returns `Ok(None)` when the image is fully transparent or every
/// component falls below the floor.
///
/// # Errors
///
/// Currently infallible beyond the `Result` surface shared by all ops.
pub fn crop_to_filtered(
    img: &RgbaImage,
    config: &FilteredCropConfig,
) -> Result<Option<FilteredCropResult>> {
    let mask = alpha_mask(img, config.alpha_threshold);
    let regions = label_components(&mask);

    if regions.is_empty() {
        return Ok(None);
    }

    let kept: Vec<Region> = regions_above(&regions, config.min_pixels)
        .into_iter()
        .copied()
        .collect();
    let discarded: Vec<Region> = regions
        .iter()
        .filter(|r| r.pixel_count <= config.min_pixels)
        .copied()
        .collect();

    for r in &kept {
        tracing::info!(
            "Keeping component {} ({} pixels, {}x{})",
            r.label,
            r.pixel_count,
            r.bbox.width(),
            r.bbox.height()
        );
    }
    for r in &discarded {
        tracing::info!("Discarding artifact {} ({} pixels)", r.label, r.pixel_count);
    }

    let Some(bbox) = union_bbox(kept.iter()) else {
        return Ok(None);
    };

    let CropResult { image, rect } = crop_bbox(img, &bbox, config.padding);
    Ok(Some(FilteredCropResult {
        image,
        rect,
        kept,
        discarded,
    }))
}

/// Crop `img` to `bbox` expanded by `padding`, clamped to the image bounds.
fn crop_bbox(img: &RgbaImage, bbox: &BBox, padding: u32) -> CropResult {
    let x0 = bbox.min_x.saturating_sub(padding);
    let y0 = bbox.min_y.saturating_sub(padding);
    let x1 = (bbox.max_x + 1).saturating_add(padding).min(img.width());
    let y1 = (bbox.max_y + 1).saturating_add(padding).min(img.height());

    let rect = CropRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    };

    let image = imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image();
    CropResult { image, rect }
}
