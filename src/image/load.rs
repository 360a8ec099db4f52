//! Image loading utilities.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Load an image from disk as an RGBA raster.
///
/// The image is decoded (format inferred from content) and converted to
/// 8-bit RGBA; any missing alpha channel becomes fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.to_rgba8())
}
