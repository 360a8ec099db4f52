//! Image saving utilities.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Save an RGBA raster to disk.
///
/// The output format is inferred from the file extension; PNG is the
/// expected case since it is the only format that round-trips the alpha
/// channel losslessly.
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn save_rgba<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_unwritable_path_is_save_error() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));

        let err = save_rgba(&img, "does/not/exist/out.png").unwrap_err();
        assert!(matches!(err, Error::ImageSave { .. }));
    }
}
