//! # logoprep
//!
//! A library for preparing logo image assets: stripping near-black backgrounds
//! to transparency, cropping to visible content (optionally discarding small
//! stray artifacts via connected-component analysis), and stamping the result
//! onto a circular favicon backdrop.
//!
//! All operations work on in-memory RGBA rasters; the alpha channel is the
//! sole segmentation signal.
//!
//! ## Example
//!
//! ```no_run
//! use logoprep::ops::background::{remove_background, BackgroundConfig};
//! use logoprep::ops::crop::{crop_to_largest, LargestCropConfig};
//!
//! # fn main() -> logoprep::Result<()> {
//! let img = logoprep::image::load_rgba("logo.png")?;
//! let transparent = remove_background(&img, &BackgroundConfig::default())?;
//!
//! if let Some(cropped) = crop_to_largest(&transparent, &LargestCropConfig::default())? {
//!     logoprep::image::save_rgba(&cropped.image, "logo_trimmed.png")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod ops;
pub mod segment;

pub use error::{Error, Result};
pub use segment::{label_components, BBox, Region};
