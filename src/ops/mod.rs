//! Logo preparation operations.
//!
//! One submodule per transformation: background removal, content-aware
//! cropping, component analysis, and favicon composition. Each operation
//! takes an in-memory RGBA raster plus a validated config struct and leaves
//! file I/O to the caller.

pub mod analyze;
pub mod background;
pub mod crop;
pub mod favicon;
