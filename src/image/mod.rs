//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_rgba;
pub use save::save_rgba;

/// Index of the alpha channel within an RGBA pixel.
pub const ALPHA_CHANNEL: usize = 3;
