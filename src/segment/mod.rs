//! Alpha-channel segmentation: mask extraction and 4-connected component
//! labeling, plus the selection filters the crop operations build on.

mod components;
mod mask;

pub use components::{label_components, largest_region, regions_above, union_bbox, BBox, Region};
pub use mask::alpha_mask;
