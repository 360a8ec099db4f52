//! 4-connected component labeling over a boolean mask.

use ndarray::Array2;

/// Axis-aligned bounding box with inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BBox {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// A maximal 4-connected region of true cells in a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Label in discovery order, starting at 1. Bookkeeping only.
    pub label: u32,
    /// Number of member cells.
    pub pixel_count: usize,
    /// Minimal bounding box of the member cells.
    pub bbox: BBox,
}

/// Label all maximal 4-connected regions of true cells in `mask`.
///
/// Seeds an iterative depth-first traversal (explicit stack, so deeply
/// nested regions cannot overflow the call stack) at each unvisited true
/// cell in raster scan order. Neighbors are checked up, down, left, right;
/// the order has no observable effect on the result.
///
/// Returns one [`Region`] per component, in discovery order. An all-false
/// mask yields an empty vector.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn label_components(mask: &Array2<bool>) -> Vec<Region> {
    let (height, width) = mask.dim();
    let mut visited = Array2::from_elem((height, width), false);
    let mut regions = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !mask[[y, x]] || visited[[y, x]] {
                continue;
            }

            let label = regions.len() as u32 + 1;
            let mut bbox = BBox {
                min_x: x as u32,
                min_y: y as u32,
                max_x: x as u32,
                max_y: y as u32,
            };
            let mut pixel_count = 0;

            visited[[y, x]] = true;
            stack.push((y, x));

            while let Some((cy, cx)) = stack.pop() {
                pixel_count += 1;
                bbox.include(cx as u32, cy as u32);

                for (ny, nx) in neighbors(cy, cx, height, width) {
                    if mask[[ny, nx]] && !visited[[ny, nx]] {
                        visited[[ny, nx]] = true;
                        stack.push((ny, nx));
                    }
                }
            }

            regions.push(Region {
                label,
                pixel_count,
                bbox,
            });
        }
    }

    regions
}

/// In-bounds 4-neighbors of a cell, in up/down/left/right order.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn neighbors(
    y: usize,
    x: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    OFFSETS.into_iter().filter_map(move |(dy, dx)| {
        let ny = y as i64 + dy;
        let nx = x as i64 + dx;
        if ny >= 0 && (ny as usize) < height && nx >= 0 && (nx as usize) < width {
            Some((ny as usize, nx as usize))
        } else {
            None
        }
    })
}

/// The region with the greatest pixel count, if any.
///
/// Ties are broken by discovery order (first wins), matching raster scan.
#[must_use]
pub fn largest_region(regions: &[Region]) -> Option<&Region> {
    regions.iter().max_by(|a, b| {
        a.pixel_count
            .cmp(&b.pixel_count)
            .then(b.label.cmp(&a.label))
    })
}

/// Regions with pixel count strictly greater than `min_pixels`.
#[must_use]
pub fn regions_above(regions: &[Region], min_pixels: usize) -> Vec<&Region> {
    regions
        .iter()
        .filter(|r| r.pixel_count > min_pixels)
        .collect()
}

/// Union of the bounding boxes of `regions`, if non-empty.
#[must_use]
pub fn union_bbox<'a, I>(regions: I) -> Option<BBox>
where
    I: IntoIterator<Item = &'a Region>,
{
    regions
        .into_iter()
        .map(|r| r.bbox)
        .reduce(|acc, b| acc.union(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&[u8]]) -> Array2<bool> {
        let height = rows.len();
        let width = rows[0].len();
        Array2::from_shape_fn((height, width), |(y, x)| rows[y][x] != 0)
    }

    #[test]
    fn test_all_false_yields_no_regions() {
        let mask = Array2::from_elem((4, 4), false);
        assert!(label_components(&mask).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let mut mask = Array2::from_elem((3, 3), false);
        mask[[1, 2]] = true;

        let regions = label_components(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].pixel_count, 1);
        assert_eq!(
            regions[0].bbox,
            BBox {
                min_x: 2,
                min_y: 1,
                max_x: 2,
                max_y: 1
            }
        );
        assert_eq!(regions[0].bbox.width(), 1);
        assert_eq!(regions[0].bbox.height(), 1);
    }

    #[test]
    fn test_l_shape_and_isolated_cell() {
        // L-shape at rows 0-2 column 0 plus row 2 columns 0-2, and an
        // isolated cell at (4, 4).
        let mask = mask_from_rows(&[
            &[1, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0],
            &[1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 1],
        ]);

        let regions = label_components(&mask);
        assert_eq!(regions.len(), 2);

        assert_eq!(regions[0].pixel_count, 5);
        assert_eq!(
            regions[0].bbox,
            BBox {
                min_x: 0,
                min_y: 0,
                max_x: 2,
                max_y: 2
            }
        );

        assert_eq!(regions[1].pixel_count, 1);
        assert_eq!(
            regions[1].bbox,
            BBox {
                min_x: 4,
                min_y: 4,
                max_x: 4,
                max_y: 4
            }
        );
    }

    #[test]
    fn test_diagonal_cells_are_separate_regions() {
        // 4-connectivity: diagonal adjacency does not connect.
        let mask = mask_from_rows(&[&[1, 0], &[0, 1]]);
        let regions = label_components(&mask);
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.pixel_count == 1));
    }

    #[test]
    fn test_counts_partition_true_cells() {
        let mask = mask_from_rows(&[
            &[1, 1, 0, 1],
            &[0, 1, 0, 1],
            &[0, 0, 0, 0],
            &[1, 0, 1, 1],
        ]);

        let total_true = mask.iter().filter(|&&v| v).count();
        let regions = label_components(&mask);
        let summed: usize = regions.iter().map(|r| r.pixel_count).sum();
        assert_eq!(summed, total_true);
        assert_eq!(regions.len(), 4);
    }

    #[test]
    fn test_labels_are_sequential_from_one() {
        let mask = mask_from_rows(&[&[1, 0, 1, 0, 1]]);
        let regions = label_components(&mask);
        let labels: Vec<u32> = regions.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_snake_region_deeper_than_recursion_would_allow() {
        // A single serpentine region spanning the whole mask exercises the
        // explicit stack with a long connected path.
        let size = 64;
        let mask = Array2::from_shape_fn((size, size), |(y, x)| {
            if y % 2 == 0 {
                true
            } else {
                // Alternate the connecting column per row pair.
                if (y / 2) % 2 == 0 {
                    x == size - 1
                } else {
                    x == 0
                }
            }
        });

        let regions = label_components(&mask);
        assert_eq!(regions.len(), 1);

        let total_true = mask.iter().filter(|&&v| v).count();
        assert_eq!(regions[0].pixel_count, total_true);
    }

    #[test]
    fn test_largest_region_prefers_first_on_tie() {
        let mask = mask_from_rows(&[&[1, 1, 0, 1, 1]]);
        let regions = label_components(&mask);
        let largest = largest_region(&regions).unwrap();
        assert_eq!(largest.label, 1);
    }

    #[test]
    fn test_regions_above_is_strict() {
        let mask = mask_from_rows(&[&[1, 1, 1, 0, 1, 1, 0, 1]]);
        let regions = label_components(&mask);

        let kept = regions_above(&regions, 2);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].pixel_count, 3);
    }

    #[test]
    fn test_union_bbox() {
        let mask = mask_from_rows(&[
            &[1, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 1],
        ]);
        let regions = label_components(&mask);
        let union = union_bbox(regions.iter()).unwrap();
        assert_eq!(
            union,
            BBox {
                min_x: 0,
                min_y: 0,
                max_x: 3,
                max_y: 2
            }
        );
        assert!(union_bbox(std::iter::empty::<&Region>()).is_none());
    }
}
