//! Grid sampling.
//!
//! Partitions an image into a rows x cols lattice of uniform blocks and
//! averages the RGB channels of each block. Alpha is ignored: transparent
//! pixels contribute their stored RGB values.

mod lattice;
mod source;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{Colour, Grid};

pub use lattice::{Block, Lattice};
pub use source::PixelSource;

/// What to do when the grid is finer than the image and a block is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyBlockPolicy {
    /// Sample 1px blocks, clamping origins into the image.
    #[default]
    Clamp,
    /// Fail with [`GridError::EmptySampleBlock`].
    Reject,
}

/// Averages image blocks into grid colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    pub policy: EmptyBlockPolicy,
}

impl Sampler {
    pub fn new(policy: EmptyBlockPolicy) -> Self {
        Self { policy }
    }

    /// Sample `image` into a `rows x cols` grid, emitted in row-major order.
    ///
    /// Fails with [`GridError::InvalidDimensions`] when rows, cols or either
    /// image side is zero.
    pub fn sample<S>(&self, image: &S, rows: u32, cols: u32) -> Result<Grid>
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = image.dimensions();
        let lattice = Lattice::new(width, height, rows, cols)?;

        if lattice.is_degenerate() && self.policy == EmptyBlockPolicy::Reject {
            return Err(GridError::EmptySampleBlock {
                rows,
                cols,
                width,
                height,
            });
        }

        let mut buffer = Vec::new();
        let mut colours = Vec::with_capacity(rows as usize * cols as usize);

        for row in 0..rows {
            for col in 0..cols {
                let block = lattice.clamped_block(row, col);
                buffer.clear();
                image.read_block(block.x, block.y, block.width, block.height, &mut buffer);
                colours.push(average_rgb(&buffer));
            }
        }

        Ok(Grid::from_row_major(rows, cols, colours))
    }
}

/// Sample with the default [`EmptyBlockPolicy::Clamp`] policy.
pub fn sample<S>(image: &S, rows: u32, cols: u32) -> Result<Grid>
where
    S: PixelSource + ?Sized,
{
    Sampler::default().sample(image, rows, cols)
}

/// Per-channel mean of RGBA bytes, rounded half away from zero.
///
/// An empty slice averages to black.
fn average_rgb(rgba: &[u8]) -> Colour {
    let n = (rgba.len() / 4) as u64;
    if n == 0 {
        return Colour::BLACK;
    }

    let mut sums = [0u64; 3];
    for px in rgba.chunks_exact(4) {
        sums[0] += px[0] as u64;
        sums[1] += px[1] as u64;
        sums[2] += px[2] as u64;
    }

    // (2 * sum + n) / (2 * n) == round(sum / n) for non-negative sums
    let mean = |sum: u64| ((2 * sum + n) / (2 * n)) as u8;
    Colour::rgb(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::collections::HashSet;

    /// 2x2 quadrants of distinct colours over a `size x size` image.
    fn quadrants(size: u32) -> RgbaImage {
        let half = size / 2;
        RgbaImage::from_fn(size, size, |x, y| match (x < half, y < half) {
            (true, true) => Rgba([255, 0, 0, 255]),
            (false, true) => Rgba([0, 255, 0, 255]),
            (true, false) => Rgba([0, 0, 255, 255]),
            (false, false) => Rgba([255, 255, 255, 255]),
        })
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (1 + 2) / 2 = 1.5 -> 2
        let px = [1, 0, 0, 255, 2, 0, 0, 255];
        assert_eq!(average_rgb(&px), Colour::rgb(2, 0, 0));
    }

    #[test]
    fn test_average_rounds_down_below_half() {
        // (0 + 0 + 1) / 3 = 0.33 -> 0, (2 + 2 + 1) / 3 = 1.67 -> 2
        let px = [0, 2, 0, 0, 0, 2, 0, 0, 1, 1, 0, 0];
        assert_eq!(average_rgb(&px), Colour::rgb(0, 2, 0));
    }

    #[test]
    fn test_average_empty_is_black() {
        assert_eq!(average_rgb(&[]), Colour::BLACK);
    }

    #[test]
    fn test_sample_quadrants() {
        let grid = sample(&quadrants(8), 2, 2).unwrap();

        assert_eq!(grid.get(0, 0).unwrap().colour, Colour::rgb(255, 0, 0));
        assert_eq!(grid.get(0, 1).unwrap().colour, Colour::rgb(0, 255, 0));
        assert_eq!(grid.get(1, 0).unwrap().colour, Colour::rgb(0, 0, 255));
        assert_eq!(grid.get(1, 1).unwrap().colour, Colour::WHITE);
    }

    #[test]
    fn test_sample_averages_mixed_block() {
        let grid = sample(&quadrants(8), 1, 1).unwrap();
        // r: (255 + 0 + 0 + 255) / 4, g: (0 + 255 + 0 + 255) / 4, b: (0 + 0 + 255 + 255) / 4
        assert_eq!(grid.get(0, 0).unwrap().colour, Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_sample_covers_every_position_once() {
        let img = RgbaImage::from_pixel(37, 23, Rgba([1, 2, 3, 255]));
        for (rows, cols) in [(1, 1), (2, 5), (7, 3), (23, 37)] {
            let grid = sample(&img, rows, cols).unwrap();
            assert_eq!(grid.len(), (rows * cols) as usize);

            let seen: HashSet<(u32, u32)> = grid.cells().iter().map(|c| (c.row, c.col)).collect();
            assert_eq!(seen.len(), grid.len());
            assert!(seen.iter().all(|&(r, c)| r < rows && c < cols));
        }
    }

    #[test]
    fn test_uniform_input_has_no_rounding_drift() {
        let img = RgbaImage::from_pixel(17, 11, Rgba([13, 200, 77, 255]));
        let grid = sample(&img, 4, 5).unwrap();
        assert!(grid.cells().iter().all(|c| c.colour == Colour::rgb(13, 200, 77)));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([100, 100, 100, 0])
            } else {
                Rgba([200, 200, 200, 255])
            }
        });
        let grid = sample(&img, 1, 1).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().colour, Colour::rgb(150, 150, 150));
    }

    #[test]
    fn test_trailing_strip_never_sampled() {
        // 10x10 at 3x3 uses 3px cells; column 9 and row 9 are poisoned
        let img = RgbaImage::from_fn(10, 10, |x, y| {
            if x == 9 || y == 9 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let grid = sample(&img, 3, 3).unwrap();
        assert!(grid.cells().iter().all(|c| c.colour == Colour::BLACK));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let img = RgbaImage::from_fn(31, 19, |x, y| Rgba([(x * 7) as u8, (y * 13) as u8, (x ^ y) as u8, 255]));
        let a = sample(&img, 5, 6).unwrap();
        let b = sample(&img, 5, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_dynamic_image() {
        let dynamic = DynamicImage::ImageRgba8(quadrants(4));
        let grid = sample(&dynamic, 2, 2).unwrap();
        assert_eq!(grid.get(1, 1).unwrap().colour, Colour::WHITE);
    }

    #[test]
    fn test_zero_rows_is_invalid() {
        let img = quadrants(4);
        assert!(matches!(
            sample(&img, 0, 2),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_degenerate_clamp_repeats_edge_pixels() {
        // 2x1 image sampled into 1x4: cells 2 and 3 repeat the last column
        let img = RgbaImage::from_fn(2, 1, |x, _| Rgba([x as u8 * 100, 0, 0, 255]));
        let grid = sample(&img, 1, 4).unwrap();

        let reds: Vec<u8> = grid.row_major().iter().map(|c| c.colour.r).collect();
        assert_eq!(reds, vec![0, 100, 100, 100]);
    }

    #[test]
    fn test_degenerate_reject() {
        let img = quadrants(4);
        let sampler = Sampler::new(EmptyBlockPolicy::Reject);

        assert!(matches!(
            sampler.sample(&img, 8, 2),
            Err(GridError::EmptySampleBlock { rows: 8, cols: 2, width: 4, height: 4 })
        ));
        assert!(sampler.sample(&img, 4, 4).is_ok());
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let policy: EmptyBlockPolicy = serde_yaml::from_str("reject").unwrap();
        assert_eq!(policy, EmptyBlockPolicy::Reject);
    }
}
