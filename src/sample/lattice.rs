//! Cell geometry for a rows x cols lattice over an image.
//!
//! Cells are uniform: `cell_width = width / cols` and
//! `cell_height = height / rows`, truncating. The remainder strip on the
//! right and bottom edges is never sampled.

use crate::error::{GridError, Result};

/// A rectangular pixel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Block {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Layout of a rows x cols grid over a `width x height` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    pub rows: u32,
    pub cols: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Lattice {
    /// Compute the lattice. All four inputs must be non-zero.
    pub fn new(image_width: u32, image_height: u32, rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions {
                message: format!("Grid must have at least one row and column, got {}x{}", rows, cols),
                help: Some("Use rows and cols of 1 or more".to_string()),
            });
        }
        if image_width == 0 || image_height == 0 {
            return Err(GridError::InvalidDimensions {
                message: format!("Image has zero dimensions ({}x{})", image_width, image_height),
                help: Some("Input image must have non-zero width and height".to_string()),
            });
        }

        Ok(Self {
            rows,
            cols,
            image_width,
            image_height,
            cell_width: image_width / cols,
            cell_height: image_height / rows,
        })
    }

    /// True when the grid is finer than the image in either direction.
    pub fn is_degenerate(&self) -> bool {
        self.block(0, 0).area() == 0
    }

    /// Pixel columns on the right edge that no cell covers.
    pub fn ignored_columns(&self) -> u32 {
        self.image_width - self.cols * self.cell_width
    }

    /// Pixel rows on the bottom edge that no cell covers.
    pub fn ignored_rows(&self) -> u32 {
        self.image_height - self.rows * self.cell_height
    }

    /// The sampled block for `(row, col)`. May be empty on a degenerate lattice.
    pub fn block(&self, row: u32, col: u32) -> Block {
        Block {
            x: col * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Like [`Lattice::block`], but never empty.
    ///
    /// A zero cell dimension is widened to 1 pixel and the origin is clamped
    /// into the image, so cells past the edge repeat the last pixel column
    /// or row.
    pub fn clamped_block(&self, row: u32, col: u32) -> Block {
        let width = self.cell_width.max(1);
        let height = self.cell_height.max(1);
        Block {
            x: (col * width).min(self.image_width - 1),
            y: (row * height).min(self.image_height - 1),
            width,
            height,
        }
    }
}
