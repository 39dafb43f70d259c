//! Grid cells and the validated grid collection.
//!
//! A [`Grid`] always holds exactly one cell per `(row, col)` pair of its
//! `rows x cols` lattice. Cells may be stored in any order; consumers that
//! care about order go through [`Grid::row_major`].

use serde::Serialize;

use crate::error::{GridError, Result};

use super::Colour;

/// One lattice position and its averaged colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
    pub colour: Colour,
}

impl GridCell {
    pub const fn new(row: u32, col: u32, colour: Colour) -> Self {
        Self { row, col, colour }
    }
}

/// A complete `rows x cols` set of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<GridCell>,
    /// `positions[row * cols + col]` is the index of that cell in `cells`.
    positions: Vec<usize>,
}

impl Grid {
    /// A grid with no cells.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Build a grid from cells in any order.
    ///
    /// Fails unless the `(row, col)` pairs are exactly `[0, rows) x [0, cols)`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<GridCell>) -> Result<Self> {
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::InvalidDimensions {
                message: format!(
                    "{}x{} grid needs {} cells, got {}",
                    rows,
                    cols,
                    expected,
                    cells.len()
                ),
                help: None,
            });
        }

        let mut positions = vec![usize::MAX; expected];
        for (i, cell) in cells.iter().enumerate() {
            if cell.row >= rows || cell.col >= cols {
                return Err(GridError::InvalidDimensions {
                    message: format!(
                        "Cell ({}, {}) is outside the {}x{} grid",
                        cell.row, cell.col, rows, cols
                    ),
                    help: None,
                });
            }
            let slot = &mut positions[cell.row as usize * cols as usize + cell.col as usize];
            if *slot != usize::MAX {
                return Err(GridError::InvalidDimensions {
                    message: format!("Duplicate cell ({}, {})", cell.row, cell.col),
                    help: None,
                });
            }
            *slot = i;
        }

        Ok(Self {
            rows,
            cols,
            cells,
            positions,
        })
    }

    /// Build a grid from colours already laid out in row-major order.
    pub(crate) fn from_row_major(rows: u32, cols: u32, colours: Vec<Colour>) -> Self {
        debug_assert_eq!(colours.len(), rows as usize * cols as usize);
        let cells = colours
            .into_iter()
            .enumerate()
            .map(|(i, colour)| {
                let i = i as u32;
                GridCell::new(i / cols, i % cols, colour)
            })
            .collect::<Vec<_>>();
        let positions = (0..cells.len()).collect();
        Self {
            rows,
            cols,
            cells,
            positions,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in storage order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Look up the cell at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = self.positions[row as usize * self.cols as usize + col as usize];
        self.cells.get(idx)
    }

    /// Cells sorted by row, then column, whatever the storage order.
    pub fn row_major(&self) -> Vec<&GridCell> {
        let mut ordered: Vec<&GridCell> = self.cells.iter().collect();
        ordered.sort_by_key(|c| (c.row, c.col));
        ordered
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
