//! Core value types for imgrid.

mod colour;
mod grid;
mod options;

pub use colour::Colour;
pub use grid::{Grid, GridCell};
pub use options::{ExportOptions, DEFAULT_CELL_SIZE, DEFAULT_GAP};
