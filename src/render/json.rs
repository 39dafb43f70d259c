//! Grid metadata export as JSON.

use std::path::Path;

use serde::Serialize;

use crate::error::{GridError, Result};
use crate::types::Grid;

/// Render the grid as pretty-printed JSON, cells in row-major order.
///
/// Returns `Ok(None)` for an empty grid.
pub fn render_json(grid: &Grid) -> Result<Option<String>> {
    if grid.is_empty() {
        return Ok(None);
    }

    let output = GridJson {
        rows: grid.rows(),
        cols: grid.cols(),
        cells: grid
            .row_major()
            .into_iter()
            .map(|c| CellJson {
                row: c.row,
                col: c.col,
                hex: c.colour.to_string(),
                rgb: c.colour.to_rgb(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).map_err(|e| GridError::Encode {
        message: format!("Failed to serialize grid: {}", e),
        help: None,
    })?;

    Ok(Some(json))
}

/// Render the grid and write it to a JSON file.
///
/// Returns `false` without touching the filesystem for an empty grid.
pub fn write_json(grid: &Grid, path: &Path) -> Result<bool> {
    let Some(json) = render_json(grid)? else {
        return Ok(false);
    };

    std::fs::write(path, json).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write grid JSON: {}", e),
    })?;

    Ok(true)
}

#[derive(Serialize)]
struct GridJson {
    rows: u32,
    cols: u32,
    cells: Vec<CellJson>,
}

#[derive(Serialize)]
struct CellJson {
    row: u32,
    col: u32,
    hex: String,
    rgb: [u8; 3],
}
