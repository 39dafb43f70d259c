//! Raster export.
//!
//! Each grid cell becomes a solid `cell_size x cell_size` square, with no
//! gaps, borders or anti-aliasing, and the canvas is encoded as PNG.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{GridError, Result};
use crate::types::Grid;

/// Paint the grid onto a canvas of `cols * cell_size` by `rows * cell_size`.
///
/// Returns `Ok(None)` for an empty grid. `cell_size` of 0 is treated as 1.
pub fn rasterize(grid: &Grid, cell_size: u32) -> Result<Option<RgbaImage>> {
    if grid.is_empty() {
        return Ok(None);
    }

    let scale = cell_size.max(1);
    let (width, height) = canvas_size(grid, scale)?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for cell in grid.cells() {
        let rgba = Rgba(cell.colour.to_rgba());
        let (ox, oy) = (cell.col * scale, cell.row * scale);

        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(ox + sx, oy + sy, rgba);
            }
        }
    }

    Ok(Some(img))
}

/// Render the grid as PNG-encoded bytes.
pub fn render_png(grid: &Grid, cell_size: u32) -> Result<Option<Vec<u8>>> {
    let Some(img) = rasterize(grid, cell_size)? else {
        return Ok(None);
    };

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| GridError::Encode {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;

    Ok(Some(bytes.into_inner()))
}

/// Render the grid and write it to a PNG file.
///
/// Returns `false` without touching the filesystem for an empty grid.
pub fn write_png(grid: &Grid, path: &Path, cell_size: u32) -> Result<bool> {
    let Some(bytes) = render_png(grid, cell_size)? else {
        return Ok(false);
    };

    std::fs::write(path, bytes).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(true)
}

/// Largest canvas the raster exporter will allocate, in RGBA bytes (1 GiB).
pub const MAX_CANVAS_BYTES: u64 = 1 << 30;

fn canvas_size(grid: &Grid, scale: u32) -> Result<(u32, u32)> {
    let too_large = || GridError::InvalidDimensions {
        message: format!(
            "{}x{} grid at {}px cells exceeds the maximum image size",
            grid.rows(),
            grid.cols(),
            scale
        ),
        help: Some(format!(
            "Use a smaller cell size; canvases are capped at {} MiB",
            MAX_CANVAS_BYTES >> 20
        )),
    };

    let width = grid.cols().checked_mul(scale).ok_or_else(too_large)?;
    let height = grid.rows().checked_mul(scale).ok_or_else(too_large)?;

    if width as u64 * height as u64 * 4 > MAX_CANVAS_BYTES {
        return Err(too_large());
    }

    Ok((width, height))
}
