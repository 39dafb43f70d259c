//! Exporters for sampled grids.
//!
//! Every exporter is a pure function of the grid and its options, and
//! produces no artifact for an empty grid.

mod html;
mod json;
mod png;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ExportOptions, Grid};

pub use html::{render_html, write_html};
pub use json::{render_json, write_json};
pub use png::{rasterize, render_png, write_png, MAX_CANVAS_BYTES};

/// An artifact the grid can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

/// Suggested file name for an exported grid, e.g. `grid-10x12.png`.
pub fn export_file_name(rows: u32, cols: u32, format: ExportFormat) -> String {
    format!("grid-{}x{}.{}", rows, cols, format.extension())
}

/// Write one artifact into `dir` under its suggested file name.
///
/// Returns the written path, or `None` when the grid is empty.
pub fn write_export(
    grid: &Grid,
    format: ExportFormat,
    options: &ExportOptions,
    dir: &Path,
) -> Result<Option<PathBuf>> {
    let path = dir.join(export_file_name(grid.rows(), grid.cols(), format));

    let written = match format {
        ExportFormat::Png => write_png(grid, &path, options.effective_cell_size())?,
        ExportFormat::Html => write_html(grid, &path, options)?,
        ExportFormat::Json => write_json(grid, &path)?,
    };

    Ok(written.then_some(path))
}
