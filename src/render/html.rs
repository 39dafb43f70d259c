//! Markup export.
//!
//! Emits a standalone HTML document that reproduces the grid with a CSS grid
//! container. Cells carry only their colour; position comes from document
//! order, which is always row-major.

use std::path::Path;

use crate::error::{GridError, Result};
use crate::types::{ExportOptions, Grid};

/// Render the grid as a self-contained HTML document.
///
/// Returns `None` for an empty grid. Output is byte-identical for identical
/// inputs.
pub fn render_html(grid: &Grid, options: &ExportOptions) -> Option<String> {
    if grid.is_empty() {
        return None;
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let cell = options.effective_cell_size();
    let gap = options.gap;

    let mut cells = String::new();
    for c in grid.row_major() {
        cells.push_str(&format!(
            "      <div class=\"cell\" style=\"background: {};\"></div>\n",
            c.colour.css()
        ));
    }

    let mut html = String::new();
    html.push_str("<!doctype html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str(&format!("  <title>Image Grid ({}x{})</title>\n", rows, cols));
    html.push_str("  <style>\n");
    html.push_str(&format!(
        "    :root {{ --rows: {}; --cols: {}; --cell: {}px; --gap: {}px; }}\n",
        rows, cols, cell, gap
    ));
    html.push_str("    body { font-family: system-ui, sans-serif; padding: 24px; }\n");
    html.push_str("    .wrap { display: grid; gap: 12px; }\n");
    html.push_str("    .meta { color: #555; font-size: 14px; }\n");
    html.push_str("    .grid {\n");
    html.push_str("      display: grid;\n");
    html.push_str("      grid-template-columns: repeat(var(--cols), var(--cell));\n");
    html.push_str("      grid-auto-rows: var(--cell);\n");
    html.push_str("      gap: var(--gap);\n");
    html.push_str("      padding: var(--gap);\n");
    html.push_str("      background: #e5e7eb;\n");
    html.push_str("      width: max-content;\n");
    html.push_str("    }\n");
    html.push_str("    .cell { width: var(--cell); height: var(--cell); }\n");
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <div class=\"wrap\">\n");
    html.push_str("    <h1>Image Grid</h1>\n");
    html.push_str(&format!(
        "    <div class=\"meta\">Generated grid: {} rows × {} cols</div>\n",
        rows, cols
    ));
    html.push_str("    <div class=\"grid\" aria-label=\"Pixel grid\">\n");
    html.push_str(&cells);
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    Some(html)
}

/// Render the grid and write it to an HTML file.
///
/// Returns `false` without touching the filesystem for an empty grid.
pub fn write_html(grid: &Grid, path: &Path, options: &ExportOptions) -> Result<bool> {
    let Some(html) = render_html(grid, options) else {
        return Ok(false);
    };

    std::fs::write(path, html).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write HTML: {}", e),
    })?;

    Ok(true)
}
