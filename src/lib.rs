//! imgrid - Image to colour grid converter
//!
//! Samples an image into a rows x cols grid of averaged colours and exports
//! the grid as a PNG or a standalone HTML document.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod sample;
pub mod types;

pub use config::Config;
pub use error::{GridError, Result};
pub use render::{
    export_file_name, rasterize, render_html, render_json, render_png, write_export, write_html,
    write_json, write_png, ExportFormat,
};
pub use sample::{sample, Block, EmptyBlockPolicy, Lattice, PixelSource, Sampler};
pub use types::{Colour, ExportOptions, Grid, GridCell};
