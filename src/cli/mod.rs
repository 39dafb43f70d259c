pub mod completions;
pub mod convert;
pub mod init;
pub mod inspect;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use image::DynamicImage;

use crate::config::{clamp_grid_size, Config};
use crate::error::{GridError, Result};
use crate::output::{display_path, Printer};
use crate::sample::{EmptyBlockPolicy, Lattice};

/// imgrid - Turn images into averaged colour grids
#[derive(Parser, Debug)]
#[command(name = "imgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print extra detail about sampling and output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample an image and export the grid as PNG, HTML or JSON
    Convert(convert::ConvertArgs),

    /// Print the sampled grid colours to stdout
    Inspect(inspect::InspectArgs),

    /// Write a default imgrid.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Grid options shared by commands that sample an image.
#[derive(Args, Debug, Default)]
pub struct GridArgs {
    /// Number of grid rows (clamped to 2..=50)
    #[arg(long, short)]
    pub rows: Option<u32>,

    /// Number of grid columns (clamped to 2..=50)
    #[arg(long, short)]
    pub cols: Option<u32>,

    /// Config file (default: ./imgrid.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Handling of grids finer than the image
    #[arg(long, value_enum)]
    pub empty_block: Option<EmptyBlockPolicy>,
}

/// Grid settings after merging flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    pub rows: u32,
    pub cols: u32,
    pub policy: EmptyBlockPolicy,
}

impl GridArgs {
    pub fn load_config(&self) -> Result<Config> {
        Config::resolve(self.config.as_deref(), Path::new("."))
    }

    /// Merge flags over `config`, clamping rows and cols into the CLI range.
    pub fn settings(&self, config: &Config, printer: &Printer) -> GridSettings {
        let rows = clamp_axis("rows", self.rows.unwrap_or(config.rows), printer);
        let cols = clamp_axis("cols", self.cols.unwrap_or(config.cols), printer);
        GridSettings {
            rows,
            cols,
            policy: self.empty_block.unwrap_or(config.empty_block),
        }
    }
}

fn clamp_axis(name: &str, value: u32, printer: &Printer) -> u32 {
    let (clamped, changed) = clamp_grid_size(value);
    if changed {
        printer.warning(
            "Warning",
            &format!("{} {} is out of range; using {}", name, value, clamped),
        );
    }
    clamped
}

/// Decode an image file.
pub fn load_image(path: &Path, printer: &Printer) -> Result<DynamicImage> {
    let display = display_path(path);

    if !path.exists() {
        return Err(GridError::Io {
            path: path.to_path_buf(),
            message: format!("File not found: {}", display),
        });
    }

    printer.status("Loading", &display);

    image::open(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })
}

/// Report how the lattice covers the image.
pub fn report_lattice(lattice: &Lattice, printer: &Printer) {
    printer.status(
        "Sampling",
        &format!(
            "{}x{} grid over {}x{} image",
            lattice.rows, lattice.cols, lattice.image_width, lattice.image_height
        ),
    );

    if lattice.is_degenerate() {
        printer.warning(
            "Warning",
            &format!(
                "Grid is finer than the image; cells are {}x{} px",
                lattice.cell_width, lattice.cell_height
            ),
        );
        return;
    }

    printer.verbose(
        "Cell size",
        &format!("{}x{} px", lattice.cell_width, lattice.cell_height),
    );

    let (right, bottom) = (lattice.ignored_columns(), lattice.ignored_rows());
    if right > 0 || bottom > 0 {
        printer.verbose(
            "Trimmed",
            &format!("{}px right strip, {}px bottom strip not sampled", right, bottom),
        );
    }
}
