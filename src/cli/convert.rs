//! Convert command implementation.
//!
//! Samples an image into a grid and writes the requested exports.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GridError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_export, ExportFormat};
use crate::sample::{Lattice, PixelSource, Sampler};

use super::{load_image, report_lattice, GridArgs};

/// Sample an image and export the grid
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image to convert
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Edge length of each exported cell in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Gap between cells in HTML output, in pixels
    #[arg(long)]
    pub gap: Option<u32>,

    /// Export format (repeatable; default from config: png and html)
    #[arg(long = "format", short, value_enum)]
    pub formats: Vec<ExportFormat>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let config = args.grid.load_config()?;
    let settings = args.grid.settings(&config, printer);

    let mut options = config.export_options();
    if let Some(cell_size) = args.cell_size {
        options.cell_size = cell_size;
    }
    if let Some(gap) = args.gap {
        options.gap = gap;
    }
    if options.cell_size == 0 {
        return Err(GridError::Parse {
            message: "Cell size must be at least 1".to_string(),
            help: Some("Pass --cell-size 1 or more".to_string()),
        });
    }

    let formats = requested_formats(&args.formats, &config.formats);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let img = load_image(&args.input, printer)?;
    let (width, height) = PixelSource::dimensions(&img);
    let lattice = Lattice::new(width, height, settings.rows, settings.cols)?;
    report_lattice(&lattice, printer);

    let grid = Sampler::new(settings.policy).sample(&img, settings.rows, settings.cols)?;

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| GridError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut written = 0;
    for format in &formats {
        match write_export(&grid, *format, &options, &output)? {
            Some(path) => {
                printer.status("Writing", &display_path(&path));
                written += 1;
            }
            None => printer.warning("Skipped", &format!("{:?}: grid is empty", format)),
        }
    }

    printer.info(
        "Finished",
        &format!(
            "{} to {}",
            plural(written, "file", "files"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Flag formats if any were given, else the config's, without repeats.
fn requested_formats(flags: &[ExportFormat], configured: &[ExportFormat]) -> Vec<ExportFormat> {
    let source = if flags.is_empty() { configured } else { flags };

    let mut formats = Vec::with_capacity(source.len());
    for format in source {
        if !formats.contains(format) {
            formats.push(*format);
        }
    }
    formats
}
