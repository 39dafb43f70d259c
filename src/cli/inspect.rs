//! Inspect command implementation.
//!
//! Prints sampled grid colours to stdout, one grid row per line.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::render_json;
use crate::sample::{Lattice, PixelSource, Sampler};
use crate::types::Grid;

use super::{load_image, report_lattice, GridArgs};

/// Print the sampled grid colours
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Image to sample
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Print JSON instead of hex rows
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let config = args.grid.load_config()?;
    let settings = args.grid.settings(&config, printer);

    let img = load_image(&args.input, printer)?;
    let (width, height) = PixelSource::dimensions(&img);
    report_lattice(&Lattice::new(width, height, settings.rows, settings.cols)?, printer);

    let grid = Sampler::new(settings.policy).sample(&img, settings.rows, settings.cols)?;

    if args.json {
        if let Some(json) = render_json(&grid)? {
            println!("{}", json);
        }
    } else {
        for line in hex_rows(&grid) {
            println!("{}", line);
        }
    }

    printer.info("Sampled", &plural(grid.len(), "cell", "cells"));

    Ok(())
}

/// Format each grid row as space-separated hex colours.
fn hex_rows(grid: &Grid) -> Vec<String> {
    grid.row_major()
        .chunks(grid.cols().max(1) as usize)
        .map(|row| {
            row.iter()
                .map(|c| c.colour.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, GridCell};

    #[test]
    fn test_hex_rows() {
        let cells = vec![
            GridCell::new(1, 1, Colour::WHITE),
            GridCell::new(0, 0, Colour::rgb(255, 0, 0)),
            GridCell::new(1, 0, Colour::BLACK),
            GridCell::new(0, 1, Colour::rgb(0, 0, 255)),
        ];
        let grid = Grid::from_cells(2, 2, cells).unwrap();

        assert_eq!(
            hex_rows(&grid),
            vec!["#FF0000 #0000FF".to_string(), "#000000 #FFFFFF".to_string()]
        );
    }

    #[test]
    fn test_hex_rows_empty() {
        assert!(hex_rows(&Grid::empty()).is_empty());
    }
}
