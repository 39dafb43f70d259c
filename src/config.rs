//! Project configuration (imgrid.yaml).
//!
//! Supplies defaults for grid size, export geometry and output location.
//! Command-line flags override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::render::ExportFormat;
use crate::sample::EmptyBlockPolicy;
use crate::types::{ExportOptions, DEFAULT_CELL_SIZE, DEFAULT_GAP};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "imgrid.yaml";

/// Default grid size on each axis.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Grid size range accepted by the CLI. Values outside are clamped.
pub const MIN_GRID_SIZE: u32 = 2;
pub const MAX_GRID_SIZE: u32 = 50;

/// Configuration loaded from imgrid.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rows: u32,
    pub cols: u32,

    /// Edge length of one exported cell in pixels.
    pub cell_size: u32,

    /// Gap between cells in HTML output.
    pub gap: u32,

    /// Output directory for exported grids.
    pub output: PathBuf,

    /// Formats written by `convert` when none are given on the command line.
    pub formats: Vec<ExportFormat>,

    pub empty_block: EmptyBlockPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            gap: DEFAULT_GAP,
            output: PathBuf::from("dist"),
            formats: vec![ExportFormat::Png, ExportFormat::Html],
            empty_block: EmptyBlockPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string. An empty document yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GridError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load an explicit config file, or `imgrid.yaml` in `dir` if present,
    /// or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new(self.cell_size, self.gap)
    }
}

/// Clamp a grid size into the CLI range, returning the value and whether it
/// changed.
pub fn clamp_grid_size(value: u32) -> (u32, bool) {
    let clamped = value.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    (clamped, clamped != value)
}

/// Default config file contents written by `imgrid init`.
pub fn default_config_yaml() -> String {
    let defaults = Config::default();
    let mut yaml = String::new();

    yaml.push_str("# imgrid configuration\n");
    yaml.push_str(&format!(
        "# rows and cols are clamped to {}..={}\n",
        MIN_GRID_SIZE, MAX_GRID_SIZE
    ));
    yaml.push_str(&format!("rows: {}\n", defaults.rows));
    yaml.push_str(&format!("cols: {}\n", defaults.cols));
    yaml.push_str("\n# Exported cell edge in pixels, and HTML gap between cells\n");
    yaml.push_str(&format!("cell_size: {}\n", defaults.cell_size));
    yaml.push_str(&format!("gap: {}\n", defaults.gap));
    yaml.push_str(&format!("\noutput: {}\n", defaults.output.display()));
    yaml.push_str("\n# Any of: png, html, json\n");
    yaml.push_str("formats:\n");
    for format in &defaults.formats {
        yaml.push_str(&format!("  - {}\n", format.extension()));
    }
    yaml.push_str("\n# clamp: sample 1px blocks when the grid is finer than the image\n");
    yaml.push_str("# reject: fail instead\n");
    yaml.push_str("empty_block: clamp\n");

    yaml
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("rows: 24").unwrap();

        assert_eq!(config.rows, 24);
        assert_eq!(config.cols, 10);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
rows: 12
cols: 30
cell_size: 8
gap: 0
output: out/grids
formats:
  - json
  - png
empty_block: reject
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!((config.rows, config.cols), (12, 30));
        assert_eq!(config.export_options(), ExportOptions::new(8, 0));
        assert_eq!(config.output, PathBuf::from("out/grids"));
        assert_eq!(config.formats, vec![ExportFormat::Json, ExportFormat::Png]);
        assert_eq!(config.empty_block, EmptyBlockPolicy::Reject);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_unknown_key() {
        assert!(Config::parse("colour_space: lab").is_err());
    }

    #[test]
    fn test_parse_unknown_format() {
        assert!(Config::parse("formats: [gif]").is_err());
    }

    #[test]
    fn test_default_yaml_round_trips() {
        let config = Config::parse(&default_config_yaml()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "rows: 5").unwrap();
        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "rows: 7").unwrap();

        assert_eq!(Config::resolve(Some(&other), dir.path()).unwrap().rows, 7);
        assert_eq!(Config::resolve(None, dir.path()).unwrap().rows, 5);
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_clamp_grid_size() {
        assert_eq!(clamp_grid_size(1), (2, true));
        assert_eq!(clamp_grid_size(10), (10, false));
        assert_eq!(clamp_grid_size(51), (50, true));
    }
}
