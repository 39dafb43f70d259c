//! Export geometry.

/// Default edge length of one exported cell, in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Default spacing between cells in markup output, in pixels.
pub const DEFAULT_GAP: u32 = 2;

/// Output geometry shared by the exporters.
///
/// These never affect sampled colours. `gap` is only used by the markup
/// exporter; raster output is always gapless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub cell_size: u32,
    pub gap: u32,
}

impl ExportOptions {
    pub const fn new(cell_size: u32, gap: u32) -> Self {
        Self { cell_size, gap }
    }

    /// Cell size with a floor of 1 pixel.
    pub fn effective_cell_size(&self) -> u32 {
        self.cell_size.max(1)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExportOptions::default();
        assert_eq!(opts.cell_size, 20);
        assert_eq!(opts.gap, 2);
    }

    #[test]
    fn test_zero_cell_size_treated_as_one() {
        assert_eq!(ExportOptions::new(0, 0).effective_cell_size(), 1);
    }
}
