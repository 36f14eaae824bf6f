//! Benchmark parameter types.
//!
//! Rendered through [`fmt::Display`] so they can serve directly as
//! Criterion benchmark identifiers.

use std::fmt;

/// Dimensions of a grid-shaped benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub columns: usize,
}

impl GridBenchParams {
    /// Square grid with `side` rooms along each edge.
    #[must_use]
    pub const fn square(side: usize) -> Self {
        Self {
            rows: side,
            columns: side,
        }
    }

    /// Number of rooms in the grid.
    #[must_use]
    pub const fn room_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Parameters for a hash map benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MapBenchParams {
    /// Number of distinct keys inserted.
    pub key_count: usize,
    /// Load factor above which the map resizes.
    pub load_factor_threshold: f64,
}

impl fmt::Display for MapBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},lf={}", self.key_count, self.load_factor_threshold)
    }
}
