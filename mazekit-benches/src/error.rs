//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use mazekit_core::{MapConfigError, MazeError, MstError, ShortestPathError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A hash map configuration was rejected.
    #[error("map configuration failed: {0}")]
    MapConfig(#[from] MapConfigError),
    /// Spanning-tree computation failed.
    #[error("spanning tree computation failed: {0}")]
    Mst(#[from] MstError),
    /// Maze carving failed.
    #[error("maze carving failed: {0}")]
    Maze(#[from] MazeError),
    /// Shortest-path search failed.
    #[error("shortest path search failed: {0}")]
    ShortestPath(#[from] ShortestPathError),
    /// A fixture that must be connected was not.
    #[error("fixture {context} is disconnected")]
    Disconnected {
        /// Description of the fixture.
        context: &'static str,
    },
}
