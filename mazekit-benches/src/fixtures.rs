//! Seeded benchmark inputs.
//!
//! Every fixture is a pure function of its parameters and seed, so repeated
//! benchmark runs measure identical work.

use mazekit_core::{
    AdjacencyListDirectedGraph, KruskalMazeCarver, MazeCarver, MazeGraph, Room, RoomGrid,
    WeightedEdge, maze::WallEdge,
};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{error::BenchSetupError, params::GridBenchParams};

/// Directed graph type used by the routing benchmarks.
pub type RoomGraph = AdjacencyListDirectedGraph<Room, WeightedEdge<Room>>;

const MIN_WEIGHT: f64 = 1.0;
const MAX_WEIGHT: f64 = 10.0;

/// Returns `0..count` in a seeded random order.
#[must_use]
pub fn shuffled_keys(count: usize, seed: u64) -> Vec<usize> {
    let mut keys: Vec<usize> = (0..count).collect();
    keys.shuffle(&mut SmallRng::seed_from_u64(seed));
    keys
}

/// Wall graph of a grid with a random weight on every wall.
#[must_use]
pub fn weighted_wall_graph(params: GridBenchParams, seed: u64) -> MazeGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges = RoomGrid::new(params.rows, params.columns)
        .walls()
        .into_iter()
        .map(|wall| {
            let weight = rng.gen_range(MIN_WEIGHT..MAX_WEIGHT);
            WallEdge::new(wall.first(), wall.second(), weight, wall)
        })
        .collect();
    MazeGraph::new(edges)
}

/// Fully open grid with random weights, one edge in each direction between
/// neighbouring rooms.
#[must_use]
pub fn weighted_open_grid(params: GridBenchParams, seed: u64) -> RoomGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    RoomGrid::new(params.rows, params.columns)
        .walls()
        .into_iter()
        .flat_map(|wall| {
            let weight = rng.gen_range(MIN_WEIGHT..MAX_WEIGHT);
            let forward = WeightedEdge::new(wall.first(), wall.second(), weight);
            [forward.clone().reversed(), forward]
        })
        .collect()
}

/// Carves a perfect maze over the grid and returns its passages as a
/// unit-weight graph, one edge in each direction.
///
/// # Errors
/// Returns [`BenchSetupError::Maze`] when carving fails.
pub fn carved_maze_graph(params: GridBenchParams, seed: u64) -> Result<RoomGraph, BenchSetupError> {
    let walls = RoomGrid::new(params.rows, params.columns).walls();
    let maze = KruskalMazeCarver::seeded(seed).carve(&walls)?;
    Ok(maze
        .passages()
        .iter()
        .flat_map(|wall| {
            let forward = WeightedEdge::new(wall.first(), wall.second(), 1.0);
            [forward.clone().reversed(), forward]
        })
        .collect())
}

/// Opposite corners of the grid.
///
/// # Errors
/// Returns [`BenchSetupError::Disconnected`] for a grid without rooms.
pub fn corners(params: GridBenchParams) -> Result<(Room, Room), BenchSetupError> {
    match (params.rows.checked_sub(1), params.columns.checked_sub(1)) {
        (Some(last_row), Some(last_column)) => {
            Ok((Room::new(0, 0), Room::new(last_row, last_column)))
        }
        _ => Err(BenchSetupError::Disconnected {
            context: "empty grid",
        }),
    }
}
