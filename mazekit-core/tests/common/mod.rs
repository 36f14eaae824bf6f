use mazekit_core::{
    AdjacencyListDirectedGraph, KruskalMazeCarver, Maze, MazeCarver, Room, RoomGrid, WeightedEdge,
};

pub type PassageGraph = AdjacencyListDirectedGraph<Room, WeightedEdge<Room>>;

/// Carves `grid` with a fixed seed.
#[must_use]
pub fn carve(grid: RoomGrid, seed: u64) -> Maze {
    KruskalMazeCarver::seeded(seed)
        .carve(&grid.walls())
        .expect("grid layouts are connected")
}

/// Unit-weight graph with an edge in each direction through every passage.
#[must_use]
pub fn passage_graph(maze: &Maze) -> PassageGraph {
    maze.passages()
        .iter()
        .flat_map(|wall| {
            let forward = WeightedEdge::new(wall.first(), wall.second(), 1.0);
            [forward.clone().reversed(), forward]
        })
        .collect()
}
