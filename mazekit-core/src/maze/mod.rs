//! Maze carving on top of the spanning-tree solver.
//!
//! A maze is a set of [`Room`]s separated by [`Wall`]s. Carving removes a
//! subset of the walls so that every room can reach every other room along
//! exactly one route. [`KruskalMazeCarver`] picks that subset as a random
//! spanning tree of the room graph.

mod carver;
mod grid;

use std::collections::HashSet;

use crate::{
    disjoint_sets::{DisjointSets, UnionBySizeCompressingDisjointSets},
    error::define_error_codes,
    graphs::{BaseEdge, EdgeWithData, KruskalGraph},
    mst::{MstError, MstErrorCode},
};

pub use self::{carver::KruskalMazeCarver, grid::RoomGrid};

/// A cell of the maze, addressed by grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Room {
    row: usize,
    column: usize,
}

impl Room {
    /// Creates the room at `row`, `column`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn row(&self) -> usize { self.row }

    /// Column index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn column(&self) -> usize { self.column }
}

/// A wall separating two rooms. Removing it opens a passage between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    first: Room,
    second: Room,
}

impl Wall {
    /// Creates the wall between `first` and `second`.
    #[must_use]
    pub const fn new(first: Room, second: Room) -> Self {
        Self { first, second }
    }

    /// One side of the wall.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> Room { self.first }

    /// The other side of the wall.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> Room { self.second }
}

/// Edge joining the two rooms of a wall, carrying the wall itself.
pub type WallEdge = EdgeWithData<Room, Wall>;

/// The room graph handed to the spanning-tree solver: one vertex per room
/// touched by a wall, one edge per wall.
#[derive(Clone, Debug)]
pub struct MazeGraph {
    rooms: Vec<Room>,
    edges: Vec<WallEdge>,
}

impl MazeGraph {
    /// Builds the graph from weighted wall edges. Rooms are collected from
    /// the edge endpoints in first-seen order.
    #[must_use]
    pub fn new(edges: Vec<WallEdge>) -> Self {
        let mut seen = HashSet::new();
        let mut rooms = Vec::new();
        for edge in &edges {
            for room in [*edge.from(), *edge.to()] {
                if seen.insert(room) {
                    rooms.push(room);
                }
            }
        }
        Self { rooms, edges }
    }
}

impl KruskalGraph for MazeGraph {
    type Vertex = Room;
    type Edge = WallEdge;

    fn all_vertices(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    fn all_edges(&self) -> impl Iterator<Item = &WallEdge> {
        self.edges.iter()
    }

    fn vertex_count(&self) -> usize {
        self.rooms.len()
    }
}

/// Errors returned while carving a maze.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MazeError {
    /// The walls do not connect every room, so no perfect maze exists.
    #[error("{rooms} rooms joined by {walls} walls do not form a connected layout")]
    Disconnected {
        /// Rooms touched by the walls.
        rooms: usize,
        /// Walls supplied.
        walls: usize,
    },
    /// The spanning-tree solver rejected the room graph.
    #[error(transparent)]
    SpanningTree(#[from] MstError),
}

define_error_codes! {
    /// Machine-readable error codes for [`MazeError`].
    enum MazeErrorCode for MazeError {
        /// The walls do not connect every room.
        Disconnected => Disconnected { .. } => "MAZE_DISCONNECTED",
        /// The spanning-tree solver rejected the room graph.
        SpanningTree => SpanningTree(..) => "MAZE_SPANNING_TREE",
    }
}

impl MazeError {
    /// Returns the solver's error code when the failure came from the
    /// spanning-tree solver.
    #[must_use]
    pub const fn spanning_tree_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::SpanningTree(source) => Some(source.code()),
            Self::Disconnected { .. } => None,
        }
    }
}

/// A carved maze: the walls that were removed and those left standing.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    passages: Vec<Wall>,
    walls: Vec<Wall>,
}

impl Maze {
    /// Removed walls, each one an open passage between its rooms.
    #[must_use]
    #[rustfmt::skip]
    pub fn passages(&self) -> &[Wall] { &self.passages }

    /// Walls left standing, in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn walls(&self) -> &[Wall] { &self.walls }

    /// Every room touched by a passage or a wall.
    #[must_use]
    pub fn rooms(&self) -> HashSet<Room> {
        self.passages
            .iter()
            .chain(&self.walls)
            .flat_map(|wall| [wall.first(), wall.second()])
            .collect()
    }

    /// Returns `true` when the passages connect every room without forming
    /// a cycle.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        let rooms = self.rooms();
        if self.passages.len() + 1 != rooms.len().max(1) {
            return false;
        }
        let mut sets = UnionBySizeCompressingDisjointSets::new();
        for room in rooms {
            sets.make_set(room);
        }
        self.passages
            .iter()
            .all(|wall| sets.union(&wall.first(), &wall.second()) == Ok(true))
    }
}

/// Strategy for choosing which walls to knock down.
pub trait MazeCarver {
    /// Chooses the walls to remove so the rooms form a perfect maze.
    ///
    /// # Errors
    /// Returns [`MazeError`] when no perfect maze can be carved from `walls`.
    fn choose_walls_to_remove(&mut self, walls: &[Wall]) -> Result<Vec<Wall>, MazeError>;

    /// Carves `walls` into a maze.
    ///
    /// # Errors
    /// Propagates the errors of [`MazeCarver::choose_walls_to_remove`].
    fn carve(&mut self, walls: &[Wall]) -> Result<Maze, MazeError> {
        let passages = self.choose_walls_to_remove(walls)?;
        let removed: HashSet<&Wall> = passages.iter().collect();
        let standing = walls
            .iter()
            .filter(|wall| !removed.contains(wall))
            .copied()
            .collect();
        Ok(Maze {
            passages,
            walls: standing,
        })
    }
}
