//! Randomised Kruskal carving.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    disjoint_sets::UnionBySizeCompressingDisjointSets,
    graphs::KruskalGraph,
    mst::{KruskalMinimumSpanningTreeFinder, MinimumSpanningTree, MinimumSpanningTreeFinder},
};

use super::{MazeCarver, MazeError, MazeGraph, Room, Wall, WallEdge};

/// Carves a maze by giving every wall a random weight and knocking down the
/// walls of a minimum spanning tree.
///
/// The spanning-tree solver is injected as `F`. Two carvers built with the
/// same seed produce the same maze from the same wall list.
///
/// # Examples
/// ```
/// use mazekit_core::{KruskalMazeCarver, MazeCarver, RoomGrid};
///
/// let grid = RoomGrid::new(3, 4);
/// let maze = KruskalMazeCarver::seeded(7).carve(&grid.walls())?;
/// assert_eq!(maze.passages().len(), grid.room_count() - 1);
/// assert!(maze.is_perfect());
/// # Ok::<(), mazekit_core::MazeError>(())
/// ```
pub struct KruskalMazeCarver<
    F = KruskalMinimumSpanningTreeFinder<UnionBySizeCompressingDisjointSets<Room>>,
> {
    finder: F,
    rng: SmallRng,
}

impl<F> KruskalMazeCarver<F> {
    /// Creates a carver seeded from operating-system entropy.
    #[must_use]
    pub fn new(finder: F) -> Self {
        Self {
            finder,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a carver with a fixed seed.
    #[must_use]
    pub fn with_seed(finder: F, seed: u64) -> Self {
        Self {
            finder,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The spanning-tree solver in use.
    #[must_use]
    #[rustfmt::skip]
    pub fn finder(&self) -> &F { &self.finder }
}

impl KruskalMazeCarver {
    /// Creates a carver over the default solver with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_seed(KruskalMinimumSpanningTreeFinder::new(), seed)
    }
}

impl<F: Default> Default for KruskalMazeCarver<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: fmt::Debug> fmt::Debug for KruskalMazeCarver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KruskalMazeCarver")
            .field("finder", &self.finder)
            .finish_non_exhaustive()
    }
}

impl<F> MazeCarver for KruskalMazeCarver<F>
where
    F: MinimumSpanningTreeFinder<MazeGraph>,
{
    #[instrument(
        name = "maze.kruskal_carve",
        err,
        skip_all,
        fields(walls = walls.len(), rooms = tracing::field::Empty),
    )]
    fn choose_walls_to_remove(&mut self, walls: &[Wall]) -> Result<Vec<Wall>, MazeError> {
        let edges = walls
            .iter()
            .map(|wall| {
                let weight = f64::from(self.rng.gen_range(0..=u32::MAX));
                WallEdge::new(wall.first(), wall.second(), weight, *wall)
            })
            .collect();
        let graph = MazeGraph::new(edges);
        let rooms = graph.vertex_count();
        tracing::Span::current().record("rooms", rooms);

        match self.finder.find_minimum_spanning_tree(&graph)? {
            MinimumSpanningTree::Success(tree) => {
                debug!(passages = tree.len(), "maze carved");
                Ok(tree.into_iter().map(WallEdge::into_data).collect())
            }
            MinimumSpanningTree::Failure => Err(MazeError::Disconnected {
                rooms,
                walls: walls.len(),
            }),
        }
    }
}
