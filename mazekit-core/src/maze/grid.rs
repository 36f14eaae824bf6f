//! Rectangular room layouts.

use super::{Room, Wall};

/// A `rows` by `columns` grid of rooms.
///
/// # Examples
/// ```
/// use mazekit_core::RoomGrid;
///
/// let grid = RoomGrid::new(2, 3);
/// assert_eq!(grid.room_count(), 6);
/// // Three walls between rows, two per row between columns.
/// assert_eq!(grid.walls().len(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomGrid {
    rows: usize,
    columns: usize,
}

impl RoomGrid {
    /// Creates a grid; either dimension may be zero.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rows(&self) -> usize { self.rows }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn columns(&self) -> usize { self.columns }

    /// Number of rooms, saturating at `usize::MAX`.
    #[must_use]
    pub const fn room_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Rooms in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Room> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Room::new(row, column)))
    }

    /// Walls between orthogonally adjacent rooms, in row-major order of the
    /// upper-left room.
    #[must_use]
    pub fn walls(&self) -> Vec<Wall> {
        let mut walls = Vec::new();
        for room in self.rooms() {
            if room.column() + 1 < self.columns {
                walls.push(Wall::new(room, Room::new(room.row(), room.column() + 1)));
            }
            if room.row() + 1 < self.rows {
                walls.push(Wall::new(room, Room::new(room.row() + 1, room.column())));
            }
        }
        walls
    }

    /// Orthogonal walls followed by walls between diagonally adjacent rooms.
    #[must_use]
    pub fn walls_with_diagonals(&self) -> Vec<Wall> {
        let mut walls = self.walls();
        for room in self.rooms() {
            if room.row() + 1 >= self.rows {
                continue;
            }
            let below = room.row() + 1;
            if room.column() + 1 < self.columns {
                walls.push(Wall::new(room, Room::new(below, room.column() + 1)));
            }
            if room.column() > 0 {
                walls.push(Wall::new(room, Room::new(below, room.column() - 1)));
            }
        }
        walls
    }
}
