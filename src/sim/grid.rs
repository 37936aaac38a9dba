//! Grid geometry: cells and the four axis directions.

use serde::{Deserialize, Serialize};

/// A single grid cell (col, row), 0-indexed.
///
/// Coordinates are signed so a head one step past an edge is
/// representable before bounds/wrap handling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Neighbor one step in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dc, dr) = dir.delta();
        Self::new(self.col + dc, self.row + dr)
    }

    /// Floor-mod wrap into `[0, cols) x [0, rows)`.
    ///
    /// Total for any input, including negative coordinates, and
    /// idempotent on cells already in range.
    pub fn wrapped(self, cols: i32, rows: i32) -> Self {
        Self::new(self.col.rem_euclid(cols), self.row.rem_euclid(rows))
    }

    pub fn in_bounds(self, cols: i32, rows: i32) -> bool {
        (0..cols).contains(&self.col) && (0..rows).contains(&self.row)
    }
}

/// One of the four movement directions. Row numbers grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit (col, row) delta.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
