//! Board coordinates and scan axes.
//!
//! Positions are 0-indexed `(row, col)` pairs. Stepping off the grid
//! yields `None` instead of wrapping, so scans stop at the edges.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a board of side `size`.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Move `distance` steps along `(d_row, d_col)`.
    ///
    /// Returns `None` if the result is outside `[0, size)` on either axis.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, distance: usize, size: usize) -> Option<Self> {
        let distance = isize::try_from(distance).ok()?;
        let row = shift(self.row, d_row.checked_mul(distance)?)?;
        let col = shift(self.col, d_col.checked_mul(distance)?)?;
        let moved = Self { row, col };
        moved.in_bounds(size).then_some(moved)
    }

    /// Iterate over every position of a `size` x `size` board, row-major.
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Position { row, col }))
    }
}

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta >= 0 {
        value.checked_add(delta.unsigned_abs())
    } else {
        value.checked_sub(delta.unsigned_abs())
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four undirected lines through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Top-right to bottom-left (`/`).
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Forward direction vector as `(d_row, d_col)`.
    ///
    /// The backward direction is the negation.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}
