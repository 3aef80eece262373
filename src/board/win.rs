//! Five-in-a-row detection.
//!
//! Every cell is tried as the start of a window of `WIN_LENGTH` cells in
//! each forward axis direction. A window matches only if all of its cells
//! are on the board and hold the symbol. Runs longer than five match at
//! several starts; any matching window is a win.

use super::Board;
use crate::core::{Axis, Position, Symbol};

/// Number of consecutive symbols needed to win.
pub const WIN_LENGTH: usize = 5;

impl Board {
    /// True if `symbol` occupies five consecutive cells along any axis.
    #[must_use]
    pub fn check_five_in_a_row(&self, symbol: Symbol) -> bool {
        self.find_five(symbol).is_some()
    }

    /// First winning window in row-major scan order, as `(start, axis)`.
    ///
    /// The window covers `start` and the next four cells along the axis's
    /// forward direction.
    #[must_use]
    pub fn find_five(&self, symbol: Symbol) -> Option<(Position, Axis)> {
        Position::all(self.size()).find_map(|start| {
            Axis::ALL
                .into_iter()
                .find(|&axis| self.window_matches(start, axis, symbol))
                .map(|axis| (start, axis))
        })
    }

    fn window_matches(&self, start: Position, axis: Axis, symbol: Symbol) -> bool {
        let (d_row, d_col) = axis.delta();
        (0..WIN_LENGTH).all(|k| {
            start
                .offset(d_row, d_col, k, self.size())
                .and_then(|pos| self.get(pos))
                .is_some_and(|cell| cell.holds(symbol))
        })
    }
}
