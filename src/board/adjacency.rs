//! The adjacency penalty rule.
//!
//! After a stone is placed, the longest straight run of its symbol through
//! that cell is measured over the four axes. A run of exactly three costs
//! the player one random stone of that symbol; a run of exactly four costs
//! two. Any other length, including a winning five, removes nothing.
//!
//! Removed stones are drawn uniformly from every cell holding the symbol,
//! so the stone just placed can itself be removed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::Board;
use crate::core::{Axis, Picks, Position, SelectionSource, Symbol};

/// Stones removed for a given adjacency metric.
#[must_use]
pub const fn removal_count(metric: usize) -> usize {
    match metric {
        3 => 1,
        4 => 2,
        _ => 0,
    }
}

/// Result of applying the adjacency rule to one placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    /// Longest run through the placed cell.
    pub metric: usize,
    /// Cells cleared by the rule.
    pub removed: Picks,
}

impl Removal {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

impl Board {
    /// Consecutive cells holding `symbol` starting at `pos` (inclusive),
    /// stepping by `(d_row, d_col)` until the edge or a mismatch.
    fn count_in_direction(&self, pos: Position, d_row: isize, d_col: isize, symbol: Symbol) -> usize {
        (0..)
            .map_while(|k| pos.offset(d_row, d_col, k, self.size()))
            .take_while(|&p| self.get(p).is_some_and(|cell| cell.holds(symbol)))
            .count()
    }

    /// Length of the run of `symbol` through `pos` along `axis`.
    ///
    /// Zero if `pos` does not itself hold `symbol`.
    #[must_use]
    pub fn run_length(&self, pos: Position, symbol: Symbol, axis: Axis) -> usize {
        let (d_row, d_col) = axis.delta();
        let forward = self.count_in_direction(pos, d_row, d_col, symbol);
        let backward = self.count_in_direction(pos, -d_row, -d_col, symbol);
        (forward + backward).saturating_sub(1)
    }

    /// Longest run of `symbol` through `pos` over all four axes.
    #[must_use]
    pub fn adjacency_metric(&self, pos: Position, symbol: Symbol) -> usize {
        Axis::ALL
            .into_iter()
            .map(|axis| self.run_length(pos, symbol, axis))
            .max()
            .unwrap_or(0)
    }

    /// Apply the penalty rule for a stone of `symbol` just placed at `pos`.
    ///
    /// Asks `source` for `removal_count(metric)` distinct cells among all
    /// cells holding `symbol` and clears them. If fewer stones exist than
    /// requested, all of them are removed.
    #[instrument(level = "debug", skip(self, source), fields(pos = %pos, symbol = %symbol))]
    pub fn handle_adjacent_count<S>(&mut self, pos: Position, symbol: Symbol, source: &mut S) -> Removal
    where
        S: SelectionSource + ?Sized,
    {
        let metric = self.adjacency_metric(pos, symbol);
        debug!(metric, "adjacency metric");

        let count = removal_count(metric);
        if count == 0 {
            return Removal {
                metric,
                removed: Picks::new(),
            };
        }

        let candidates = self.positions_of(symbol);
        let removed = source.pick(&candidates, count);
        for &cell in &removed {
            self.clear(cell);
        }
        info!(metric, removed = ?removed.as_slice(), "penalty removal");

        Removal { metric, removed }
    }
}
