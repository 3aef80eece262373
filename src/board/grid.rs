//! Square grid storage and placement.

use tracing::debug;

use crate::core::{Cell, Position, Symbol};
use crate::error::{ConstructionError, MoveError};

/// A square grid of cells, fixed in size after construction.
///
/// Storage is row-major. Every position always holds exactly one `Cell`;
/// cells change only through placement and the removal rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of side `size`.
    ///
    /// Any positive size is accepted. Boards smaller than the win length
    /// are legal but a five-in-a-row can never occur on them. Sizes whose
    /// cell count overflows `usize` or cannot be allocated are rejected.
    pub fn new(size: usize) -> Result<Self, ConstructionError> {
        if size == 0 {
            return Err(ConstructionError::BoardTooSmall { size, min: 1 });
        }
        let too_large = ConstructionError::BoardTooLarge { size };
        let area = size.checked_mul(size).ok_or_else(|| too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(area).map_err(|_| too_large)?;
        cells.resize(area, Cell::Empty);

        Ok(Self { size, cells })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, MoveError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(MoveError::InvalidCoordinate {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Read the cell at `(row, col)`.
    pub fn symbol_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.index_of(row, col).map(|idx| self.cells[idx])
    }

    /// Read the cell at `pos`, or `None` off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos.row, pos.col).ok().map(|idx| self.cells[idx])
    }

    /// Place `symbol` at `(row, col)`.
    ///
    /// Fails without mutating the board if the cell is occupied or the
    /// coordinate is off the grid.
    pub fn place_sign(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), MoveError> {
        let idx = self.index_of(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(MoveError::OccupiedCell { row, col });
        }
        self.cells[idx] = Cell::Occupied(symbol);
        debug!(row, col, %symbol, "placed");
        Ok(())
    }

    /// Reset a cell to empty, returning what it held.
    pub(crate) fn clear(&mut self, pos: Position) -> Option<Cell> {
        let idx = self.index_of(pos.row, pos.col).ok()?;
        Some(std::mem::take(&mut self.cells[idx]))
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Number of cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|cell| cell.holds(symbol)).count()
    }

    /// All positions holding `symbol`, row-major.
    #[must_use]
    pub fn positions_of(&self, symbol: Symbol) -> Vec<Position> {
        Position::all(self.size)
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.holds(symbol))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}
