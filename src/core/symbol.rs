//! Player symbols and cell states.
//!
//! A cell is either empty or holds exactly one of the two symbols.
//! There is no third "unset" state: every position on the board is
//! always one of these two variants.

use serde::{Deserialize, Serialize};

/// One of the two player marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Both symbols, in seating order.
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// The opposing symbol.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Single-character rendering.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// State of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Symbol),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The symbol in this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Check whether this cell holds `symbol`.
    #[must_use]
    pub fn holds(self, symbol: Symbol) -> bool {
        self == Cell::Occupied(symbol)
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Occupied(symbol)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(symbol) => write!(f, "{}", symbol),
        }
    }
}
