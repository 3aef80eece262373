//! Players and seating.
//!
//! ## Seat
//!
//! The two seats of a game. `Seat::First` always moves first.
//!
//! ## Players
//!
//! Exactly two players indexed by `Seat`. Each player's symbol is fixed
//! at construction and the two symbols must differ, so seat and symbol
//! form a bijection for the whole game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::Symbol;
use crate::error::ConstructionError;

/// Seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Conventional symbol for this seat (first seat plays X).
    #[must_use]
    pub const fn default_symbol(self) -> Symbol {
        match self {
            Seat::First => Symbol::X,
            Seat::Second => Symbol::O,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A participant: a display name plus a fixed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the player. The symbol never changes.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// The two players of a game, indexed by `Seat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Players {
    data: [Player; 2],
}

impl Players {
    /// Seat two players. Rejects a pair sharing the same symbol.
    pub fn new(first: Player, second: Player) -> Result<Self, ConstructionError> {
        if first.symbol == second.symbol {
            return Err(ConstructionError::DuplicateSymbol(first.symbol));
        }
        Ok(Self {
            data: [first, second],
        })
    }

    /// Seat two named players with the conventional X/O assignment.
    pub fn with_names(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            data: [
                Player::new(first, Seat::First.default_symbol()),
                Player::new(second, Seat::Second.default_symbol()),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &Player {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.data[seat.index()]
    }

    /// The seat playing `symbol`.
    #[must_use]
    pub fn seat_of(&self, symbol: Symbol) -> Seat {
        if self.data[0].symbol == symbol {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// Iterate over `(Seat, &Player)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &Player)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl Index<Seat> for Players {
    type Output = Player;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl IndexMut<Seat> for Players {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
