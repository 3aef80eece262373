//! Move and game results.

use serde::{Deserialize, Serialize};

use crate::board::Removal;
use crate::core::{Position, Symbol};

/// Result of a single accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on. The caller advances the turn.
    Continue,
    /// The mover has five in a row after any removal.
    Won(Symbol),
    /// The board is full and nobody won.
    Draw,
}

impl MoveOutcome {
    /// True for `Won` and `Draw`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Overall state of a game.
///
/// `Won` and `Draw` are absorbing: once reached, no move is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Symbol),
    Draw,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Winning symbol, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Check if `symbol` won.
    #[must_use]
    pub fn is_winner(self, symbol: Symbol) -> bool {
        self.winner() == Some(symbol)
    }
}

impl From<MoveOutcome> for GameStatus {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Continue => GameStatus::InProgress,
            MoveOutcome::Won(symbol) => GameStatus::Won(symbol),
            MoveOutcome::Draw => GameStatus::Draw,
        }
    }
}

/// Everything a renderer needs to know about an accepted move.
///
/// The adjacency rule has already run when this is produced, and the
/// outcome reflects the board after removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Cell the stone was placed on.
    pub placed: Position,
    /// Symbol placed.
    pub symbol: Symbol,
    /// Stones cleared by the adjacency rule (may include `placed`).
    pub removal: Removal,
    pub outcome: MoveOutcome,
}
