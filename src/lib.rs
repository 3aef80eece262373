//! # five-in-a-row
//!
//! Board-state engine for a two-player five-in-a-row game with a run
//! penalty: forming exactly three or four in a line costs the mover one or
//! two random stones of their own symbol.
//!
//! ## Design Principles
//!
//! 1. **Layered**: the `Board` owns cells, placement, win detection and
//!    the removal rule. The `Game` owns players, turns and outcomes.
//!
//! 2. **Injectable randomness**: removals go through the
//!    `SelectionSource` trait. Seed a `GameRng` or script a
//!    `ScriptedSelection` to make games reproducible.
//!
//! 3. **Explicit sequencing**: `Game::make_move` places, applies the
//!    removal rule, then checks for a win on the post-removal board, and
//!    reports all of it in one `MoveReport`.
//!
//! ## Example
//!
//! ```
//! use five_in_a_row::{Game, MoveOutcome, Players, ScriptedSelection};
//!
//! let players = Players::with_names("Ann", "Ben");
//! let mut game = Game::with_rng(6, players, ScriptedSelection::first()).unwrap();
//!
//! let report = game.make_move(2, 3).unwrap();
//! assert_eq!(report.outcome, MoveOutcome::Continue);
//! game.next_turn();
//! assert_eq!(game.current_player().name(), "Ben");
//! ```
//!
//! ## Modules
//!
//! - `core`: symbols, cells, positions, players, RNG, configuration
//! - `board`: grid, five-in-a-row detection, adjacency removal rule
//! - `game`: turn orchestration and outcomes
//! - `error`: error types

pub mod core;
pub mod board;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Axis, Cell, GameConfig, GameRng, Picks, Player, Players, Position,
    ScriptedSelection, Seat, SelectionSource, Symbol, MAX_SEED, MIN_BOARD_SIZE,
    STANDARD_BOARD_SIZES,
};

pub use crate::board::{removal_count, Board, Removal, WIN_LENGTH};

pub use crate::game::{Game, GameStatus, MoveOutcome, MoveReport};

pub use crate::error::{ConfigError, ConstructionError, MoveError};
