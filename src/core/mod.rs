//! Core engine types: symbols, cells, positions, players, RNG, configuration.
//!
//! These are the building blocks shared by the board and the game layer.

pub mod symbol;
pub mod position;
pub mod player;
pub mod rng;
pub mod config;

pub use symbol::{Cell, Symbol};
pub use position::{Axis, Position};
pub use player::{Player, Players, Seat};
pub use rng::{GameRng, Picks, ScriptedSelection, SelectionSource};
pub use config::{
    GameConfig, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, MAX_SEED, MIN_BOARD_SIZE,
    STANDARD_BOARD_SIZES,
};
