//! Game layer: two seated players, turn alternation, and terminal
//! outcome detection.

mod engine;
mod outcome;

pub use engine::Game;
pub use outcome::{GameStatus, MoveOutcome, MoveReport};
