//! The board: grid storage, placement, win detection and the adjacency
//! penalty rule.
//!
//! The board knows nothing about players or turns. It is driven by the
//! game layer, which places a stone, applies the adjacency rule, and only
//! then checks for five in a row on the resulting position.

mod grid;
mod win;
mod adjacency;

pub use grid::Board;
pub use win::WIN_LENGTH;
pub use adjacency::{removal_count, Removal};
