//! Othello rule engine.

mod action;
mod rules;
mod types;

pub use action::{Coord, CoordError, MoveError, Turn};
pub use rules::Game;
pub use types::{BOARD_SIZE, Board, Cell, Outcome, Side};
