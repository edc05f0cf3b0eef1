//! Capability interface the session controller needs from a rule engine.

use crate::games::othello::{Cell, Coord, Game, MoveError, Outcome, Side, Turn};

/// What a session needs from the engine that owns the board.
///
/// The controller never looks at engine internals beyond this trait, so any
/// conforming Othello implementation can back a session.
pub trait RuleEngine {
    /// Error returned when a placement or pass is rejected.
    type Error: std::fmt::Display;

    /// Side that moves next.
    fn next_side(&self) -> Side;

    /// Applies a placement for `side`.
    fn place(&mut self, side: Side, column: Coord, row: Coord) -> Result<Outcome, Self::Error>;

    /// Applies a pass for `side`.
    fn pass(&mut self, side: Side) -> Result<Outcome, Self::Error>;

    /// Outcome after the most recent move.
    fn outcome(&self) -> Outcome;

    /// Contents of one cell.
    fn cell(&self, column: Coord, row: Coord) -> Cell;

    /// Number of stones `side` has on the board.
    fn stone_count(&self, side: Side) -> usize;

    /// Every move so far, oldest first.
    fn move_log(&self) -> &[Turn];
}

impl RuleEngine for Game {
    type Error = MoveError;

    fn next_side(&self) -> Side {
        Game::next_side(self)
    }

    fn place(&mut self, side: Side, column: Coord, row: Coord) -> Result<Outcome, MoveError> {
        Game::place(self, side, column, row)
    }

    fn pass(&mut self, side: Side) -> Result<Outcome, MoveError> {
        Game::pass(self, side)
    }

    fn outcome(&self) -> Outcome {
        Game::outcome(self)
    }

    fn cell(&self, column: Coord, row: Coord) -> Cell {
        self.board().get(column, row)
    }

    fn stone_count(&self, side: Side) -> usize {
        self.board().count(side)
    }

    fn move_log(&self) -> &[Turn] {
        self.log()
    }
}
