//! Game logic and rules for Othello.

use super::action::{Coord, MoveError, Turn};
use super::types::{Board, Cell, Outcome, Side};
use tracing::{debug, instrument};

/// The eight directions a line of captured stones can run in.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Othello game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next: Side,
    outcome: Outcome,
    log: Vec<Turn>,
}

impl Game {
    /// Creates a new game from the opening position. White moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Side::White)
    }

    /// Creates a game from an arbitrary position with an empty move log.
    ///
    /// The outcome is evaluated immediately, so a position where neither
    /// side can move starts out terminal.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, next: Side) -> Self {
        let mut game = Self {
            board,
            next,
            outcome: Outcome::InProgress,
            log: Vec::new(),
        };
        game.update_outcome();
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn next_side(&self) -> Side {
        self.next
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move log, oldest first.
    pub fn log(&self) -> &[Turn] {
        &self.log
    }

    /// Places a stone for `side`, flipping every bracketed line.
    #[instrument(skip(self), fields(next = ?self.next))]
    pub fn place(&mut self, side: Side, column: Coord, row: Coord) -> Result<Outcome, MoveError> {
        self.check_turn(side)?;

        if !self.board.is_empty(column, row) {
            return Err(MoveError::Occupied(column, row));
        }

        let flips = self.captures(side, column, row);
        if flips.is_empty() {
            return Err(MoveError::NoCapture(column, row));
        }

        self.board.set(column, row, Cell::Stone(side));
        for (c, r) in &flips {
            self.board.set(*c, *r, Cell::Stone(side));
        }
        self.log.push(Turn::Placement { side, column, row });
        self.next = side.opponent();
        self.update_outcome();

        debug!(flipped = flips.len(), outcome = ?self.outcome, "Stone placed");
        Ok(self.outcome)
    }

    /// Gives up the turn for `side`. Passing never ends the game.
    #[instrument(skip(self), fields(next = ?self.next))]
    pub fn pass(&mut self, side: Side) -> Result<Outcome, MoveError> {
        self.check_turn(side)?;

        self.log.push(Turn::Pass { side });
        self.next = side.opponent();

        debug!("Turn passed");
        Ok(self.outcome)
    }

    /// Returns every cell where `side` could legally place a stone.
    pub fn legal_placements(&self, side: Side) -> Vec<(Coord, Coord)> {
        Coord::ALL
            .iter()
            .flat_map(|row| Coord::ALL.iter().map(move |column| (*column, *row)))
            .filter(|(column, row)| {
                self.board.is_empty(*column, *row) && !self.captures(side, *column, *row).is_empty()
            })
            .collect()
    }

    /// Stones of the opponent that a placement by `side` would flip.
    pub fn captures(&self, side: Side, column: Coord, row: Coord) -> Vec<(Coord, Coord)> {
        let mut flips = Vec::new();

        for (dx, dy) in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = column.offset(dx).zip(row.offset(dy));

            while let Some((c, r)) = cursor {
                match self.board.get(c, r) {
                    Cell::Stone(s) if s == side.opponent() => line.push((c, r)),
                    Cell::Stone(_) => {
                        flips.append(&mut line);
                        break;
                    }
                    Cell::Empty => break,
                }
                cursor = c.offset(dx).zip(r.offset(dy));
            }
        }

        flips
    }

    fn check_turn(&self, side: Side) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if side != self.next {
            return Err(MoveError::WrongSide(side));
        }
        Ok(())
    }

    /// The game ends once neither side has a legal placement.
    fn update_outcome(&mut self) {
        let stuck = [Side::White, Side::Black]
            .into_iter()
            .all(|side| self.legal_placements(side).is_empty());
        if !stuck {
            return;
        }

        let (white, black) = (self.board.count(Side::White), self.board.count(Side::Black));
        self.outcome = match white.cmp(&black) {
            std::cmp::Ordering::Greater => Outcome::Won(Side::White),
            std::cmp::Ordering::Less => Outcome::Won(Side::Black),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
