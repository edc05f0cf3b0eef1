//! Core domain types for Othello.

use super::action::Coord;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Side of the board a player moves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// White (moves first).
    White,
    /// Black.
    Black,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Single-letter marker used in move summaries.
    pub fn initial(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a stone of the given side.
    Stone(Side),
}

/// 8x8 Othello board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no stones on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard opening position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let (low, high) = (Coord::ALL[3], Coord::ALL[4]);
        board.set(low, low, Cell::Stone(Side::White));
        board.set(high, high, Cell::Stone(Side::White));
        board.set(low, high, Cell::Stone(Side::Black));
        board.set(high, low, Cell::Stone(Side::Black));
        board
    }

    /// Gets the cell at the given column and row.
    pub fn get(&self, column: Coord, row: Coord) -> Cell {
        self.cells[row.index()][column.index()]
    }

    /// Sets the cell at the given column and row.
    pub fn set(&mut self, column: Coord, row: Coord, cell: Cell) {
        self.cells[row.index()][column.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, column: Coord, row: Coord) -> bool {
        self.get(column, row) == Cell::Empty
    }

    /// Counts the stones belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Stone(side))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "side", rename_all = "snake_case")]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Side),
    /// Game ended with equal stone counts.
    Draw,
}

impl Outcome {
    /// Returns true once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(*side),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
