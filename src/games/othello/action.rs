//! Moves, coordinates and move errors.
//!
//! Every entry in the move log is a [`Turn`]: either a stone placed at a
//! coordinate or a pass. Coordinates are validated once, at construction.

use super::types::{BOARD_SIZE, Side};
use serde::{Deserialize, Serialize};

/// A column or row index on the board, always within `0..8`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Coord(u8);

impl Coord {
    /// All coordinates in ascending order.
    pub const ALL: [Coord; BOARD_SIZE] = [
        Coord(0),
        Coord(1),
        Coord(2),
        Coord(3),
        Coord(4),
        Coord(5),
        Coord(6),
        Coord(7),
    ];

    /// Creates a coordinate, or `None` when `value` is off the board.
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < BOARD_SIZE).then_some(Self(value))
    }

    /// Returns the value as an array index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Moves `delta` cells along the axis, staying on the board.
    pub fn offset(self, delta: i8) -> Option<Self> {
        self.0.checked_add_signed(delta).and_then(Self::new)
    }
}

/// Coordinate outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("coordinate {value} is outside 0-7")]
pub struct CoordError {
    /// Rejected value.
    pub value: u8,
}

impl std::error::Error for CoordError {}

impl TryFrom<u8> for Coord {
    type Error = CoordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CoordError { value })
    }
}

impl From<Coord> for u8 {
    fn from(coord: Coord) -> Self {
        coord.0
    }
}

/// One entry of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Turn {
    /// A stone placed by `side`.
    Placement {
        /// The side that moved.
        side: Side,
        /// Column of the placed stone.
        column: Coord,
        /// Row of the placed stone.
        row: Coord,
    },
    /// `side` gave up its turn.
    Pass {
        /// The side that passed.
        side: Side,
    },
}

/// Formats as `3,5W` for a placement and `passB` for a pass.
impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Placement { side, column, row } => {
                write!(f, "{},{}{}", column, row, side.initial())
            }
            Turn::Pass { side } => write!(f, "pass{}", side.initial()),
        }
    }
}

/// Reasons the rule engine rejects a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The side tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongSide(Side),

    /// The target cell already holds a stone.
    #[display("Cell {},{} is already occupied", _0, _1)]
    Occupied(Coord, Coord),

    /// The placement would not capture anything.
    #[display("Placing at {},{} captures no stones", _0, _1)]
    NoCapture(Coord, Coord),
}

impl std::error::Error for MoveError {}
