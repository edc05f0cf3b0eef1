//! Partially chosen move, built up one coordinate at a time.

use crate::games::othello::Coord;
use serde::{Deserialize, Serialize};

/// Which coordinate a selection sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Horizontal position.
    Column,
    /// Vertical position.
    Row,
}

/// Scratch state for the move being assembled by the side to move.
///
/// No legality checks happen here; the rule engine judges the move when it
/// is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingMove {
    column: Option<Coord>,
    row: Option<Coord>,
}

impl PendingMove {
    /// Creates an empty pending move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with one coordinate replaced.
    pub fn with(self, axis: Axis, value: Coord) -> Self {
        match axis {
            Axis::Column => Self {
                column: Some(value),
                ..self
            },
            Axis::Row => Self {
                row: Some(value),
                ..self
            },
        }
    }

    /// Replaces one coordinate in place.
    pub fn set(&mut self, axis: Axis, value: Coord) {
        *self = self.with(axis, value);
    }

    /// Selected column, if any.
    pub fn column(&self) -> Option<Coord> {
        self.column
    }

    /// Selected row, if any.
    pub fn row(&self) -> Option<Coord> {
        self.row
    }

    /// Selected value for `axis`, if any.
    pub fn get(&self, axis: Axis) -> Option<Coord> {
        match axis {
            Axis::Column => self.column,
            Axis::Row => self.row,
        }
    }

    /// Both coordinates, once both are chosen.
    pub fn complete(&self) -> Option<(Coord, Coord)> {
        self.column.zip(self.row)
    }

    /// True iff both coordinates are chosen.
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// Clears both coordinates.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
