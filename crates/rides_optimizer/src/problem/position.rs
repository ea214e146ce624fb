use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An intersection of the city grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    row: u64,
    col: u64,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: u64, col: u64) -> Self {
        Position { row, col }
    }

    pub fn row(&self) -> u64 {
        self.row
    }

    pub fn col(&self) -> u64 {
        self.col
    }

    /// Manhattan distance, which is also the number of steps needed to drive
    /// from `self` to `to`. Saturates at `u64::MAX`.
    #[inline]
    pub fn distance(&self, to: &Position) -> u64 {
        self.row
            .abs_diff(to.row)
            .saturating_add(self.col.abs_diff(to.col))
    }
}

#[inline]
pub fn distance(from: Position, to: Position) -> u64 {
    from.distance(&to)
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u64, u64)> for Position {
    fn from((row, col): (u64, u64)) -> Self {
        Position { row, col }
    }
}
