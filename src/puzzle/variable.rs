use std::fmt;
use std::fmt::Display;

/// Which way a slot runs through the grid
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Direction {
    Across,
    Down,
}

/// One fillable slot of the grid
///
/// A slot is identified by its starting cell, its direction and its length.
/// Two slots may start at the same cell if they run in different directions.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid cells covered by this slot, in letter order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Variable {
            row,
            col,
            direction,
            length,
        } = *self;
        (0..length).map(move |k| match direction {
            Direction::Across => (row, col + k),
            Direction::Down => (row + k, col),
        })
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(
            f,
            "({}, {}) {} [{}]",
            self.row, self.col, direction, self.length
        )
    }
}
