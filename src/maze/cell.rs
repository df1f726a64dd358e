//! Cell states and grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a single maze cell.
///
/// The discriminants are the numeric codes used by the text format.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Impassable cell.
    #[default]
    Wall = 0,
    /// Open corridor.
    Path = 1,
    /// Start cell, always `(0, 0)` after generation.
    Entry = 2,
    /// Goal cell, always the bottom-right corner after generation.
    Exit = 3,
    /// Marked as explored by a solver.
    Visited = 4,
    /// Marked as lying on a solution path.
    Solution = 5,
}

impl CellState {
    /// Every state in code order.
    pub const ALL: [Self; 6] = [
        Self::Wall,
        Self::Path,
        Self::Entry,
        Self::Exit,
        Self::Visited,
        Self::Solution,
    ];

    /// Returns the numeric code of the state.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a numeric code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Wall),
            1 => Some(Self::Path),
            2 => Some(Self::Entry),
            3 => Some(Self::Exit),
            4 => Some(Self::Visited),
            5 => Some(Self::Solution),
            _ => None,
        }
    }

    /// Returns true for every state except [`CellState::Wall`].
    #[inline(always)]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Character used by the plain-text rendering.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Path => ' ',
            Self::Entry => 'E',
            Self::Exit => 'S',
            Self::Visited => '.',
            Self::Solution => '*',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A `(row, col)` position in a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by `(dr, dc)`, or `None` if the result would be negative.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Manhattan distance to `other`.
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
        assert_eq!(CellState::from_code(6), None);
    }

    #[test]
    fn test_only_wall_is_closed() {
        assert!(!CellState::Wall.is_open());
        assert!(CellState::ALL[1..].iter().all(|s| s.is_open()));
    }

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(0, 3);
        assert_eq!(c.offset(0, -1), Some(Coord::new(0, 2)));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.manhattan(Coord::new(2, 1)), 4);
    }
}
