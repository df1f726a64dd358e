//! Plain-text rendering.

use std::fmt;

use super::grid::MazeGrid;

impl fmt::Display for MazeGrid {
    /// One line per row using [`CellState::symbol`](super::cell::CellState::symbol).
    /// The alternate form (`{:#}`) adds a wall border around the grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = f.alternate();
        let horizontal = "#".repeat(self.columns() + 2);

        if border {
            writeln!(f, "{horizontal}")?;
        }
        for row in self.row_slices() {
            if border {
                f.write_str("#")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            if border {
                f.write_str("#")?;
            }
            writeln!(f)?;
        }
        if border {
            writeln!(f, "{horizontal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::cell::{CellState, Coord};
    use crate::maze::grid::MazeGrid;

    #[test]
    fn test_symbols() {
        let mut grid = MazeGrid::new(2, 3);
        grid.set(Coord::new(0, 0), CellState::Entry);
        grid.set(Coord::new(0, 1), CellState::Solution);
        grid.set(Coord::new(0, 2), CellState::Visited);
        grid.set(Coord::new(1, 1), CellState::Path);
        grid.set(Coord::new(1, 2), CellState::Exit);

        assert_eq!(grid.to_string(), "E*.\n# S\n");
        assert_eq!(format!("{grid:#}"), "#####\n#E*.#\n## S#\n#####\n");
    }
}
