//! The maze grid: a row-major block of [`CellState`]s plus solution metadata.

use serde::{Deserialize, Serialize};

use super::cell::{CellState, Coord};
use crate::config::MAX_DIMENSION;
use crate::error::{MazeError, Result};

/// Orthogonal steps in the order up, right, down, left.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A `rows × columns` maze.
///
/// Cells are stored row-major, so cell `(r, c)` is also graph node
/// `r * columns + c` in the solving bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    /// Display name.
    pub name: String,
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
    /// Whether the exit was reachable from the entry when last solved.
    pub has_solution: bool,
    /// Moves on the last computed solution, `0` without one.
    pub solution_steps: usize,
}

impl MazeGrid {
    /// Creates a grid filled with walls.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            name: String::new(),
            rows,
            columns,
            cells: vec![CellState::Wall; rows * columns],
            has_solution: false,
            solution_steps: 0,
        }
    }

    /// Builds a grid from row-major cells.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidData`] if `cells.len() != rows * columns`.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<CellState>) -> Result<Self> {
        let grid = Self {
            name: String::new(),
            rows,
            columns,
            cells,
            has_solution: false,
            solution_steps: 0,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `coord` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.columns
    }

    /// Returns the node id of `coord`, or `None` outside the grid.
    #[inline]
    pub fn node_of(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then_some(coord.row * self.columns + coord.col)
    }

    /// Returns the coordinate of node `node`, or `None` outside the grid.
    #[inline]
    pub fn coord_of(&self, node: usize) -> Option<Coord> {
        (node < self.cells.len()).then(|| Coord::new(node / self.columns, node % self.columns))
    }

    /// Returns the state at `coord`.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.node_of(coord).map(|i| self.cells[i])
    }

    /// Overwrites the state at `coord`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(i) = self.node_of(coord) {
            self.cells[i] = state;
        }
    }

    /// Returns true if `coord` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(CellState::is_open)
    }

    /// Sets every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Entry position, the top-left corner.
    #[inline]
    pub const fn entry(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// Exit position, the bottom-right corner.
    #[inline]
    pub const fn exit(&self) -> Coord {
        Coord::new(self.rows.saturating_sub(1), self.columns.saturating_sub(1))
    }

    /// Row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterates rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        // chunks() rejects a zero size
        self.cells.chunks(self.columns.max(1))
    }

    /// Counts cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Counts non-wall cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// In-grid orthogonal neighbors of `coord` (up, right, down, left).
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| coord.offset(dr, dc))
            .filter(|&c| self.in_bounds(c))
    }

    /// Returns true if the grid holds exactly one entry at [`entry`](Self::entry)
    /// and exactly one exit at [`exit`](Self::exit).
    pub fn has_valid_endpoints(&self) -> bool {
        self.count(CellState::Entry) == 1
            && self.count(CellState::Exit) == 1
            && self.get(self.entry()) == Some(CellState::Entry)
            && self.get(self.exit()) == Some(CellState::Exit)
    }

    /// Checks the structural invariant `cells.len() == rows * columns`.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidData`] on a mismatch or a dimension outside
    /// `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        let expected = cell_count_for(self.rows, self.columns)?;
        if self.cells.len() != expected {
            return Err(MazeError::invalid_data(format!(
                "expected {expected} cells for a {} x {} grid, found {}",
                self.rows,
                self.columns,
                self.cells.len()
            )));
        }
        Ok(())
    }
}

/// Bounds both dimensions to `1..=MAX_DIMENSION` and returns the cell count.
pub(crate) fn cell_count_for(rows: usize, columns: usize) -> Result<usize> {
    for (label, value) in [("rows", rows), ("columns", columns)] {
        if !(1..=MAX_DIMENSION).contains(&value) {
            return Err(MazeError::invalid_data(format!(
                "{label} must be in 1..={MAX_DIMENSION}, got {value}"
            )));
        }
    }
    rows.checked_mul(columns).ok_or_else(|| {
        MazeError::invalid_data(format!("{rows} x {columns} grid is too large"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_walls() {
        let grid = MazeGrid::new(3, 4);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.count(CellState::Wall), 12);
        assert_eq!(grid.exit(), Coord::new(2, 3));
    }

    #[test]
    fn test_node_and_coord_mapping() {
        let grid = MazeGrid::new(3, 4);
        assert_eq!(grid.node_of(Coord::new(2, 1)), Some(9));
        assert_eq!(grid.coord_of(9), Some(Coord::new(2, 1)));
        assert_eq!(grid.node_of(Coord::new(3, 0)), None);
        assert_eq!(grid.coord_of(12), None);
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut grid = MazeGrid::new(2, 2);
        grid.set(Coord::new(5, 5), CellState::Path);
        assert_eq!(grid.open_count(), 0);
        assert!(!grid.is_open(Coord::new(5, 5)));
    }

    #[test]
    fn test_neighbors_stay_in_bounds() {
        let grid = MazeGrid::new(3, 3);
        let corner: Vec<_> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);
        assert_eq!(grid.neighbors(Coord::new(1, 1)).count(), 4);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(MazeGrid::from_cells(2, 2, vec![CellState::Path; 3]).is_err());
        assert!(MazeGrid::from_cells(2, 2, vec![CellState::Path; 4]).is_ok());
    }

    #[test]
    fn test_validate_bounds_dimensions() {
        let too_wide = MAX_DIMENSION + 1;
        assert!(matches!(
            MazeGrid::from_cells(1, too_wide, vec![CellState::Path; too_wide]),
            Err(MazeError::InvalidData(_))
        ));
        assert!(matches!(MazeGrid::from_cells(0, 3, Vec::new()), Err(MazeError::InvalidData(_))));
        assert_eq!(cell_count_for(MAX_DIMENSION, MAX_DIMENSION).unwrap(), MAX_DIMENSION * MAX_DIMENSION);
        assert!(cell_count_for(usize::MAX / 2 + 1, 2).is_err());
    }
}
