//! The grid ↔ graph bridge: solving, reachability and statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{CellState, Coord};
use super::grid::MazeGrid;
use crate::error::{MazeError, Result};
use crate::graph::algorithms::{bfs, dijkstra, Bfs};
use crate::graph::GraphMatrix;

/// Builds the solving graph of `grid`.
///
/// Node `row * columns + col` stands for cell `(row, col)`. Every pair of
/// 4-adjacent non-wall cells is joined by a unit-weight edge.
pub fn maze_to_graph(grid: &MazeGrid) -> GraphMatrix {
    let columns = grid.columns();
    let mut graph = GraphMatrix::new(grid.cell_count());

    for (node, state) in grid.cells().iter().enumerate() {
        if !state.is_open() {
            continue;
        }
        let (row, col) = (node / columns, node % columns);
        if col + 1 < columns && grid.cells()[node + 1].is_open() {
            graph.add_edge(node, node + 1, 1);
        }
        if row + 1 < grid.rows() && grid.cells()[node + columns].is_open() {
            graph.add_edge(node, node + columns, 1);
        }
    }
    graph
}

/// Algorithm used to solve a maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveAlgorithm {
    /// Dijkstra over the unit-weight solving graph.
    #[default]
    Dijkstra,
    /// Breadth-first search.
    Bfs,
}

impl fmt::Display for SolveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
        })
    }
}

impl FromStr for SolveAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "1" => Ok(Self::Dijkstra),
            "bfs" | "2" => Ok(Self::Bfs),
            other => Err(MazeError::config(format!("unknown solve algorithm `{other}`"))),
        }
    }
}

/// A path from the entry to the exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Node ids from entry to exit.
    pub nodes: Vec<usize>,
    /// The same path as grid coordinates.
    pub cells: Vec<Coord>,
    /// Number of moves, `nodes.len() - 1`.
    pub steps: usize,
}

/// Solves `grid` from node `0` to the last node.
///
/// Returns `None` when the exit cannot be reached, including when either
/// corner is a wall.
pub fn solve(grid: &MazeGrid, algorithm: SolveAlgorithm) -> Option<Solution> {
    if !grid.is_open(grid.entry()) || !grid.is_open(grid.exit()) {
        return None;
    }

    let graph = maze_to_graph(grid);
    let target = grid.cell_count() - 1;
    let nodes = match algorithm {
        SolveAlgorithm::Dijkstra => dijkstra(&graph, 0, target).path()?,
        SolveAlgorithm::Bfs => bfs(&graph, 0).path_to(target)?,
    };

    let cells = nodes.iter().filter_map(|&n| grid.coord_of(n)).collect();
    let steps = nodes.len() - 1;
    log_event!(debug, %algorithm, steps, "maze solved");
    Some(Solution {
        nodes,
        cells,
        steps,
    })
}

/// Solves `grid` and stores the outcome in `has_solution` and
/// `solution_steps`.
pub fn resolve(grid: &mut MazeGrid, algorithm: SolveAlgorithm) -> Option<Solution> {
    let solution = solve(grid, algorithm);
    grid.has_solution = solution.is_some();
    grid.solution_steps = solution.as_ref().map_or(0, |s| s.steps);
    solution
}

/// Returns true if the exit is reachable from the entry.
pub fn verify_solution(grid: &MazeGrid) -> bool {
    solve(grid, SolveAlgorithm::Bfs).is_some()
}

/// Counts the non-wall cells reachable from the entry (the entry included).
pub fn count_reachable_cells(grid: &MazeGrid) -> usize {
    if !grid.is_open(grid.entry()) {
        return 0;
    }
    Bfs::new(&maze_to_graph(grid), 0).count()
}

/// Returns a copy of `grid` with [`CellState::Solution`] on every path cell
/// of `solution` except the entry and the exit.
pub fn with_solution(grid: &MazeGrid, solution: &Solution) -> MazeGrid {
    let mut marked = grid.clone();
    for &cell in &solution.cells {
        if !matches!(marked.get(cell), Some(CellState::Entry | CellState::Exit | CellState::Wall) | None) {
            marked.set(cell, CellState::Solution);
        }
    }
    marked
}

/// Cell counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MazeStats {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub columns: usize,
    /// Wall cells.
    pub walls: usize,
    /// Non-wall cells.
    pub open: usize,
    /// Non-wall cells reachable from the entry.
    pub reachable: usize,
    /// Whether the exit is reachable.
    pub has_solution: bool,
    /// Moves on the shortest solution, `0` without one.
    pub solution_steps: usize,
}

impl MazeStats {
    /// Computes statistics for `grid`, solving it afresh.
    pub fn of(grid: &MazeGrid) -> Self {
        let solution = solve(grid, SolveAlgorithm::Bfs);
        let open = grid.open_count();
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            walls: grid.cell_count() - open,
            open,
            reachable: count_reachable_cells(grid),
            has_solution: solution.is_some(),
            solution_steps: solution.map_or(0, |s| s.steps),
        }
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Percentage of non-wall cells.
    #[allow(clippy::cast_precision_loss)]
    pub fn open_percent(&self) -> f64 {
        if self.cells() == 0 {
            return 0.0;
        }
        self.open as f64 * 100.0 / self.cells() as f64
    }

    /// Percentage of wall cells.
    pub fn wall_percent(&self) -> f64 {
        if self.cells() == 0 {
            return 0.0;
        }
        100.0 - self.open_percent()
    }
}

impl fmt::Display for MazeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size:      {} x {}", self.rows, self.columns)?;
        writeln!(f, "cells:     {}", self.cells())?;
        writeln!(f, "walls:     {} ({:.1}%)", self.walls, self.wall_percent())?;
        writeln!(f, "paths:     {} ({:.1}%)", self.open, self.open_percent())?;
        writeln!(f, "reachable: {}", self.reachable)?;
        if self.has_solution {
            write!(f, "solution:  {} steps", self.solution_steps)
        } else {
            write!(f, "solution:  none")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    /// E . #
    /// # . #
    /// # . S
    /// ```
    fn corridor() -> MazeGrid {
        use CellState::{Entry as E, Exit as X, Path as P, Wall as W};
        MazeGrid::from_cells(3, 3, vec![E, P, W, W, P, W, W, P, X]).unwrap()
    }

    #[test]
    fn test_maze_to_graph_links_open_neighbors() {
        let graph = maze_to_graph(&corridor());
        assert_eq!(crate::graph::WeightedGraph::edge_count(&graph), 4);
        assert_eq!(crate::graph::WeightedGraph::weight(&graph, 1, 4), 1);
        assert_eq!(crate::graph::WeightedGraph::weight(&graph, 0, 3), 0);
    }

    #[test]
    fn test_both_algorithms_find_the_corridor() {
        let grid = corridor();
        for algorithm in [SolveAlgorithm::Dijkstra, SolveAlgorithm::Bfs] {
            let solution = solve(&grid, algorithm).unwrap();
            assert_eq!(solution.nodes, vec![0, 1, 4, 7, 8]);
            assert_eq!(solution.steps, 4);
            assert_eq!(solution.cells[2], Coord::new(1, 1));
        }
    }

    #[test]
    fn test_blocked_maze_has_no_solution() {
        let mut grid = corridor();
        grid.set(Coord::new(1, 1), CellState::Wall);
        assert!(solve(&grid, SolveAlgorithm::Dijkstra).is_none());
        assert!(!verify_solution(&grid));

        grid.solution_steps = 9;
        assert!(resolve(&mut grid, SolveAlgorithm::Bfs).is_none());
        assert!(!grid.has_solution);
        assert_eq!(grid.solution_steps, 0);
        assert_eq!(count_reachable_cells(&grid), 2);
    }

    #[test]
    fn test_wall_entry_reaches_nothing() {
        let mut grid = corridor();
        grid.set(grid.entry(), CellState::Wall);
        assert_eq!(count_reachable_cells(&grid), 0);
        assert!(solve(&grid, SolveAlgorithm::Bfs).is_none());
    }

    #[test]
    fn test_with_solution_keeps_endpoints() {
        let grid = corridor();
        let solution = solve(&grid, SolveAlgorithm::Bfs).unwrap();
        let marked = with_solution(&grid, &solution);
        assert_eq!(marked.count(CellState::Solution), 3);
        assert_eq!(marked.get(marked.entry()), Some(CellState::Entry));
        assert_eq!(marked.get(marked.exit()), Some(CellState::Exit));
        assert!(verify_solution(&marked));
    }

    #[test]
    fn test_stats() {
        let stats = MazeStats::of(&corridor());
        assert_eq!(stats.walls, 4);
        assert_eq!(stats.open, 5);
        assert_eq!(stats.reachable, 5);
        assert!(stats.has_solution);
        assert_eq!(stats.solution_steps, 4);
        assert!((stats.open_percent() - 500.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("BFS".parse::<SolveAlgorithm>().unwrap(), SolveAlgorithm::Bfs);
        assert_eq!("dijkstra".parse::<SolveAlgorithm>().unwrap(), SolveAlgorithm::Dijkstra);
        assert!("astar".parse::<SolveAlgorithm>().is_err());
    }
}
