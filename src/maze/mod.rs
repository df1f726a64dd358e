//! Grid mazes built on the graph layer.
//!
//! - `cell`: [`CellState`] codes and [`Coord`]
//! - `grid`: the [`MazeGrid`] container
//! - `generate`: the seven generation methods and entry/exit post-processing
//! - `solve`: the grid → graph bridge, solvers and statistics
//! - `persist`: text and JSON persistence
//! - `render`: plain-text `Display`
//!
//! # Example
//!
//! ```
//! use mazegraph::{generate, solve, GenerationMethod, MazeConfig, SolveAlgorithm};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let maze = generate(GenerationMethod::Backtracker, &MazeConfig::default(), &mut rng)?;
//! assert!(maze.has_solution);
//!
//! let path = solve(&maze, SolveAlgorithm::Bfs).expect("backtracker mazes are solvable");
//! assert_eq!(path.steps, maze.solution_steps);
//! # Ok::<(), mazegraph::MazeError>(())
//! ```

pub mod cell;
pub mod generate;
pub mod grid;
pub mod persist;
pub mod render;
pub mod solve;

pub use cell::{CellState, Coord};
pub use generate::{
    carve, carve_backtracker, carve_frontier, carve_from_graph, carve_kruskal, carve_random,
    generate, open_entry_and_exit, GenerationMethod,
};
pub use grid::MazeGrid;
pub use solve::{
    count_reachable_cells, maze_to_graph, resolve, solve, verify_solution, with_solution,
    MazeStats, Solution, SolveAlgorithm,
};
