//! # `mazegraph` - Graph-Backed Maze Toolkit
//!
//! Generates, represents and solves grid mazes by modelling them as weighted
//! graphs and running classical graph algorithms over them.
//!
//! ## Architecture
//!
//! The crate is stratified leaf-first:
//!
//! 1. **Collections** (`DisjointSet`):
//!    - Union-find with path compression and union-by-rank
//!    - Cycle detection for Kruskal, both on graphs and on maze lattices
//!
//! 2. **Graphs** (`GraphMatrix`, `GraphList`):
//!    - Two equivalent weighted representations with lossless conversion
//!    - `Directed` / `Undirected` edge markers
//!    - A shared `WeightedGraph` trait every algorithm is generic over
//!
//! 3. **Algorithms** (`graph::algorithms`):
//!    - BFS, Dijkstra, Prim, Kruskal
//!    - Connected components, topological order, Floyd–Warshall critical path
//!
//! 4. **Mazes** (`MazeGrid`):
//!    - Generation (backtracker, frontier Prim, Kruskal, graph-carved variants)
//!    - The grid ↔ graph bridge used for solving
//!    - Text/JSON persistence and plain-text rendering
//!
//! ## Error Model
//!
//! Algorithms never fail. Out-of-range indices are ignored, unreachable
//! targets are reported as `None`, and disconnected spanning-tree input yields
//! a smaller forest. Only I/O, parsing and configuration return [`MazeError`].
//!
//! ## Example
//!
//! ```rust
//! use mazegraph::{dijkstra, GraphMatrix};
//!
//! let mut graph = GraphMatrix::new(4);
//! graph.add_edge(0, 1, 2);
//! graph.add_edge(1, 2, 2);
//! graph.add_edge(0, 2, 7);
//! graph.add_edge(2, 3, 1);
//!
//! let result = dijkstra(&graph, 0, 3);
//! assert_eq!(result.distance, Some(5));
//! assert_eq!(result.path(), Some(vec![0, 1, 2, 3]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod maze;

pub use collections::DisjointSet;
pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use graph::algorithms::{
    all_pairs_shortest, bfs, connected_components, critical_path, dijkstra, is_acyclic, kruskal,
    prim, topological_order, Bfs, Components, CriticalPath, Predecessors, ShortestPath,
    SpanningTree,
};
pub use graph::{
    DiGraphList, DiGraphMatrix, Directed, Edge, EdgeType, GraphList, GraphMatrix, Undirected,
    Weight, WeightedGraph,
};
pub use graph::list::{list_to_matrix, matrix_to_list};
pub use maze::{
    count_reachable_cells, generate, maze_to_graph, resolve, solve, verify_solution,
    with_solution, CellState, Coord, GenerationMethod, MazeGrid, MazeStats, Solution,
    SolveAlgorithm,
};

// Compile-time checks on the grid constants every buffer is sized from.
const _: () = {
    use config::{COLUMNS, MAX_DIMENSION, MAX_NODES, ROWS};

    assert!(ROWS >= 2 && COLUMNS >= 2);
    assert!(ROWS <= MAX_DIMENSION && COLUMNS <= MAX_DIMENSION);
    assert!(MAX_NODES == ROWS * COLUMNS);

    // Odd dimensions put both corners on the carving lattice.
    assert!(ROWS % 2 == 1 && COLUMNS % 2 == 1);

    // One byte per cell.
    assert!(core::mem::size_of::<maze::CellState>() == 1);
};
