//! Maze generation.
//!
//! Most generators work on the *carving lattice*: cells whose row and column
//! are both even. Lattice cells become open, and opening the single cell
//! between two lattice neighbors links them. On odd dimensions both corners
//! are lattice cells.
//!
//! | Method | Structure |
//! |--------|-----------|
//! | `Random` | centre-weighted noise, may be unsolvable |
//! | `Backtracker` | perfect maze, long corridors |
//! | `Frontier` | perfect maze, many short branches |
//! | `Kruskal` | perfect maze, optional cycles |
//! | `SpanningTree` | perfect maze from Prim over random weights |
//! | `GraphDfs` | perfect maze from a DFS spanning graph |
//! | `RandomGraph` | random lattice graph, may be unsolvable |

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cell::{CellState, Coord};
use super::grid::{MazeGrid, DIRECTIONS};
use super::solve::{resolve, SolveAlgorithm};
use crate::collections::DisjointSet;
use crate::config::MazeConfig;
use crate::error::{MazeError, Result};
use crate::graph::algorithms::prim;
use crate::graph::generators::{dfs_spanning_graph, random_grid_graph, weighted_grid_graph};
use crate::graph::WeightedGraph;

/// Generation algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMethod {
    /// Centre-weighted random fill.
    Random = 1,
    /// Stack-based recursive backtracker.
    Backtracker = 2,
    /// Randomized Prim frontier growth.
    Frontier = 3,
    /// Randomized Kruskal over lattice walls.
    Kruskal = 4,
    /// Prim minimum spanning tree over a randomly weighted lattice graph.
    SpanningTree = 5,
    /// Depth-first spanning graph over the lattice.
    GraphDfs = 6,
    /// Random lattice graph with shortcut attempts.
    RandomGraph = 7,
}

impl GenerationMethod {
    /// Every method in selector order.
    pub const ALL: [Self; 7] = [
        Self::Random,
        Self::Backtracker,
        Self::Frontier,
        Self::Kruskal,
        Self::SpanningTree,
        Self::GraphDfs,
        Self::RandomGraph,
    ];

    /// Numeric selector, `1..=7`.
    pub const fn selector(self) -> u8 {
        self as u8
    }

    /// Decodes a numeric selector.
    pub fn from_selector(selector: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.selector() == selector)
    }

    /// Lower-case name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Backtracker => "backtracker",
            Self::Frontier => "frontier",
            Self::Kruskal => "kruskal",
            Self::SpanningTree => "spanning-tree",
            Self::GraphDfs => "graph-dfs",
            Self::RandomGraph => "random-graph",
        }
    }

    /// Returns true if the method always connects every lattice cell.
    pub const fn is_spanning(self) -> bool {
        !matches!(self, Self::Random | Self::RandomGraph)
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenerationMethod {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(selector) = key.parse::<u8>() {
            return Self::from_selector(selector).ok_or_else(|| {
                MazeError::config(format!("generation selector must be 1..=7, got {selector}"))
            });
        }
        let key = key.replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key || m.name().replace('-', "") == key)
            .ok_or_else(|| MazeError::config(format!("unknown generation method `{s}`")))
    }
}

/// Generates a maze with `method` and post-processes it.
///
/// After carving, the in-grid orthogonal neighbors of the entry and exit are
/// opened, the corners are marked [`CellState::Entry`] and
/// [`CellState::Exit`], and the grid is solved with Dijkstra to fill
/// `has_solution` and `solution_steps`.
///
/// # Errors
/// Returns [`MazeError::Config`] if `config` does not validate.
pub fn generate<R: Rng + ?Sized>(
    method: GenerationMethod,
    config: &MazeConfig,
    rng: &mut R,
) -> Result<MazeGrid> {
    config.validate()?;

    let mut grid = MazeGrid::new(config.rows, config.columns).with_name(format!(
        "{method} {}x{}",
        config.rows, config.columns
    ));
    carve(method, &mut grid, config, rng);
    open_entry_and_exit(&mut grid);
    resolve(&mut grid, SolveAlgorithm::Dijkstra);

    log_event!(
        debug,
        %method,
        rows = config.rows,
        columns = config.columns,
        open = grid.open_count(),
        solved = grid.has_solution,
        steps = grid.solution_steps,
        "maze generated"
    );
    Ok(grid)
}

/// Runs only the carving stage of `method`, without post-processing.
pub fn carve<R: Rng + ?Sized>(
    method: GenerationMethod,
    grid: &mut MazeGrid,
    config: &MazeConfig,
    rng: &mut R,
) {
    match method {
        GenerationMethod::Random => carve_random(grid, rng),
        GenerationMethod::Backtracker => carve_backtracker(grid, rng),
        GenerationMethod::Frontier => carve_frontier(grid, rng),
        GenerationMethod::Kruskal => carve_kruskal(grid, config.cycle_probability, rng),
        GenerationMethod::SpanningTree => {
            let (lr, lc) = lattice_dims(grid);
            let weighted = weighted_grid_graph(lr, lc, rng);
            let tree = prim(&weighted).to_graph(lr * lc);
            carve_from_graph(grid, &tree, lc);
        }
        GenerationMethod::GraphDfs => {
            let (lr, lc) = lattice_dims(grid);
            carve_from_graph(grid, &dfs_spanning_graph(lr, lc, rng), lc);
        }
        GenerationMethod::RandomGraph => {
            let (lr, lc) = lattice_dims(grid);
            let graph = random_grid_graph(
                lr,
                lc,
                config.path_probability,
                config.diagonal_probability,
                rng,
            );
            carve_from_graph(grid, &graph, lc);
        }
    }
}

/// Number of lattice rows and columns of `grid`.
#[inline]
pub fn lattice_dims(grid: &MazeGrid) -> (usize, usize) {
    (grid.rows().div_ceil(2), grid.columns().div_ceil(2))
}

/// Grid coordinate of lattice node `node` in a lattice `lattice_columns` wide.
#[inline]
pub fn lattice_coord(node: usize, lattice_columns: usize) -> Coord {
    Coord::new(2 * (node / lattice_columns), 2 * (node % lattice_columns))
}

/// Returns `(between, target)` for a two-cell step from `from`, if `target` is
/// inside the grid.
#[inline]
fn two_step(grid: &MazeGrid, from: Coord, (dr, dc): (isize, isize)) -> Option<(Coord, Coord)> {
    let target = from.offset(2 * dr, 2 * dc)?;
    if !grid.in_bounds(target) {
        return None;
    }
    Some((from.offset(dr, dc)?, target))
}

/// Centre-weighted random fill.
///
/// A cell opens with probability `70 - 3 * d` percent (at least 20), where
/// `d` is its Manhattan distance to the centre. A second pass gives every open
/// cell a 30% chance to open a wall above it and another 30% for a wall to its
/// left.
pub fn carve_random<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) {
    grid.fill(CellState::Wall);
    let centre = Coord::new(grid.rows() / 2, grid.columns() / 2);

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let here = Coord::new(row, col);
            let chance = 70usize.saturating_sub(3 * here.manhattan(centre)).max(20);
            if rng.gen_range(0..100) < chance {
                grid.set(here, CellState::Path);
            }
        }
    }

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            if grid.get(Coord::new(row, col)) != Some(CellState::Path) {
                continue;
            }
            if row > 0 && !grid.is_open(Coord::new(row - 1, col)) && rng.gen_range(0..100) < 30 {
                grid.set(Coord::new(row - 1, col), CellState::Path);
            }
            if col > 0 && !grid.is_open(Coord::new(row, col - 1)) && rng.gen_range(0..100) < 30 {
                grid.set(Coord::new(row, col - 1), CellState::Path);
            }
        }
    }
}

/// Recursive backtracker, driven by an explicit stack from `(0, 0)`.
///
/// On each step the four directions are shuffled and the first unvisited
/// lattice cell two steps away is opened together with the wall between.
/// A cell with no unvisited lattice neighbor is popped.
pub fn carve_backtracker<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) {
    grid.fill(CellState::Wall);
    if grid.is_empty() {
        return;
    }

    let (lr, lc) = lattice_dims(grid);
    let mut visited = vec![false; grid.cell_count()];
    let mut stack = Vec::with_capacity(lr * lc);
    let mut directions = DIRECTIONS;

    let start = grid.entry();
    grid.set(start, CellState::Path);
    visited[0] = true;
    stack.push(start);

    while let Some(&current) = stack.last() {
        directions.shuffle(rng);
        let next = directions.iter().find_map(|&dir| {
            let (between, target) = two_step(grid, current, dir)?;
            let id = grid.node_of(target)?;
            (!visited[id]).then_some((between, target, id))
        });

        match next {
            Some((between, target, id)) => {
                grid.set(between, CellState::Path);
                grid.set(target, CellState::Path);
                visited[id] = true;
                debug_assert!(stack.len() < lr * lc, "backtracker stack over lattice size");
                stack.push(target);
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Randomized Prim frontier growth from `(0, 0)`.
///
/// The frontier holds unvisited lattice cells two steps from the region and
/// never holds a cell twice. A random frontier cell is opened and linked to
/// one random visited lattice neighbor, then its own unvisited lattice
/// neighbors join the frontier.
pub fn carve_frontier<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) {
    grid.fill(CellState::Wall);
    if grid.is_empty() {
        return;
    }

    let capacity = grid.cell_count() * 2;
    let mut visited = vec![false; grid.cell_count()];
    let mut queued = vec![false; grid.cell_count()];
    let mut frontier: Vec<Coord> = Vec::with_capacity(capacity);

    let start = grid.entry();
    grid.set(start, CellState::Path);
    visited[0] = true;
    push_frontier(grid, start, &visited, &mut queued, &mut frontier, capacity);

    let mut links = Vec::with_capacity(4);
    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let Some(id) = grid.node_of(cell) else {
            continue;
        };
        if visited[id] {
            continue;
        }

        links.clear();
        for dir in DIRECTIONS {
            if let Some((between, target)) = two_step(grid, cell, dir) {
                if grid.node_of(target).is_some_and(|t| visited[t]) {
                    links.push(between);
                }
            }
        }

        grid.set(cell, CellState::Path);
        visited[id] = true;
        if let Some(&between) = links.choose(rng) {
            grid.set(between, CellState::Path);
        }
        push_frontier(grid, cell, &visited, &mut queued, &mut frontier, capacity);
    }
}

fn push_frontier(
    grid: &MazeGrid,
    from: Coord,
    visited: &[bool],
    queued: &mut [bool],
    frontier: &mut Vec<Coord>,
    capacity: usize,
) {
    for dir in DIRECTIONS {
        let Some((_, target)) = two_step(grid, from, dir) else {
            continue;
        };
        let Some(id) = grid.node_of(target) else {
            continue;
        };
        if !visited[id] && !queued[id] {
            queued[id] = true;
            debug_assert!(frontier.len() < capacity, "frontier over capacity");
            frontier.push(target);
        }
    }
}

/// Randomized Kruskal over the lattice.
///
/// Every wall between two horizontally or vertically adjacent lattice cells is
/// a candidate edge. Candidates are shuffled and a wall is opened when it
/// joins two different components. A wall inside one component is opened
/// with `cycle_probability` (clamped to `[0, 1]`), which adds loops.
pub fn carve_kruskal<R: Rng + ?Sized>(grid: &mut MazeGrid, cycle_probability: f64, rng: &mut R) {
    grid.fill(CellState::Wall);
    let (lr, lc) = lattice_dims(grid);
    let lattice = lr * lc;

    let mut walls = Vec::with_capacity(2 * lattice);
    for node in 0..lattice {
        grid.set(lattice_coord(node, lc), CellState::Path);
        let (r, c) = (node / lc, node % lc);
        if c + 1 < lc {
            walls.push((node, node + 1));
        }
        if r + 1 < lr {
            walls.push((node, node + lc));
        }
    }
    walls.shuffle(rng);

    let cycle_probability = cycle_probability.min(1.0);
    let mut sets = DisjointSet::new(lattice);
    #[cfg(feature = "tracing")]
    let mut removed = 0usize;
    for (a, b) in walls {
        let joins = sets.union(a, b);
        if joins || (cycle_probability > 0.0 && rng.gen_bool(cycle_probability)) {
            let (ca, cb) = (lattice_coord(a, lc), lattice_coord(b, lc));
            grid.set(
                Coord::new((ca.row + cb.row) / 2, (ca.col + cb.col) / 2),
                CellState::Path,
            );
            #[cfg(feature = "tracing")]
            {
                removed += 1;
            }
        }
    }
    log_event!(trace, lattice, removed, sets = sets.set_count(), "kruskal carve");
}

/// Carves a maze from a graph over the carving lattice.
///
/// Node `k` is the lattice cell [`lattice_coord(k, lattice_columns)`](lattice_coord).
/// Every node cell inside the grid is opened. An edge between two nodes in
/// the same grid row or column opens the whole straight corridor between
/// them; any other edge is ignored.
pub fn carve_from_graph<G: WeightedGraph>(grid: &mut MazeGrid, graph: &G, lattice_columns: usize) {
    grid.fill(CellState::Wall);
    if lattice_columns == 0 {
        return;
    }

    for node in 0..graph.node_count() {
        grid.set(lattice_coord(node, lattice_columns), CellState::Path);
    }

    #[cfg(feature = "tracing")]
    let mut skipped = 0usize;
    for edge in graph.edges() {
        let a = lattice_coord(edge.from, lattice_columns);
        let b = lattice_coord(edge.to, lattice_columns);
        if a.row == b.row {
            for col in a.col.min(b.col)..=a.col.max(b.col) {
                grid.set(Coord::new(a.row, col), CellState::Path);
            }
        } else if a.col == b.col {
            for row in a.row.min(b.row)..=a.row.max(b.row) {
                grid.set(Coord::new(row, a.col), CellState::Path);
            }
        } else {
            #[cfg(feature = "tracing")]
            {
                skipped += 1;
            }
        }
    }
    log_event!(trace, nodes = graph.node_count(), skipped, "carved from graph");
}

/// Opens the in-grid orthogonal neighbors of the entry and exit, then marks
/// the corners as [`CellState::Entry`] and [`CellState::Exit`].
pub fn open_entry_and_exit(grid: &mut MazeGrid) {
    if grid.is_empty() {
        return;
    }

    for corner in [grid.entry(), grid.exit()] {
        let around: Vec<Coord> = grid.neighbors(corner).collect();
        for cell in around {
            if grid.get(cell) == Some(CellState::Wall) {
                grid.set(cell, CellState::Path);
            }
        }
    }
    grid.set(grid.entry(), CellState::Entry);
    grid.set(grid.exit(), CellState::Exit);
}
