//! Random and structured graph builders.
//!
//! Grid-shaped builders number nodes row-major: node `r * columns + c` is the
//! cell at row `r`, column `c`. Every builder draws from the caller's RNG so a
//! seeded generator reproduces the same graph.

use rand::Rng;

use super::{GraphMatrix, Weight, WeightedGraph};

/// Row-major node id of `(row, col)` in a grid with `columns` columns.
#[inline(always)]
pub const fn grid_node(row: usize, col: usize, columns: usize) -> usize {
    row * columns + col
}

/// Orthogonal grid graph with unit weights.
pub fn grid_graph(rows: usize, columns: usize) -> GraphMatrix {
    let mut graph = GraphMatrix::new(rows * columns);
    for r in 0..rows {
        for c in 0..columns {
            let node = grid_node(r, c, columns);
            if c + 1 < columns {
                graph.add_edge(node, grid_node(r, c + 1, columns), 1);
            }
            if r + 1 < rows {
                graph.add_edge(node, grid_node(r + 1, c, columns), 1);
            }
        }
    }
    graph
}

/// Orthogonal grid graph where every edge gets a random weight in `1..=10`.
pub fn weighted_grid_graph<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> GraphMatrix {
    let mut graph = GraphMatrix::new(rows * columns);
    for r in 0..rows {
        for c in 0..columns {
            let node = grid_node(r, c, columns);
            if c + 1 < columns {
                graph.add_edge(node, grid_node(r, c + 1, columns), rng.gen_range(1..=10));
            }
            if r + 1 < rows {
                graph.add_edge(node, grid_node(r + 1, c, columns), rng.gen_range(1..=10));
            }
        }
    }
    graph
}

/// Sparse random grid graph.
///
/// Each orthogonal edge survives with `path_probability` percent (weight
/// `1..=10`). Then `rows * columns / 4` random node pairs are tried as
/// shortcuts; an unconnected pair is linked with `diagonal_probability`
/// percent (weight `5..=19`).
pub fn random_grid_graph<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    path_probability: u32,
    diagonal_probability: u32,
    rng: &mut R,
) -> GraphMatrix {
    let n = rows * columns;
    let mut graph = GraphMatrix::new(n);

    for r in 0..rows {
        for c in 0..columns {
            let node = grid_node(r, c, columns);
            if c + 1 < columns {
                let weight = rng.gen_range(1..=10);
                if rng.gen_range(0..100) < path_probability {
                    graph.add_edge(node, grid_node(r, c + 1, columns), weight);
                }
            }
            if r + 1 < rows {
                let weight = rng.gen_range(1..=10);
                if rng.gen_range(0..100) < path_probability {
                    graph.add_edge(node, grid_node(r + 1, c, columns), weight);
                }
            }
        }
    }

    if n > 0 {
        for _ in 0..n / 4 {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if a != b && !graph.has_edge(a, b) && rng.gen_range(0..100) < diagonal_probability {
                graph.add_edge(a, b, rng.gen_range(5..=19));
            }
        }
    }

    log_event!(debug, nodes = n, edges = graph.edge_count(), "random grid graph");
    graph
}

/// Depth-first spanning tree over the orthogonal grid.
///
/// Starts from a random cell and keeps extending to a random unvisited
/// neighbor (weight `1..=10`), backtracking when stuck. The result connects
/// every cell with exactly `rows * columns - 1` edges.
pub fn dfs_spanning_graph<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> GraphMatrix {
    let n = rows * columns;
    let mut graph = GraphMatrix::new(n);
    if n == 0 {
        return graph;
    }

    let mut visited = vec![false; n];
    let mut stack = Vec::with_capacity(n);
    let start = rng.gen_range(0..n);
    visited[start] = true;
    stack.push(start);

    let mut candidates = [0usize; 4];
    while let Some(&current) = stack.last() {
        let (r, c) = (current / columns, current % columns);
        let mut found = 0;

        // Up, right, down, left.
        if r > 0 && !visited[current - columns] {
            candidates[found] = current - columns;
            found += 1;
        }
        if c + 1 < columns && !visited[current + 1] {
            candidates[found] = current + 1;
            found += 1;
        }
        if r + 1 < rows && !visited[current + columns] {
            candidates[found] = current + columns;
            found += 1;
        }
        if c > 0 && !visited[current - 1] {
            candidates[found] = current - 1;
            found += 1;
        }

        if found == 0 {
            stack.pop();
            continue;
        }

        let next = candidates[rng.gen_range(0..found)];
        graph.add_edge(current, next, rng.gen_range(1..=10));
        visited[next] = true;
        debug_assert!(stack.len() < n, "dfs stack exceeded node count");
        stack.push(next);
    }

    graph
}

/// Complete graph on `node_count` nodes with random weights in `1..=20`.
pub fn complete_graph<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> GraphMatrix {
    let mut graph = GraphMatrix::new(node_count);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            graph.add_edge(i, j, rng.gen_range(1..=20));
        }
    }
    graph
}

/// A guaranteed chain `0 - 1 - .. - (n-1)` plus random local and long shortcuts.
///
/// The chain (weights `1..=10`) makes every node reachable. Each node then
/// tries three nearby partners (offset `-2..=2`, 40%, weight `1..=15`), and
/// `n / 4` random pairs get a 20% chance of a long edge (weight `5..=24`).
pub fn chain_graph<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> GraphMatrix {
    let n = node_count;
    let mut graph = GraphMatrix::new(n);
    if n == 0 {
        return graph;
    }

    for i in 0..n - 1 {
        graph.add_edge(i, i + 1, rng.gen_range(1..=10));
    }

    for i in 0..n {
        for _ in 0..3 {
            let Some(partner) = (i + rng.gen_range(0..5)).checked_sub(2) else {
                continue;
            };
            if partner < n && partner != i && !graph.has_edge(i, partner) && rng.gen_range(0..100) < 40 {
                let weight: Weight = rng.gen_range(1..=15);
                graph.add_edge(i, partner, weight);
            }
        }
    }

    for _ in 0..n / 4 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b && !graph.has_edge(a, b) && rng.gen_range(0..100) < 20 {
            graph.add_edge(a, b, rng.gen_range(5..=24));
        }
    }

    graph
}
