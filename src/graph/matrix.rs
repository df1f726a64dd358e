//! `GraphMatrix`: a dense adjacency-matrix graph.
//!
//! Weights live in one contiguous row-major `Vec<Weight>` of
//! `node_count × node_count` entries, so row scans (the inner loop of
//! Dijkstra and Prim) walk memory linearly. A weight of `0` means "no edge".
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new` / `reset` | \(O(n^2)\) | Zero-fills the table |
//! | `add_edge` / `remove_edge` | \(O(1)\) | Writes both directions when undirected |
//! | `weight` | \(O(1)\) | Out-of-range answers `0` |
//! | `neighbors` | \(O(n)\) | Scans one row |
//! | `edges` | \(O(n^2)\) | Row-major, `i < j` when undirected |

use std::fmt;
use std::marker::PhantomData;

use super::{Directed, EdgeType, Undirected, Weight, WeightedGraph};

/// A weighted graph stored as a dense adjacency matrix.
///
/// For undirected graphs the matrix is symmetric with a zero diagonal.
#[derive(Clone, PartialEq, Eq)]
pub struct GraphMatrix<Ty = Undirected> {
    weights: Vec<Weight>,
    node_count: usize,
    _kind: PhantomData<Ty>,
}

/// A directed adjacency-matrix graph.
pub type DiGraphMatrix = GraphMatrix<Directed>;

impl GraphMatrix<Undirected> {
    /// Creates an undirected graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self::with_nodes(node_count)
    }
}

impl GraphMatrix<Directed> {
    /// Creates a directed graph with `node_count` nodes and no arcs.
    pub fn new_directed(node_count: usize) -> Self {
        Self::with_nodes(node_count)
    }
}

impl<Ty: EdgeType> GraphMatrix<Ty> {
    /// Creates a graph of either kind with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            weights: vec![0; node_count * node_count],
            node_count,
            _kind: PhantomData,
        }
    }

    /// Resets the graph to `node_count` nodes and no edges.
    ///
    /// The previous contents are discarded entirely; nothing survives a reset.
    pub fn reset(&mut self, node_count: usize) {
        self.weights.clear();
        self.weights.resize(node_count * node_count, 0);
        self.node_count = node_count;
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> Option<usize> {
        if from < self.node_count && to < self.node_count {
            Some(from * self.node_count + to)
        } else {
            None
        }
    }

    /// Adds (or re-weights) the edge `from - to`.
    ///
    /// Does nothing if either node is out of range, `from == to`, or the
    /// weight is `0`. Adding an existing edge overwrites its weight; it does
    /// not accumulate.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        if weight == 0 {
            return;
        }
        self.store(from, to, weight);
    }

    /// Removes the edge `from - to` (both directions when undirected).
    pub fn remove_edge(&mut self, from: usize, to: usize) {
        self.store(from, to, 0);
    }

    fn store(&mut self, from: usize, to: usize, weight: Weight) {
        if from == to {
            return;
        }
        let Some(idx) = self.index(from, to) else {
            return;
        };
        self.weights[idx] = weight;
        if !Ty::is_directed() {
            let back = to * self.node_count + from;
            self.weights[back] = weight;
        }
    }

    /// Returns one row of the matrix, or an empty slice for out-of-range nodes.
    pub fn row(&self, node: usize) -> &[Weight] {
        if node < self.node_count {
            let start = node * self.node_count;
            &self.weights[start..start + self.node_count]
        } else {
            &[]
        }
    }

    /// Returns the raw row-major weight table.
    pub fn as_slice(&self) -> &[Weight] {
        &self.weights
    }

    /// Validates the structural invariants of the matrix.
    ///
    /// Checks that:
    /// 1. The table holds exactly `node_count²` entries
    /// 2. The diagonal is zero (no self loops)
    /// 3. For undirected graphs, `w(i, j) == w(j, i)`
    pub fn validate_invariants(&self) -> bool {
        let n = self.node_count;
        if self.weights.len() != n * n {
            return false;
        }
        for i in 0..n {
            if self.weights[i * n + i] != 0 {
                return false;
            }
            if !Ty::is_directed() {
                for j in (i + 1)..n {
                    if self.weights[i * n + j] != self.weights[j * n + i] {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl<Ty: EdgeType> WeightedGraph for GraphMatrix<Ty> {
    type Kind = Ty;

    fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    fn weight(&self, from: usize, to: usize) -> Weight {
        self.index(from, to).map_or(0, |idx| self.weights[idx])
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(v, &w)| (v, w))
    }
}

impl Default for GraphMatrix<Undirected> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<Ty: EdgeType> fmt::Debug for GraphMatrix<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphMatrix")
            .field("node_count", &self.node_count)
            .field("edge_count", &self.edge_count())
            .field("directed", &Ty::is_directed())
            .finish()
    }
}

/// Plain-text dump of the top-left 10×10 corner of the matrix.
impl<Ty: EdgeType> fmt::Display for GraphMatrix<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SHOWN: usize = 10;
        let n = self.node_count;
        let shown = n.min(SHOWN);
        let truncated = n > SHOWN;

        write!(f, "   ")?;
        for j in 0..shown {
            write!(f, "{j:3}")?;
        }
        if truncated {
            write!(f, " ...")?;
        }
        writeln!(f)?;

        for i in 0..shown {
            write!(f, "{i:2} ")?;
            for j in 0..shown {
                match self.weight(i, j) {
                    0 => write!(f, "  .")?,
                    w => write!(f, "{w:3}")?,
                }
            }
            if truncated {
                write!(f, " ...")?;
            }
            writeln!(f)?;
        }
        if truncated {
            writeln!(f, "...")?;
            writeln!(f, "(full matrix: {n} x {n})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = GraphMatrix::new(4);
        g.add_edge(0, 2, 5);
        assert_eq!(g.weight(0, 2), 5);
        assert_eq!(g.weight(2, 0), 5);
        assert_eq!(g.edge_count(), 1);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_re_adding_overwrites_weight() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(0, 1, 4);
        g.add_edge(1, 0, 9);
        assert_eq!(g.weight(0, 1), 9);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_zero_weight_does_not_remove() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(0, 1, 4);
        g.add_edge(1, 0, 0);
        g.add_edge(1, 2, 0);
        assert_eq!(g.weight(0, 1), 4);
        assert_eq!(g.weight(1, 0), 4);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_out_of_range_and_self_loops_are_ignored() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(0, 3, 1);
        g.add_edge(7, 1, 1);
        g.add_edge(1, 1, 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.weight(0, 3), 0);
        assert_eq!(g.weight(42, 42), 0);
        assert_eq!(g.neighbors(5).count(), 0);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_remove_edge_clears_both_directions() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(0, 1, 2);
        g.add_edge(1, 2, 3);
        g.remove_edge(1, 0);
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert!(g.has_edge(2, 1));
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(0, 1, 2);
        g.reset(5);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 0);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_edges_are_row_major_upper_triangle() {
        let mut g = GraphMatrix::new(4);
        g.add_edge(2, 3, 1);
        g.add_edge(1, 0, 7);
        g.add_edge(0, 3, 2);
        let edges: Vec<_> = g.edges().iter().map(|e| (e.from, e.to, e.weight)).collect();
        assert_eq!(edges, vec![(0, 1, 7), (0, 3, 2), (2, 3, 1)]);
        assert_eq!(g.total_weight(), 10);
    }

    #[test]
    fn test_directed_stores_one_direction() {
        let mut g = DiGraphMatrix::new_directed(3);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges().len(), 2);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_display_truncates_large_graphs() {
        let mut g = GraphMatrix::new(12);
        g.add_edge(0, 1, 3);
        let text = g.to_string();
        assert!(text.contains("(full matrix: 12 x 12)"));
        assert!(text.lines().nth(1).unwrap().contains("  3"));
    }
}
