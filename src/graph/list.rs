//! `GraphList`: an adjacency-list graph with insertion-ordered neighbors.
//!
//! Each node owns a `Vec<(neighbor, weight)>`. Entries keep the order in
//! which edges were first added; re-adding an edge updates the weight in
//! place, so a list never holds two entries for the same neighbor.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\text{degree})\) | Checks for an existing entry first |
//! | `remove_edge` | \(O(\text{degree})\) | Linear scan of both lists |
//! | `weight` | \(O(\text{degree})\) | Linear scan of `from`'s list |
//! | `neighbors` | \(O(1)\) | Iterates the list directly |

use std::fmt;
use std::marker::PhantomData;

use super::matrix::GraphMatrix;
use super::{Directed, EdgeType, Undirected, Weight, WeightedGraph};

/// A weighted graph stored as per-node adjacency lists.
///
/// For undirected graphs every entry `(v, w)` in `u`'s list is mirrored by
/// `(u, w)` in `v`'s list.
#[derive(Clone, PartialEq, Eq)]
pub struct GraphList<Ty = Undirected> {
    adjacency: Vec<Vec<(usize, Weight)>>,
    _kind: PhantomData<Ty>,
}

/// A directed adjacency-list graph.
pub type DiGraphList = GraphList<Directed>;

impl GraphList<Undirected> {
    /// Creates an undirected graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self::with_nodes(node_count)
    }
}

impl GraphList<Directed> {
    /// Creates a directed graph with `node_count` nodes and no arcs.
    pub fn new_directed(node_count: usize) -> Self {
        Self::with_nodes(node_count)
    }
}

impl<Ty: EdgeType> GraphList<Ty> {
    /// Creates a graph of either kind with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            _kind: PhantomData,
        }
    }

    /// Resets the graph to `node_count` nodes and no edges.
    pub fn reset(&mut self, node_count: usize) {
        self.adjacency.clear();
        self.adjacency.resize_with(node_count, Vec::new);
    }

    fn upsert(list: &mut Vec<(usize, Weight)>, to: usize, weight: Weight) {
        match list.iter_mut().find(|(v, _)| *v == to) {
            Some(entry) => entry.1 = weight,
            None => list.push((to, weight)),
        }
    }

    /// Adds (or re-weights) the edge `from - to`.
    ///
    /// Does nothing if either node is out of range, `from == to`, or the
    /// weight is `0`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        let n = self.adjacency.len();
        if from >= n || to >= n || from == to || weight == 0 {
            return;
        }
        Self::upsert(&mut self.adjacency[from], to, weight);
        if !Ty::is_directed() {
            Self::upsert(&mut self.adjacency[to], from, weight);
        }
    }

    /// Removes the edge `from - to` (both directions when undirected).
    pub fn remove_edge(&mut self, from: usize, to: usize) {
        let n = self.adjacency.len();
        if from >= n || to >= n {
            return;
        }
        self.adjacency[from].retain(|&(v, _)| v != to);
        if !Ty::is_directed() {
            self.adjacency[to].retain(|&(v, _)| v != from);
        }
    }

    /// Returns the out-degree of `node` (0 for out-of-range nodes).
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Returns `node`'s adjacency list in insertion order.
    pub fn list(&self, node: usize) -> &[(usize, Weight)] {
        self.adjacency.get(node).map_or(&[][..], Vec::as_slice)
    }

    /// Validates that undirected entries are mirrored with equal weights and
    /// that no list holds duplicates, self loops or out-of-range ids.
    pub fn validate_invariants(&self) -> bool {
        let n = self.adjacency.len();
        for (u, list) in self.adjacency.iter().enumerate() {
            for (i, &(v, w)) in list.iter().enumerate() {
                if v >= n || v == u || w == 0 {
                    return false;
                }
                if list[..i].iter().any(|&(prev, _)| prev == v) {
                    return false;
                }
                if !Ty::is_directed() && !self.adjacency[v].contains(&(u, w)) {
                    return false;
                }
            }
        }
        true
    }

    /// Builds the adjacency-matrix form of this graph.
    ///
    /// Undirected edges are copied once each (the mirrored entry is skipped).
    pub fn to_matrix(&self) -> GraphMatrix<Ty> {
        let mut matrix = GraphMatrix::with_nodes(self.node_count());
        for (from, list) in self.adjacency.iter().enumerate() {
            for &(to, weight) in list {
                if Ty::is_directed() || to > from {
                    matrix.add_edge(from, to, weight);
                }
            }
        }
        matrix
    }

    /// Builds the adjacency-list form of `matrix`.
    ///
    /// Undirected edges are read from the upper triangle only so each one is
    /// inserted exactly once.
    pub fn from_matrix(matrix: &GraphMatrix<Ty>) -> Self {
        let n = matrix.node_count();
        let mut list = Self::with_nodes(n);
        for from in 0..n {
            for (to, weight) in matrix.neighbors(from) {
                if Ty::is_directed() || to > from {
                    list.add_edge(from, to, weight);
                }
            }
        }
        list
    }
}

impl<Ty: EdgeType> WeightedGraph for GraphList<Ty> {
    type Kind = Ty;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn weight(&self, from: usize, to: usize) -> Weight {
        self.list(from)
            .iter()
            .find(|(v, _)| *v == to)
            .map_or(0, |&(_, w)| w)
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.list(node).iter().copied()
    }
}

impl<Ty: EdgeType> From<&GraphMatrix<Ty>> for GraphList<Ty> {
    fn from(matrix: &GraphMatrix<Ty>) -> Self {
        Self::from_matrix(matrix)
    }
}

impl<Ty: EdgeType> From<&GraphList<Ty>> for GraphMatrix<Ty> {
    fn from(list: &GraphList<Ty>) -> Self {
        list.to_matrix()
    }
}

/// Converts an adjacency matrix into adjacency lists.
pub fn matrix_to_list<Ty: EdgeType>(matrix: &GraphMatrix<Ty>) -> GraphList<Ty> {
    GraphList::from_matrix(matrix)
}

/// Converts adjacency lists into an adjacency matrix.
pub fn list_to_matrix<Ty: EdgeType>(list: &GraphList<Ty>) -> GraphMatrix<Ty> {
    list.to_matrix()
}

impl Default for GraphList<Undirected> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<Ty: EdgeType> fmt::Debug for GraphList<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphList")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .field("directed", &Ty::is_directed())
            .finish()
    }
}

impl<Ty: EdgeType> fmt::Display for GraphList<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, list) in self.adjacency.iter().enumerate() {
            write!(f, "node {node}:")?;
            for (to, weight) in list {
                write!(f, " -> [{to} ({weight})]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraphMatrix;

    #[test]
    fn test_mirrored_insertion_order() {
        let mut g = GraphList::new(4);
        g.add_edge(0, 3, 1);
        g.add_edge(0, 1, 2);
        g.add_edge(2, 0, 5);
        assert_eq!(g.list(0), &[(3, 1), (1, 2), (2, 5)]);
        assert_eq!(g.list(2), &[(0, 5)]);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_re_adding_updates_in_place() {
        let mut g = GraphList::new(3);
        g.add_edge(0, 1, 4);
        g.add_edge(0, 2, 1);
        g.add_edge(1, 0, 9);
        assert_eq!(g.list(0), &[(1, 9), (2, 1)]);
        assert_eq!(g.weight(1, 0), 9);
        assert_eq!(g.edge_count(), 2);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_remove_edge_and_out_of_range() {
        let mut g = GraphList::new(3);
        g.add_edge(0, 1, 4);
        g.add_edge(0, 9, 4);
        g.remove_edge(1, 0);
        g.remove_edge(5, 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.weight(0, 1), 0);
        assert_eq!(g.weight(8, 1), 0);
    }

    #[test]
    fn test_zero_weight_matches_matrix() {
        let mut list = GraphList::new(3);
        let mut matrix = GraphMatrix::new(3);
        for (u, v, w) in [(0, 1, 4), (1, 0, 0), (1, 2, 0)] {
            list.add_edge(u, v, w);
            matrix.add_edge(u, v, w);
        }
        assert_eq!(list.weight(0, 1), 4);
        assert_eq!(list.edge_count(), 1);
        assert_eq!(list_to_matrix(&list), matrix);
    }

    #[test]
    fn test_matrix_list_round_trip() {
        let mut m = GraphMatrix::new(5);
        m.add_edge(0, 1, 2);
        m.add_edge(0, 3, 6);
        m.add_edge(1, 2, 3);
        m.add_edge(3, 4, 9);

        let list = matrix_to_list(&m);
        assert_eq!(list.edge_count(), 4);
        assert!(list.validate_invariants());
        assert_eq!(list_to_matrix(&list), m);
    }

    #[test]
    fn test_directed_conversion_keeps_arcs() {
        let mut m = DiGraphMatrix::new_directed(3);
        m.add_edge(2, 0, 1);
        m.add_edge(0, 2, 4);
        let list = DiGraphList::from(&m);
        assert_eq!(list.list(0), &[(2, 4)]);
        assert_eq!(list.list(2), &[(0, 1)]);
        assert_eq!(GraphMatrix::from(&list), m);
    }

    #[test]
    fn test_display_lists_neighbors() {
        let mut g = GraphList::new(2);
        g.add_edge(0, 1, 7);
        assert_eq!(g.to_string(), "node 0: -> [1 (7)]\nnode 1: -> [0 (7)]\n");
    }
}
