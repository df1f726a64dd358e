//! Weighted graph representations and the algorithms that run over them.
//!
//! Graph implementations are organized into:
//! - `matrix`: dense adjacency matrix (`GraphMatrix`)
//! - `list`: insertion-ordered adjacency lists (`GraphList`)
//! - `generators`: random and structured graph builders
//! - `algorithms`: traversal, shortest path, spanning trees and analysis
//!
//! Both representations are generic over an [`EdgeType`] marker and implement
//! [`WeightedGraph`], so every algorithm accepts either one.

pub mod algorithms;
pub mod generators;
pub mod list;
pub mod matrix;

use serde::{Deserialize, Serialize};

pub use list::{DiGraphList, GraphList};
pub use matrix::{DiGraphMatrix, GraphMatrix};

/// Edge weight. Real edges are strictly positive; `0` means "no edge".
pub type Weight = u32;

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// A weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Origin node.
    pub from: usize,
    /// Destination node.
    pub to: usize,
    /// Edge weight, always `> 0`.
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge.
    pub const fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Read access shared by every graph representation.
///
/// Node ids are `0..node_count()`. Out-of-range lookups are not errors:
/// `weight` answers `0` and `neighbors` yields nothing.
pub trait WeightedGraph {
    /// Edge directionality of the representation.
    type Kind: EdgeType;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the weight of `from -> to`, or `0` if absent or out of range.
    fn weight(&self, from: usize, to: usize) -> Weight;

    /// Iterates `(neighbor, weight)` pairs leaving `node`.
    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Weight)> + '_;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Kind::is_directed()
    }

    /// Returns true if `from -> to` is an edge.
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to) > 0
    }

    /// Collects every edge once.
    ///
    /// Undirected edges are reported with `from < to`, in ascending `from`
    /// order and then in the representation's neighbor order.
    fn edges(&self) -> Vec<Edge> {
        let directed = self.is_directed();
        let mut edges = Vec::new();
        for from in 0..self.node_count() {
            for (to, weight) in self.neighbors(from) {
                if directed || from < to {
                    edges.push(Edge::new(from, to, weight));
                }
            }
        }
        edges
    }

    /// Returns the number of edges (undirected edges count once).
    fn edge_count(&self) -> usize {
        let arcs: usize = (0..self.node_count())
            .map(|u| self.neighbors(u).count())
            .sum();
        if self.is_directed() {
            arcs
        } else {
            arcs / 2
        }
    }

    /// Returns the sum of all edge weights (undirected edges count once).
    fn total_weight(&self) -> u64 {
        self.edges().iter().map(|e| u64::from(e.weight)).sum()
    }
}
