//! Minimum spanning trees: Prim and Kruskal.
//!
//! Both return a [`SpanningTree`]. On a connected graph the two trees have
//! the same total weight, though the chosen edges may differ when weights
//! tie. On a disconnected graph Prim covers only the component of node `0`
//! while Kruskal returns a spanning forest; neither treats this as an error.

use serde::{Deserialize, Serialize};

use crate::collections::DisjointSet;
use crate::config::INFINITY;
use crate::graph::{Edge, GraphMatrix, WeightedGraph};

/// The edges selected by a spanning-tree algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// Tree edges in selection order.
    pub edges: Vec<Edge>,
    /// Sum of the tree edge weights.
    pub total_weight: u64,
}

impl SpanningTree {
    fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| u64::from(e.weight)).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// Returns the number of tree edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree spans all `node_count` nodes.
    pub fn is_spanning(&self, node_count: usize) -> bool {
        self.edges.len() == node_count.saturating_sub(1)
    }

    /// Builds an undirected graph containing only the tree edges.
    pub fn to_graph(&self, node_count: usize) -> GraphMatrix {
        let mut graph = GraphMatrix::new(node_count);
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }
}

/// Prim's algorithm grown from node `0`.
///
/// `key[v]` holds the lightest edge connecting `v` to the growing tree. Each
/// round moves the cheapest outside node into the tree; the loop ends early
/// when no outside node is reachable.
pub fn prim<G: WeightedGraph>(graph: &G) -> SpanningTree {
    let n = graph.node_count();
    if n == 0 {
        return SpanningTree::default();
    }

    let mut key = vec![INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[0] = 0;

    for _ in 0..n {
        let mut selected = None;
        let mut min = INFINITY;
        for v in 0..n {
            if !in_tree[v] && key[v] < min {
                min = key[v];
                selected = Some(v);
            }
        }

        let Some(u) = selected else {
            break;
        };
        in_tree[u] = true;

        for (v, w) in graph.neighbors(u) {
            if !in_tree[v] && w < key[v] {
                key[v] = w;
                parent[v] = Some(u);
            }
        }
    }

    let edges: Vec<Edge> = (1..n)
        .filter_map(|v| parent[v].map(|u| Edge::new(u, v, graph.weight(u, v))))
        .collect();

    log_event!(debug, nodes = n, edges = edges.len(), "prim finished");
    SpanningTree::from_edges(edges)
}

/// Kruskal's algorithm.
///
/// Edges are collected once each, sorted by weight with a stable sort (ties
/// keep collection order), then accepted greedily whenever their endpoints
/// lie in different disjoint-set components.
pub fn kruskal<G: WeightedGraph>(graph: &G) -> SpanningTree {
    let n = graph.node_count();
    let wanted = n.saturating_sub(1);

    let mut candidates = graph.edges();
    candidates.sort_by_key(|e| e.weight);

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(wanted);
    for edge in candidates {
        if edges.len() >= wanted {
            break;
        }
        if sets.union(edge.from, edge.to) {
            log_event!(trace, from = edge.from, to = edge.to, weight = edge.weight, "kruskal accepted edge");
            edges.push(edge);
        }
    }

    log_event!(debug, nodes = n, edges = edges.len(), "kruskal finished");
    SpanningTree::from_edges(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphMatrix {
        let mut g = GraphMatrix::new(5);
        for &(u, v, w) in &[
            (0, 1, 2),
            (0, 3, 6),
            (1, 2, 3),
            (1, 3, 8),
            (1, 4, 5),
            (2, 4, 7),
            (3, 4, 9),
        ] {
            g.add_edge(u, v, w);
        }
        g
    }

    #[test]
    fn test_prim_tree() {
        let tree = prim(&sample());
        assert_eq!(tree.total_weight, 16);
        assert!(tree.is_spanning(5));
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(0, 1, 2),
                Edge::new(1, 2, 3),
                Edge::new(0, 3, 6),
                Edge::new(1, 4, 5),
            ]
        );
    }

    #[test]
    fn test_kruskal_tree() {
        let tree = kruskal(&sample());
        assert_eq!(tree.total_weight, 16);
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(0, 1, 2),
                Edge::new(1, 2, 3),
                Edge::new(1, 4, 5),
                Edge::new(0, 3, 6),
            ]
        );
    }

    #[test]
    fn test_kruskal_ties_keep_collection_order() {
        let mut g = GraphMatrix::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(0, 2, 1);
        g.add_edge(0, 1, 1);
        let tree = kruskal(&g);
        assert_eq!(tree.edges, vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1)]);
    }

    #[test]
    fn test_disconnected_input_yields_fewer_edges() {
        let mut g = GraphMatrix::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(2, 3, 1);

        let p = prim(&g);
        assert_eq!(p.edge_count(), 1);
        assert!(!p.is_spanning(4));

        let k = kruskal(&g);
        assert_eq!(k.edge_count(), 2);
        assert!(!k.is_spanning(4));
    }

    #[test]
    fn test_empty_and_single_node() {
        assert_eq!(prim(&GraphMatrix::new(0)), SpanningTree::default());
        assert_eq!(kruskal(&GraphMatrix::new(0)), SpanningTree::default());
        assert!(prim(&GraphMatrix::new(1)).is_spanning(1));
    }

    #[test]
    fn test_to_graph_contains_tree_edges() {
        let tree = kruskal(&sample());
        let g = tree.to_graph(5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.weight(4, 1), 5);
    }
}
