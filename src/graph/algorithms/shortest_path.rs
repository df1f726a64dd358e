//! Single-source shortest paths (Dijkstra).
//!
//! Uses the array-based O(V²) selection loop rather than a binary heap: the
//! graphs built from mazes are small and bounded, and the dense scan matches
//! the adjacency-matrix layout.

use crate::config::INFINITY;
use crate::graph::{Weight, WeightedGraph};

use super::traversal::Predecessors;

/// The result of a Dijkstra run from `source` towards `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Start node.
    pub source: usize,
    /// Goal node.
    pub target: usize,
    /// Total weight of the shortest path, `None` when unreachable.
    pub distance: Option<Weight>,
    /// Predecessor tree built while searching.
    pub predecessors: Predecessors,
}

impl ShortestPath {
    /// Returns true if `target` is reachable from `source`.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Reconstructs the node sequence `source -> .. -> target`.
    pub fn path(&self) -> Option<Vec<usize>> {
        self.distance?;
        self.predecessors.path_to(self.target)
    }
}

/// Computes the shortest path from `source` to `target`.
///
/// Each iteration selects the unvisited node with the smallest tentative
/// distance. The loop stops as soon as that node is `target`: with positive
/// weights its distance is final at that point. Only positive-weight edges
/// are relaxed. Out-of-range endpoints give an unreachable result.
pub fn dijkstra<G: WeightedGraph>(graph: &G, source: usize, target: usize) -> ShortestPath {
    let n = graph.node_count();
    let mut predecessors = Predecessors::new(source, n);

    if source >= n || target >= n {
        return ShortestPath {
            source,
            target,
            distance: None,
            predecessors,
        };
    }

    let mut dist = vec![INFINITY; n];
    let mut visited = vec![false; n];
    dist[source] = 0;

    for _ in 0..n {
        let mut selected = None;
        let mut min = INFINITY;
        for v in 0..n {
            if !visited[v] && dist[v] < min {
                min = dist[v];
                selected = Some(v);
            }
        }

        let Some(u) = selected else {
            break;
        };
        if u == target {
            log_event!(trace, node = u, distance = min, "dijkstra reached target");
            break;
        }
        visited[u] = true;

        for (v, w) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = dist[u].saturating_add(w);
            if candidate < dist[v] {
                dist[v] = candidate;
                predecessors.set(v, u);
            }
        }
    }

    let distance = (dist[target] != INFINITY).then_some(dist[target]);
    log_event!(debug, source, target, ?distance, "dijkstra finished");

    ShortestPath {
        source,
        target,
        distance,
        predecessors,
    }
}
