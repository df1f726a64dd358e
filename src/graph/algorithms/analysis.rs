//! Whole-graph analysis: components, topological order and critical path.

use std::collections::VecDeque;

use crate::config::INFINITY;
use crate::graph::{Weight, WeightedGraph};

/// Connected components discovered by repeated BFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    count: usize,
    labels: Vec<usize>,
}

impl Components {
    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the component index of `node` (indices follow discovery order).
    pub fn label(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Returns the per-node component indices.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the members of every component, each sorted ascending.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (node, &label) in self.labels.iter().enumerate() {
            groups[label].push(node);
        }
        groups
    }

    /// Returns true if `a` and `b` share a component.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        matches!((self.label(a), self.label(b)), (Some(x), Some(y)) if x == y)
    }
}

/// Labels every node with its connected component.
///
/// Nodes are scanned in ascending order; each node not yet visited starts a
/// new BFS and increments the component count.
pub fn connected_components<G: WeightedGraph>(graph: &G) -> Components {
    const UNSEEN: usize = usize::MAX;

    let n = graph.node_count();
    let mut labels = vec![UNSEEN; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut count = 0;

    for root in 0..n {
        if labels[root] != UNSEEN {
            continue;
        }
        labels[root] = count;
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.neighbors(u) {
                if labels[v] == UNSEEN {
                    labels[v] = count;
                    queue.push_back(v);
                }
            }
        }
        count += 1;
    }

    log_event!(debug, nodes = n, components = count, "connected components");
    Components { count, labels }
}

/// Computes a topological order using Kahn's algorithm.
///
/// The adjacency is treated as directed: an undirected edge counts as two
/// opposite arcs and therefore as a cycle. Returns `None` when a cycle keeps
/// some nodes from ever reaching in-degree zero.
pub fn topological_order<G: WeightedGraph>(graph: &G) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let mut indeg = vec![0usize; n];
    for u in 0..n {
        for (v, _) in graph.neighbors(u) {
            indeg[v] += 1;
        }
    }

    // Sources in increasing order for determinism.
    let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in graph.neighbors(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() == n {
        Some(order)
    } else {
        log_event!(debug, emitted = order.len(), nodes = n, "cycle detected");
        None
    }
}

/// Returns true if the directed reading of `graph` has no cycle.
pub fn is_acyclic<G: WeightedGraph>(graph: &G) -> bool {
    topological_order(graph).is_some()
}

/// All-pairs shortest distances (Floyd–Warshall).
///
/// Works on a private row-major copy where absent edges become
/// [`INFINITY`] and the diagonal stays `0`.
pub fn all_pairs_shortest<G: WeightedGraph>(graph: &G) -> Vec<Weight> {
    let n = graph.node_count();
    let mut dist = vec![INFINITY; n * n];
    for i in 0..n {
        dist[i * n + i] = 0;
        for (j, w) in graph.neighbors(i) {
            if i != j {
                dist[i * n + j] = w;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i * n + k];
            if d_ik == INFINITY {
                continue;
            }
            for j in 0..n {
                let d_kj = dist[k * n + j];
                if d_kj == INFINITY {
                    continue;
                }
                if let Some(through) = d_ik.checked_add(d_kj) {
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                    }
                }
            }
        }
    }
    dist
}

/// The pair of nodes whose shortest distance is the largest finite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalPath {
    /// Start node.
    pub from: usize,
    /// End node.
    pub to: usize,
    /// Shortest distance between `from` and `to`.
    pub distance: Weight,
}

/// Finds the longest finite shortest-path distance over all node pairs.
///
/// Pairs are scanned row-major and only a strictly larger distance replaces
/// the current best. Returns `None` when no pair has a positive finite
/// distance (for example, a graph without edges).
pub fn critical_path<G: WeightedGraph>(graph: &G) -> Option<CriticalPath> {
    let n = graph.node_count();
    let dist = all_pairs_shortest(graph);

    let mut best: Option<CriticalPath> = None;
    for from in 0..n {
        for to in 0..n {
            let d = dist[from * n + to];
            if d == INFINITY || d == 0 {
                continue;
            }
            if best.map_or(true, |b| d > b.distance) {
                best = Some(CriticalPath {
                    from,
                    to,
                    distance: d,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraphMatrix, GraphMatrix};

    #[test]
    fn test_components_count_and_labels() {
        let mut g = GraphMatrix::new(6);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(3, 4, 1);

        let c = connected_components(&g);
        assert_eq!(c.count(), 3);
        assert_eq!(c.labels(), &[0, 0, 0, 1, 1, 2]);
        assert!(c.connected(0, 2));
        assert!(!c.connected(2, 3));
        assert_eq!(c.groups(), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_topological_order_of_dag() {
        let mut g = DiGraphMatrix::new_directed(5);
        g.add_edge(0, 2, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(1, 4, 1);

        assert_eq!(topological_order(&g), Some(vec![0, 1, 2, 4, 3]));
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_topological_order_rejects_cycle() {
        let mut g = DiGraphMatrix::new_directed(4);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 1, 1);
        assert_eq!(topological_order(&g), None);
    }

    #[test]
    fn test_undirected_edge_reads_as_cycle() {
        let mut g = GraphMatrix::new(2);
        g.add_edge(0, 1, 1);
        assert!(!is_acyclic(&g));
        assert!(is_acyclic(&GraphMatrix::new(3)));
    }

    #[test]
    fn test_critical_path_picks_longest_shortest_distance() {
        // 0 -3- 1 -4- 2, plus a shortcut 0 -5- 2
        let mut g = GraphMatrix::new(4);
        g.add_edge(0, 1, 3);
        g.add_edge(1, 2, 4);
        g.add_edge(0, 2, 5);

        let cp = critical_path(&g).unwrap();
        assert_eq!(cp, CriticalPath { from: 0, to: 2, distance: 5 });

        let dist = all_pairs_shortest(&g);
        assert_eq!(dist[4 + 3], INFINITY);
        assert_eq!(dist[4 + 2], 4);
    }

    #[test]
    fn test_critical_path_without_edges() {
        assert_eq!(critical_path(&GraphMatrix::new(3)), None);
    }
}
