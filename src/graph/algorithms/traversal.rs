//! Breadth-first traversal and predecessor trees.
//!
//! `Bfs` is an iterator yielding node ids in level order; `bfs` runs the same
//! traversal to completion and records the predecessor of every reached node.
//! Edge weights are ignored: every edge counts as one hop.

use std::collections::VecDeque;

use crate::graph::WeightedGraph;

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields node IDs (`usize`) in BFS order.
/// It uses an internal `VecDeque` and `Vec<bool>` for state management.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, G: WeightedGraph> Bfs<'a, G> {
    /// Creates a new BFS iterator starting from `start_node`.
    ///
    /// An out-of-range start yields nothing.
    pub fn new(graph: &'a G, start_node: usize) -> Self {
        let len = graph.node_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::with_capacity(len);

        if start_node < len {
            visited[start_node] = true;
            queue.push_back(start_node);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Returns true if `node` has been discovered so far.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }
}

impl<G: WeightedGraph> Iterator for Bfs<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbors(u) {
            if v < self.visited.len() && !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// A predecessor tree rooted at `source`.
///
/// Each entry holds the node preceding it on the computed path, or `None`
/// for the source itself and for nodes that were never reached. A fresh tree
/// is built by every call; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    source: usize,
    parents: Vec<Option<usize>>,
}

impl Predecessors {
    pub(crate) fn new(source: usize, node_count: usize) -> Self {
        Self {
            source,
            parents: vec![None; node_count],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, node: usize, parent: usize) {
        self.parents[node] = Some(parent);
    }

    /// Returns the root of the tree.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the predecessor of `node`, if any.
    pub fn get(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    /// Returns the raw predecessor array.
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Returns true if `node` is the source or has a predecessor.
    pub fn is_reached(&self, node: usize) -> bool {
        node < self.parents.len() && (node == self.source || self.parents[node].is_some())
    }

    /// Reconstructs the path `source -> .. -> target`.
    ///
    /// Walks predecessors backward from `target` and reverses the result.
    /// Returns `None` when `target` was not reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = self.parents[cur] {
            path.push(prev);
            cur = prev;
            if path.len() > self.parents.len() {
                return None;
            }
        }
        if cur != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }

    /// Number of edges on the path to `target`, if reached.
    pub fn hops(&self, target: usize) -> Option<usize> {
        self.path_to(target).map(|path| path.len() - 1)
    }
}

/// Runs a breadth-first search from `source` and returns its predecessor tree.
pub fn bfs<G: WeightedGraph>(graph: &G, source: usize) -> Predecessors {
    let n = graph.node_count();
    let mut tree = Predecessors::new(source, n);
    if source >= n {
        return tree;
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                tree.set(v, u);
                queue.push_back(v);
            }
        }
    }

    log_event!(
        trace,
        source,
        reached = visited.iter().filter(|&&seen| seen).count(),
        "bfs finished"
    );
    tree
}
