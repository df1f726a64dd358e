//! Graph algorithms generic over [`WeightedGraph`](crate::graph::WeightedGraph).
//!
//! | Algorithm | Complexity | Result |
//! |-----------|------------|--------|
//! | `bfs` | \(O(n + m)\) list, \(O(n^2)\) matrix | `Predecessors` |
//! | `dijkstra` | \(O(n^2)\) | `ShortestPath` |
//! | `prim` | \(O(n^2)\) | `SpanningTree` |
//! | `kruskal` | \(O(m \log m)\) | `SpanningTree` |
//! | `connected_components` | \(O(n + m)\) | `Components` |
//! | `topological_order` | \(O(n + m)\) | `Option<Vec<usize>>` |
//! | `critical_path` | \(O(n^3)\) | `Option<CriticalPath>` |

pub mod analysis;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use analysis::{
    all_pairs_shortest, connected_components, critical_path, is_acyclic, topological_order,
    Components, CriticalPath,
};
pub use shortest_path::{dijkstra, ShortestPath};
pub use spanning_tree::{kruskal, prim, SpanningTree};
pub use traversal::{bfs, Bfs, Predecessors};
