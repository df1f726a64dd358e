//! Supporting collections for the graph and maze algorithms.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
