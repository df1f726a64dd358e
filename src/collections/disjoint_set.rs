//! Disjoint Set (Union-Find) with path compression and union-by-rank.
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths
//!   through a shared reference.
//! - Flat `Vec` storage indexed by node id keeps every pass cache friendly.
//! - Path compression and union-by-rank give amortized near-constant time.
//!
//! Out-of-range ids never panic: `find` returns the id unchanged and `union`
//! does nothing.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over ids `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers.
    /// Uses `Cell` to allow path compression with shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, .., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
        }
    }

    /// Creates an empty disjoint set with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Makes `id` a singleton set: `parent[id] = id`, `rank[id] = 0`.
    ///
    /// Storage grows to cover `id`; any ids skipped over become singletons too.
    pub fn make_set(&mut self, id: usize) {
        while self.parent.len() <= id {
            let next = self.parent.len();
            self.parent.push(Cell::new(next));
            self.rank.push(0);
        }
        self.parent[id].set(id);
        self.rank[id] = 0;
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// This operation is "logically const" but performs internal mutation (path
    /// compression) through `Cell`. Every node visited on the way up ends up
    /// pointing directly at the root.
    pub fn find(&self, id: usize) -> usize {
        if id >= self.parent.len() {
            return id;
        }

        // 1. Find root
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // 2. Compress path
        let mut curr = id;
        while curr != root {
            let parent_cell = &self.parent[curr];
            let parent = parent_cell.get();
            parent_cell.set(root);
            curr = parent;
        }

        root
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// On equal ranks the root of `id2` is attached under the root of `id1`
    /// and the rank of `id1`'s root grows by one.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        if id1 >= self.len() || id2 >= self.len() {
            return false;
        }

        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        // Union by rank
        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            // Attach 1 to 2
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            // Attach 2 to 1
            self.parent[root2].set(root1);
        } else {
            // Same rank, attach 2 to 1 and increment rank of 1
            self.parent[root2].set(root1);
            self.rank[root1] = self.rank[root1].saturating_add(1);
        }

        true
    }

    /// Returns `true` if `id1` and `id2` belong to the same set.
    pub fn same_set(&self, id1: usize, id2: usize) -> bool {
        self.find(id1) == self.find(id2)
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        (0..self.len()).filter(|&id| self.parent[id].get() == id).count()
    }

    /// Returns the rank of `id`'s entry (0 for out-of-range ids).
    pub fn rank(&self, id: usize) -> u8 {
        self.rank.get(id).copied().unwrap_or(0)
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new(3);
        let (a, b, c) = (0, 1, 2);

        assert_eq!(ds.find(a), a);
        assert_eq!(ds.find(b), b);

        assert!(ds.union(a, b));
        assert_eq!(ds.find(a), ds.find(b));
        assert_ne!(ds.find(a), ds.find(c));

        assert!(ds.union(b, c));
        assert_eq!(ds.find(a), ds.find(c));

        // Already united
        assert!(!ds.union(a, c));
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn test_union_tie_attaches_second_under_first() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(2, 3));
        assert_eq!(ds.find(3), 2);
        assert_eq!(ds.rank(2), 1);

        // Lower rank root goes under the higher one regardless of argument order.
        assert!(ds.union(0, 3));
        assert_eq!(ds.find(0), 2);
        assert_eq!(ds.rank(2), 1);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut ds = DisjointSet::new(8);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(0, 2));
        assert!(ds.union(4, 5));
        assert!(ds.union(6, 7));
        assert!(ds.union(4, 6));
        assert!(ds.union(0, 4));

        let root = ds.find(7);
        for id in 0..8 {
            assert_eq!(ds.find(id), root);
            assert_eq!(ds.parent[id].get(), root);
        }
    }

    #[test]
    fn test_make_set_grows_and_resets() {
        let mut ds = DisjointSet::with_capacity(4);
        assert!(ds.is_empty());

        ds.make_set(3);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.set_count(), 4);

        assert!(ds.union(1, 3));
        ds.make_set(1);
        assert_eq!(ds.find(1), 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut ds = DisjointSet::new(2);
        assert_eq!(ds.find(9), 9);
        assert!(!ds.union(0, 9));
        assert_eq!(ds.set_count(), 2);
    }
}
