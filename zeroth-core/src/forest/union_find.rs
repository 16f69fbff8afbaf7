//! Union-find (disjoint component set) used by the spanning-forest sweep.
//!
//! Tracks which "living" component owns each node while edges are merged in
//! decreasing-weight order. Each live root carries the id of the bar whose
//! history it represents: a merge retires the source component's bar and
//! keeps the target component's, regardless of which root wins the union.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    component_bar: Vec<usize>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            component_bar: (0..n).collect(),
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Unions by size and returns the surviving root.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        if self.size[left] < self.size[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.size[left] += self.size[right];
        left
    }

    /// Returns the bar id carried by a live root.
    pub(crate) fn bar(&self, root: usize) -> usize {
        self.component_bar[root]
    }

    pub(crate) fn set_bar(&mut self, root: usize, bar: usize) {
        self.component_bar[root] = bar;
    }

    /// Returns the size of the component containing `node`.
    pub(crate) fn size_of(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }
}
