//! Replay strategy: the defining bipartition computation.
//!
//! For each bar, the remaining forest edges are re-merged through a fresh
//! disjoint set — order does not matter, only connectivity — and the two
//! surviving components around the removed edge's endpoints are read off.

use crate::forest::{DisjointSet, SpanningForest};
use crate::graph::Graph;

use super::{BarSplit, RatioError, map_splits, tree_sizes};

pub(super) fn compute(
    graph: &Graph,
    forest: &SpanningForest,
) -> Result<Vec<BarSplit>, RatioError> {
    let total_nodes = graph.node_count();
    let sizes = tree_sizes(total_nodes, &forest.edges);
    let edges = &forest.edges;

    map_splits(edges, |removed| {
        let mut set = DisjointSet::new(total_nodes);
        for edge in edges {
            if edge.edge == removed.edge {
                continue;
            }
            set.union(edge.source, edge.target);
        }

        let source_root = set.find(removed.source);
        let target_root = set.find(removed.target);

        let mut source_side = Vec::new();
        let mut target_side = Vec::new();
        if source_root != target_root {
            for node in 0..total_nodes {
                let root = set.find(node);
                if root == source_root {
                    source_side.push(node);
                } else if root == target_root {
                    target_side.push(node);
                }
            }
        }

        super::finish_split(
            removed,
            source_side,
            target_side,
            sizes[removed.source],
            total_nodes,
        )
    })
}
