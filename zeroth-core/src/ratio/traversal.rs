//! Traversal strategy: one adjacency walk per removed edge.
//!
//! The forest adjacency is built once; each bar's sides are then the nodes
//! reachable from the removed edge's two endpoints without crossing that
//! edge. On a well-formed forest the walks never meet, and the shared size
//! check in `finish_split` catches any cycle that would make them overlap.

use crate::forest::{ForestEdge, SpanningForest};
use crate::graph::{EdgeId, Graph};

use super::{BarSplit, RatioError, map_splits, tree_sizes};

pub(super) fn compute(
    graph: &Graph,
    forest: &SpanningForest,
) -> Result<Vec<BarSplit>, RatioError> {
    let total_nodes = graph.node_count();
    let sizes = tree_sizes(total_nodes, &forest.edges);
    let adjacency = build_adjacency(total_nodes, &forest.edges);

    map_splits(&forest.edges, |removed| {
        let source_side = reachable(&adjacency, removed.source, removed.edge);
        let target_side = reachable(&adjacency, removed.target, removed.edge);
        super::finish_split(
            removed,
            source_side,
            target_side,
            sizes[removed.source],
            total_nodes,
        )
    })
}

fn build_adjacency(node_count: usize, edges: &[ForestEdge]) -> Vec<Vec<(usize, EdgeId)>> {
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in edges {
        adjacency[edge.source].push((edge.target, edge.edge));
        adjacency[edge.target].push((edge.source, edge.edge));
    }
    adjacency
}

/// Collects the nodes reachable from `start` without crossing `skip`.
fn reachable(adjacency: &[Vec<(usize, EdgeId)>], start: usize, skip: EdgeId) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut stack = vec![start];
    let mut side = Vec::new();
    visited[start] = true;

    while let Some(node) = stack.pop() {
        side.push(node);
        for &(next, via) in &adjacency[node] {
            if via == skip || visited[next] {
                continue;
            }
            visited[next] = true;
            stack.push(next);
        }
    }

    side
}
