//! Maximum spanning forest construction over a validated graph.
//!
//! Edges are processed in strictly decreasing weight order; equal weights
//! keep their input order, so the sweep is deterministic for identical
//! inputs. Each accepted edge kills the *source* endpoint's component: that
//! component's bar records the edge weight as its death time, and the target
//! component's identity survives the merge. Edges whose endpoints already
//! share a component — self-loops, parallel edges, anything already spanned —
//! are skipped without recording anything.
//!
//! Components that never merge into anything are roots; they leave no death
//! record, so a connected graph of N nodes produces exactly N−1 records and
//! a graph with C components produces N−C.

mod union_find;

use tracing::debug;

use crate::graph::{EdgeId, Graph};

pub(crate) use self::union_find::DisjointSet;

/// A spanning-forest edge with its resolved endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ForestEdge {
    pub(crate) edge: EdgeId,
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: f32,
}

/// Death record for one absorbed component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Death {
    /// Id of the bar (and component) that died: the index of the node whose
    /// singleton seeded it.
    pub(crate) bar: usize,
    /// Weight of the killing edge.
    pub(crate) weight: f32,
    /// The killing edge itself.
    pub(crate) edge: EdgeId,
}

/// Output of the spanning-forest sweep.
///
/// `edges` and `deaths` are parallel: `deaths[i]` was caused by `edges[i]`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SpanningForest {
    pub(crate) edges: Vec<ForestEdge>,
    pub(crate) deaths: Vec<Death>,
    pub(crate) component_count: usize,
}

/// Builds the maximum spanning forest and the per-component death records.
pub(crate) fn build(graph: &Graph) -> SpanningForest {
    let node_count = graph.node_count();
    let resolved = graph.resolved_edges();

    let mut order: Vec<usize> = (0..resolved.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        resolved[b]
            .weight
            .total_cmp(&resolved[a].weight)
            .then_with(|| a.cmp(&b))
    });

    let mut set = DisjointSet::new(node_count);
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut deaths = Vec::with_capacity(node_count.saturating_sub(1));

    for index in order {
        let candidate = resolved[index];
        let source_root = set.find(candidate.source);
        let target_root = set.find(candidate.target);
        if source_root == target_root {
            continue;
        }

        let dying = set.bar(source_root);
        let surviving = set.bar(target_root);
        let root = set.union(source_root, target_root);
        set.set_bar(root, surviving);

        deaths.push(Death {
            bar: dying,
            weight: candidate.weight,
            edge: EdgeId::new(index),
        });
        edges.push(ForestEdge {
            edge: EdgeId::new(index),
            source: candidate.source,
            target: candidate.target,
            weight: candidate.weight,
        });
    }

    let component_count = node_count - edges.len();
    debug!(
        forest_edges = edges.len(),
        components = component_count,
        "spanning forest complete"
    );

    SpanningForest {
        edges,
        deaths,
        component_count,
    }
}
