//! Bar ratio computation: the bipartition each spanning edge prevents.
//!
//! Every spanning-forest edge is a bridge. Removing it splits its tree into
//! the two components the edge merged during the sweep; a bar's ratio is the
//! smaller side's share of *all* nodes. The side containing the causal
//! edge's source endpoint is always reported as `component_a` and the target
//! side as `component_b`, so membership queries stay meaningful regardless
//! of which side is smaller.
//!
//! Two strategies compute the same output: [`RatioStrategy::Replay`]
//! re-merges the remaining forest edges through a fresh disjoint set for
//! every bar (the defining computation), while [`RatioStrategy::Traversal`]
//! walks the forest adjacency once per bar. Property tests hold them
//! equivalent.

mod replay;
mod traversal;

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;

use crate::forest::{DisjointSet, ForestEdge, SpanningForest};
use crate::graph::{EdgeId, Graph};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Strategy used to compute per-bar bipartitions.
///
/// Both strategies produce identical `(ratio, component_a, component_b)`
/// output; they differ only in cost. `Replay` is O(bars · edges · α(n)),
/// `Traversal` is O(bars · n).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RatioStrategy {
    /// Re-merge the remaining forest edges through a fresh disjoint set for
    /// every bar, then read off the two surviving components.
    Replay,
    /// Walk the spanning forest from each end of the removed edge.
    #[default]
    Traversal,
}

/// Errors raised while computing bar ratios.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum RatioError {
    /// Removing a bar's causal edge did not split its tree into exactly two
    /// non-empty components.
    #[error(
        "removing edge {edge:?} accounted for {accounted} of {tree_nodes} tree nodes across two sides"
    )]
    InconsistentForest {
        /// The causal edge whose removal produced the inconsistency.
        edge: EdgeId,
        /// Number of nodes in the tree containing the edge.
        tree_nodes: usize,
        /// Number of nodes the two sides accounted for.
        accounted: usize,
    },
}

impl RatioError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> RatioErrorCode {
        match self {
            Self::InconsistentForest { .. } => RatioErrorCode::InconsistentForest,
        }
    }
}

/// Machine-readable error codes for [`RatioError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RatioErrorCode {
    /// Removing a causal edge did not yield exactly two components.
    InconsistentForest,
}

impl RatioErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InconsistentForest => "RATIO_INCONSISTENT_FOREST",
        }
    }
}

/// The two sides produced by removing one bar's causal edge, plus the ratio.
///
/// Sides hold dense node indices in ascending order; `source_side` contains
/// the causal edge's source endpoint, `target_side` its target endpoint.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarSplit {
    pub(crate) source_side: Vec<usize>,
    pub(crate) target_side: Vec<usize>,
    pub(crate) ratio: f32,
}

/// Computes one split per forest edge, in forest-edge order.
pub(crate) fn compute(
    graph: &Graph,
    forest: &SpanningForest,
    strategy: RatioStrategy,
) -> Result<Vec<BarSplit>, RatioError> {
    match strategy {
        RatioStrategy::Replay => replay::compute(graph, forest),
        RatioStrategy::Traversal => traversal::compute(graph, forest),
    }
}

/// Size of the spanning-forest tree containing each node.
fn tree_sizes(node_count: usize, edges: &[ForestEdge]) -> Vec<usize> {
    let mut set = DisjointSet::new(node_count);
    for edge in edges {
        set.union(edge.source, edge.target);
    }
    (0..node_count).map(|node| set.size_of(node)).collect()
}

/// Validates a split and derives the ratio.
///
/// The two sides must be non-empty, disjoint, and together cover the removed
/// edge's tree exactly; anything else means the forest edge list was not a
/// forest. Sides are sorted so the output is canonical for both strategies.
fn finish_split(
    removed: &ForestEdge,
    mut source_side: Vec<usize>,
    mut target_side: Vec<usize>,
    tree_nodes: usize,
    total_nodes: usize,
) -> Result<BarSplit, RatioError> {
    let accounted = source_side.len() + target_side.len();
    if source_side.is_empty() || target_side.is_empty() || accounted != tree_nodes {
        return Err(RatioError::InconsistentForest {
            edge: removed.edge,
            tree_nodes,
            accounted,
        });
    }

    source_side.sort_unstable();
    target_side.sort_unstable();

    let smaller = source_side.len().min(target_side.len());
    let ratio = smaller as f32 / total_nodes as f32;

    Ok(BarSplit {
        source_side,
        target_side,
        ratio,
    })
}

/// Maps the split closure over the forest edges, in parallel when the
/// `parallel` feature is enabled. Output order always matches input order.
fn map_splits<F>(edges: &[ForestEdge], split: F) -> Result<Vec<BarSplit>, RatioError>
where
    F: Fn(&ForestEdge) -> Result<BarSplit, RatioError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        edges.par_iter().map(split).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        edges.iter().map(split).collect()
    }
}
