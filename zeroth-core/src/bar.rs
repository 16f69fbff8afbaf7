//! Barcode output types.
//!
//! A [`Barcode`] is the finished product of one engine run: one [`Bar`] per
//! component that died during the sweep, each carrying its death weight, its
//! causal edge, and the two node sets that edge holds together. Consumers
//! are rendering and layout code; everything here is plain data with
//! deterministic ordering.

use std::sync::Arc;

use crate::graph::{EdgeId, Graph, NodeId};

/// A deterministic set of node identifiers.
///
/// Stored sorted, so iteration order is stable across runs and membership
/// tests cost O(log n) without exposing the internal representation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeSet {
    ids: Vec<Arc<str>>,
}

impl NodeSet {
    pub(crate) fn from_indices(graph: &Graph, indices: &[usize]) -> Self {
        let mut ids: Vec<Arc<str>> = indices
            .iter()
            .map(|&index| graph.node_id_shared(index))
            .collect();
        ids.sort_unstable();
        Self { ids }
    }

    /// Returns `true` when `id` is a member.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids
            .binary_search_by(|probe| probe.as_ref().cmp(id))
            .is_ok()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the member ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(|id| id.as_ref())
    }
}

/// One bar of the barcode: the life record of a component.
///
/// The bar's id is the index of the node whose singleton component seeded
/// it; bar ids and component ids coincide by construction. `component_a` is
/// the side of the causal edge containing its source endpoint and
/// `component_b` the target side.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    id: NodeId,
    death: f32,
    edge: EdgeId,
    ratio: f32,
    component_a: NodeSet,
    component_b: NodeSet,
    /// Selection flag owned by the consumer. The engine initialises it to
    /// `false` and never reads it.
    pub selected: bool,
}

impl Bar {
    pub(crate) fn new(
        id: NodeId,
        death: f32,
        edge: EdgeId,
        ratio: f32,
        component_a: NodeSet,
        component_b: NodeSet,
    ) -> Self {
        Self {
            id,
            death,
            edge,
            ratio,
            component_a,
            component_b,
            selected: false,
        }
    }

    /// Returns the bar id: the node index whose component this bar tracks.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> NodeId { self.id }

    /// Returns the weight of the edge that killed this component.
    #[must_use]
    #[rustfmt::skip]
    pub fn death(&self) -> f32 { self.death }

    /// Returns the causal edge, resolvable through [`Graph::edge`].
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> EdgeId { self.edge }

    /// Returns the smaller side's share of all nodes, in (0, 0.5].
    #[must_use]
    #[rustfmt::skip]
    pub fn ratio(&self) -> f32 { self.ratio }

    /// Returns the node set on the causal edge's source side.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_a(&self) -> &NodeSet { &self.component_a }

    /// Returns the node set on the causal edge's target side.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_b(&self) -> &NodeSet { &self.component_b }
}

/// The finished barcode for one graph.
///
/// Bars appear in the order their components died during the sweep. That
/// order is deterministic but carries no meaning for consumers; the
/// visualization's sort lives in [`Barcode::display_order`].
#[derive(Clone, Debug, PartialEq)]
pub struct Barcode {
    bars: Vec<Bar>,
    forest: Vec<EdgeId>,
    component_count: usize,
}

impl Barcode {
    pub(crate) fn new(bars: Vec<Bar>, forest: Vec<EdgeId>, component_count: usize) -> Self {
        Self {
            bars,
            forest,
            component_count,
        }
    }

    /// Returns the bars in sweep order.
    #[must_use]
    #[rustfmt::skip]
    pub fn bars(&self) -> &[Bar] { &self.bars }

    /// Returns the bars mutably so consumers can toggle `selected`.
    #[rustfmt::skip]
    pub fn bars_mut(&mut self) -> &mut [Bar] { &mut self.bars }

    /// Returns the spanning-forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest_edges(&self) -> &[EdgeId] { &self.forest }

    /// Returns the number of connected components in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the input graph was connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count == 1
    }

    /// Returns indices into [`Self::bars`] in display order: death
    /// descending, then ratio descending, then sweep order.
    ///
    /// This is the order the barcode view renders bars in; it lives here so
    /// every consumer applies the same sort.
    #[must_use]
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.bars.len()).collect();
        order.sort_by(|&a, &b| {
            let left = &self.bars[a];
            let right = &self.bars[b];
            right
                .death
                .total_cmp(&left.death)
                .then_with(|| right.ratio.total_cmp(&left.ratio))
                .then_with(|| a.cmp(&b))
        });
        order
    }
}
