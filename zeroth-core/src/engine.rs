//! Barcode engine: orchestrates the sweep and the ratio pass.

use tracing::{info, instrument};

use crate::{
    Result,
    bar::{Bar, Barcode, NodeSet},
    forest,
    graph::{Graph, NodeId},
    ratio::{self, RatioStrategy},
};

/// Entry point for computing barcodes.
///
/// A run is a pure function of the graph: no state is retained between
/// invocations, and the same input always yields the same barcode under the
/// documented decreasing-weight, input-order tie-break. Disconnected graphs
/// are handled deterministically — every component contributes its own bars
/// and nothing is silently dropped.
///
/// # Examples
/// ```
/// use zeroth_core::{Edge, Graph, Node, ZerothBuilder};
///
/// let graph = Graph::new(
///     vec![Node::new("a", "1"), Node::new("b", "1"), Node::new("c", "2")],
///     vec![
///         Edge::new("a", "b", 5.0),
///         Edge::new("b", "c", 3.0),
///         Edge::new("a", "c", 1.0),
///     ],
/// )?;
/// let zeroth = ZerothBuilder::new().build();
/// let barcode = zeroth.run(&graph)?;
///
/// assert_eq!(barcode.bars().len(), 2);
/// assert_eq!(barcode.bars()[0].death(), 5.0);
/// assert!(barcode.bars()[0].component_a().contains("a"));
/// assert!(barcode.bars()[0].component_b().contains("c"));
/// # Ok::<(), zeroth_core::ZerothError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Zeroth {
    ratio_strategy: RatioStrategy,
}

impl Zeroth {
    pub(crate) fn new(ratio_strategy: RatioStrategy) -> Self {
        Self { ratio_strategy }
    }

    /// Returns the ratio strategy used when running.
    #[must_use]
    pub fn ratio_strategy(&self) -> RatioStrategy {
        self.ratio_strategy
    }

    /// Computes the barcode for `graph`.
    ///
    /// # Errors
    /// Returns [`crate::ZerothError::Ratio`] when the spanning forest turns
    /// out to be inconsistent during the ratio pass. This indicates a logic
    /// error rather than bad input; graph validation happens in
    /// [`Graph::new`].
    pub fn run(&self, graph: &Graph) -> Result<Barcode> {
        self.run_with_counts(graph, graph.node_count(), graph.edge_count())
    }

    #[instrument(
        name = "engine.run",
        err,
        skip(self, graph),
        fields(nodes = nodes, edges = edges, strategy = ?self.ratio_strategy),
    )]
    fn run_with_counts(&self, graph: &Graph, nodes: usize, edges: usize) -> Result<Barcode> {
        let forest = forest::build(graph);
        let splits = ratio::compute(graph, &forest, self.ratio_strategy)?;

        let bars: Vec<Bar> = forest
            .deaths
            .iter()
            .zip(splits)
            .map(|(death, split)| {
                Bar::new(
                    NodeId::new(death.bar),
                    death.weight,
                    death.edge,
                    split.ratio,
                    NodeSet::from_indices(graph, &split.source_side),
                    NodeSet::from_indices(graph, &split.target_side),
                )
            })
            .collect();

        info!(
            bars = bars.len(),
            forest_edges = forest.edges.len(),
            components = forest.component_count,
            "barcode complete"
        );

        Ok(Barcode::new(
            bars,
            forest.edges.iter().map(|edge| edge.edge).collect(),
            forest.component_count,
        ))
    }
}
