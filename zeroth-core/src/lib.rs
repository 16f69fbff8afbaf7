//! Zeroth core library.
//!
//! Computes the 0-dimensional persistence barcode of a weighted graph. A
//! maximum-spanning-forest sweep processes edges in decreasing strength
//! order and records, for each node's component, the weight at which it was
//! absorbed into the rest of the graph; a second pass measures, per bar, the
//! two-way split its causal edge prevents. The resulting bars drive the
//! barcode view and the layout forces of the visualization shell, which
//! consumes them read-only.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bar;
mod builder;
mod engine;
mod error;
mod forest;
mod graph;
mod ratio;

pub use crate::{
    bar::{Bar, Barcode, NodeSet},
    builder::ZerothBuilder,
    engine::Zeroth,
    error::{GraphError, GraphErrorCode, Result, ZerothError},
    graph::{Edge, EdgeId, Graph, Node, NodeId},
    ratio::{RatioError, RatioErrorCode, RatioStrategy},
};
