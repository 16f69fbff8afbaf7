//! Error types for the zeroth core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::ratio::RatioError;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating a [`crate::Graph`] input.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The node collection was empty.
    #[error("graph contains no nodes")]
    EmptyGraph,
    /// Two nodes carried the same identifier, making id lookup ambiguous.
    #[error("duplicate node id `{id}`")]
    DuplicateNodeId {
        /// The identifier that appeared more than once.
        id: Arc<str>,
    },
    /// An edge endpoint did not resolve to any known node id.
    #[error("edge references unknown node id `{id}`")]
    UnknownNode {
        /// The unresolvable endpoint identifier.
        id: Arc<str>,
    },
    /// An edge weight was non-finite or not strictly positive.
    #[error("edge ({source_id}, {target}) has invalid weight {weight}")]
    InvalidWeight {
        /// Source endpoint of the offending edge.
        source_id: Arc<str>,
        /// Target endpoint of the offending edge.
        target: Arc<str>,
        /// The rejected weight value.
        weight: f32,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The node collection was empty.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Two nodes carried the same identifier.
        DuplicateNodeId => DuplicateNodeId { .. } => "GRAPH_DUPLICATE_NODE_ID",
        /// An edge endpoint did not resolve to any known node id.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge weight was non-finite or not strictly positive.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

/// Error type produced when running [`crate::Zeroth`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ZerothError {
    /// Input graph validation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The ratio calculator observed an inconsistent spanning forest.
    #[error(transparent)]
    Ratio(#[from] RatioError),
}

impl ZerothError {
    /// Retrieve the stable machine-readable code of the underlying error.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Ratio(error) => error.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ZerothError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    #[test]
    fn graph_error_codes_are_stable() {
        let err = GraphError::UnknownNode { id: "ghost".into() };
        assert_eq!(err.code().as_str(), "GRAPH_UNKNOWN_NODE");
        assert_eq!(GraphError::EmptyGraph.code().to_string(), "GRAPH_EMPTY");
    }

    #[test]
    fn facade_error_delegates_codes() {
        let graph: ZerothError = GraphError::EmptyGraph.into();
        assert_eq!(graph.code(), "GRAPH_EMPTY");

        let ratio: ZerothError = RatioError::InconsistentForest {
            edge: EdgeId::new(0),
            tree_nodes: 3,
            accounted: 1,
        }
        .into();
        assert_eq!(ratio.code(), "RATIO_INCONSISTENT_FOREST");
    }
}
