//! Error types for JSON graph loading.

use std::{io, path::PathBuf};

use thiserror::Error;
use zeroth_core::GraphError;

/// Errors raised while loading a JSON graph document.
#[derive(Debug, Error)]
pub enum JsonGraphError {
    /// The document file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The document was not valid force-layout JSON.
    #[error("failed to parse graph document: {source}")]
    Parse {
        /// Error raised by the JSON deserializer.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but the graph failed validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
