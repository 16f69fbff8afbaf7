//! Force-layout document parsing and conversion into a core graph.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use zeroth_core::{Edge, Graph, Node};

use crate::errors::JsonGraphError;

/// Raw document as serialized by the data-preparation scripts.
#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(default)]
    group: Option<GroupTag>,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    source: String,
    target: String,
    value: f32,
}

/// Group tags appear as numbers in some datasets and as strings (brands,
/// categories) in others; both collapse to an opaque string tag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GroupTag {
    Text(String),
    Number(serde_json::Number),
}

impl GroupTag {
    fn into_tag(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Graph source backed by a d3 force-layout JSON document.
///
/// # Examples
/// ```
/// use zeroth_providers_json::JsonGraphSource;
///
/// let document = r#"{
///     "nodes": [{"id": "a", "group": 1}, {"id": "b", "group": 2}],
///     "links": [{"source": "a", "target": "b", "value": 3.5}]
/// }"#;
/// let source = JsonGraphSource::try_from_reader("demo", document.as_bytes())?;
/// assert_eq!(source.name(), "demo");
/// let graph = source.into_graph()?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edges()[0].weight(), 3.5);
/// # Ok::<(), zeroth_providers_json::JsonGraphError>(())
/// ```
#[derive(Debug)]
pub struct JsonGraphSource {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl JsonGraphSource {
    /// Parses a document from a reader.
    ///
    /// Missing `group` tags default to `"0"`.
    ///
    /// # Errors
    /// Returns [`JsonGraphError::Parse`] when the payload is not a valid
    /// force-layout document.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl Read,
    ) -> Result<Self, JsonGraphError> {
        let document: GraphDocument =
            serde_json::from_reader(reader).map_err(|source| JsonGraphError::Parse { source })?;

        let nodes = document
            .nodes
            .into_iter()
            .map(|record| {
                let group = record
                    .group
                    .map_or_else(|| String::from("0"), GroupTag::into_tag);
                Node::new(record.id, group)
            })
            .collect();
        let edges = document
            .links
            .into_iter()
            .map(|record| Edge::new(record.source, record.target, record.value))
            .collect();

        Ok(Self {
            name: name.into(),
            nodes,
            edges,
        })
    }

    /// Opens and parses a document file, deriving the source name from the
    /// file stem.
    ///
    /// # Errors
    /// Returns [`JsonGraphError::Io`] when the file cannot be opened and
    /// [`JsonGraphError::Parse`] when its contents are not a valid document.
    pub fn try_from_path(path: &Path) -> Result<Self, JsonGraphError> {
        let file = File::open(path).map_err(|source| JsonGraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .and_then(|value| value.to_str())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| "graph".to_owned());
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns a human-readable name for the source.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the parsed nodes in document order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the parsed edges in document order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Validates the parsed collections into a [`Graph`].
    ///
    /// # Errors
    /// Returns [`JsonGraphError::Graph`] when validation fails — duplicate
    /// node ids, endpoints that resolve to no node, or invalid weights.
    pub fn into_graph(self) -> Result<Graph, JsonGraphError> {
        Ok(Graph::new(self.nodes, self.edges)?)
    }
}
