//! JSON graph provider: loads d3 force-layout documents into zeroth graphs.
//!
//! The document shape is the one the visualization shell feeds the layout
//! simulation: `{"nodes": [{"id", "group"}], "links": [{"source", "target",
//! "value"}]}` with edge endpoints referencing node ids and `value` carrying
//! the connection strength.

mod errors;
mod source;

pub use errors::JsonGraphError;
pub use source::JsonGraphSource;
