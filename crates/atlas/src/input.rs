//! Declarative graph description.
//!
//! The on-disk format is a single JSON object:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "A" }, { "id": "B" }],
//!   "root": "A",
//!   "edges": [{ "from": "B", "to": "A" }],
//!   "deletedEdge": [{ "from": "B", "to": "A" }]
//! }
//! ```
//!
//! The builder never touches JSON itself; it consumes the plain structs
//! below, so any other encoding can feed it.

use crate::AtlasError;
use serde::Deserialize;
use std::path::Path;

/// A single node declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDecl {
    pub id: String,
}

/// A directed edge `from -> to`, also used for deletion entries.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDecl {
    pub from: String,
    pub to: String,
}

/// Parsed graph description: nodes, root, edges, and edges to delete.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<NodeDecl>,
    pub root: String,
    #[serde(default)]
    pub edges: Vec<EdgeDecl>,
    /// Edges removed after the graph is loaded. Optional in the input.
    #[serde(rename = "deletedEdge", default)]
    pub deleted_edges: Vec<EdgeDecl>,
}

impl GraphInput {
    /// Parses a graph description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a graph description file.
    ///
    /// # Errors
    /// [`AtlasError::Io`] when the file cannot be read,
    /// [`AtlasError::Malformed`] when it is not a valid description.
    pub fn from_path(path: &Path) -> Result<Self, AtlasError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
