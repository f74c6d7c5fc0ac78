//! # The Atlas: Graph Construction
//!
//! **Role**: Turns a declarative graph description (nodes, root, edges,
//! deletions) into a [`ReversedGraph`] ready for reachability analysis.
//!
//! **Core Types**:
//! - `GraphInput`: Parsed description of nodes, root, edges and deletions.
//! - `ReversedGraph`: Directed graph with every edge stored predecessor-first.
//! - `BuildOutcome`: Constructed graph + resolved root + collected warnings.
//!
//! **Design**:
//! - Node identifiers map to dense `NodeIndex` values in first-seen order;
//!   the index map and node weights together form the name↔index bijection.
//! - An input edge `from -> to` is stored as `to -> from`, so walking
//!   outgoing edges from the root discovers exactly the nodes that still
//!   have a directed path TO the root.
//! - Referential problems (unknown edge endpoints, deletions of absent
//!   edges) are collected as [`BuildWarning`]s, never errors. Only an
//!   unresolvable root aborts the build.

pub mod builder;
pub mod input;

pub use builder::{build, BuildOutcome, ReversedGraph};
pub use input::{EdgeDecl, GraphInput, NodeDecl};

use thiserror::Error;

/// Fatal build failures. Everything referentially soft is a [`BuildWarning`].
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The root identifier was never registered as a node.
    #[error("root node `{0}` does not exist in the graph")]
    UnknownRoot(String),

    /// The graph description file could not be read.
    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),

    /// The graph description was not valid JSON of the expected shape.
    #[error("graph description could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Non-fatal diagnostics collected while building the graph.
///
/// Reported alongside the result; the offending edge or deletion is skipped
/// and construction continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildWarning {
    /// An edge or deletion named an identifier that is not a node.
    #[error("node `{identifier}` does not exist in the graph")]
    DanglingReference { identifier: String },

    /// A deletion targeted an edge that is not (or no longer) present.
    #[error("edge `{from}` -> `{to}` does not exist in the graph")]
    EdgeNotFound { from: String, to: String },
}
