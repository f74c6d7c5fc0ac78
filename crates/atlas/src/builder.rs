//! # Reversed Graph Builder
//!
//! Three-phase construction:
//! 1. **Register Pass**: Every declared node gets a dense index in first-seen order.
//! 2. **Root Resolution**: The root identifier must name a registered node (fatal otherwise).
//! 3. **Edge Pass**: Edges are inserted reversed, then the deletion list is applied.

use crate::input::GraphInput;
use crate::{AtlasError, BuildWarning};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph with every input edge stored predecessor-first.
///
/// An input edge `from -> to` lives in the underlying `DiGraph` as
/// `to -> from`, so the outgoing neighbours of a node are exactly its
/// predecessors in the original graph. Node weights carry the external
/// identifiers; `index_of` is the inverse mapping. Nodes are never removed,
/// which keeps `NodeIndex` values dense and stable.
#[derive(Debug)]
pub struct ReversedGraph {
    pub graph: DiGraph<String, ()>,
    pub index_of: HashMap<String, NodeIndex>,
}

impl ReversedGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index_of: HashMap::new(),
        }
    }

    /// Registers a node identifier, assigning the next dense index.
    ///
    /// Re-registering an existing identifier returns its original index and
    /// changes nothing.
    pub fn register_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index_of.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index_of.insert(id.to_string(), idx);
        idx
    }

    /// Looks up the index of a registered identifier.
    pub fn resolve(&self, id: &str) -> Option<NodeIndex> {
        self.index_of.get(id).copied()
    }

    /// Resolves the root identifier.
    ///
    /// # Errors
    /// [`AtlasError::UnknownRoot`] when the identifier was never registered.
    pub fn resolve_root(&self, id: &str) -> Result<NodeIndex, AtlasError> {
        self.resolve(id)
            .ok_or_else(|| AtlasError::UnknownRoot(id.to_string()))
    }

    /// Inserts the edge `from -> to`, stored reversed.
    ///
    /// Duplicate edges are deduplicated, so insertion has set semantics.
    /// Self-loops are legal. Unresolved endpoints produce one
    /// [`BuildWarning::DanglingReference`] each and the edge is skipped.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Vec<BuildWarning> {
        match (self.resolve(from), self.resolve(to)) {
            (Some(from_idx), Some(to_idx)) => {
                if self.graph.find_edge(to_idx, from_idx).is_none() {
                    self.graph.add_edge(to_idx, from_idx, ());
                }
                Vec::new()
            }
            (from_idx, to_idx) => dangling_warnings(from, from_idx, to, to_idx),
        }
    }

    /// Removes the edge `from -> to` if present.
    ///
    /// Best-effort: unresolved endpoints or an absent edge produce a warning
    /// and leave the graph unchanged, so deletion is idempotent.
    pub fn delete_edge(&mut self, from: &str, to: &str) -> Vec<BuildWarning> {
        match (self.resolve(from), self.resolve(to)) {
            (Some(from_idx), Some(to_idx)) => {
                match self.graph.find_edge(to_idx, from_idx) {
                    Some(edge) => {
                        self.graph.remove_edge(edge);
                        Vec::new()
                    }
                    None => vec![BuildWarning::EdgeNotFound {
                        from: from.to_string(),
                        to: to.to_string(),
                    }],
                }
            }
            (from_idx, to_idx) => dangling_warnings(from, from_idx, to, to_idx),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// External identifier of a node.
    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }
}

impl Default for ReversedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// One `DanglingReference` per unresolved endpoint.
fn dangling_warnings(
    from: &str,
    from_idx: Option<NodeIndex>,
    to: &str,
    to_idx: Option<NodeIndex>,
) -> Vec<BuildWarning> {
    let mut warnings = Vec::new();
    if from_idx.is_none() {
        warnings.push(BuildWarning::DanglingReference {
            identifier: from.to_string(),
        });
    }
    if to_idx.is_none() {
        warnings.push(BuildWarning::DanglingReference {
            identifier: to.to_string(),
        });
    }
    warnings
}

/// Constructed graph plus everything the caller needs to analyse and report.
#[derive(Debug)]
pub struct BuildOutcome {
    pub graph: ReversedGraph,
    pub root: NodeIndex,
    /// Non-fatal diagnostics, in the order they were encountered.
    pub warnings: Vec<BuildWarning>,
}

/// Builds a [`ReversedGraph`] from a parsed description.
///
/// # Algorithm
/// 1. Register all declared nodes (duplicates collapse onto the first index).
/// 2. Resolve the root — fatal before any edge is touched.
/// 3. Insert edges, then apply the deletion list, collecting warnings.
///
/// # Errors
/// [`AtlasError::UnknownRoot`] when the root identifier is not a node.
pub fn build(input: &GraphInput) -> Result<BuildOutcome, AtlasError> {
    let mut graph = ReversedGraph::new();

    for node in &input.nodes {
        graph.register_node(&node.id);
    }

    let root = graph.resolve_root(&input.root)?;

    let mut warnings = Vec::new();
    for edge in &input.edges {
        warnings.extend(graph.add_edge(&edge.from, &edge.to));
    }
    for edge in &input.deleted_edges {
        warnings.extend(graph.delete_edge(&edge.from, &edge.to));
    }

    Ok(BuildOutcome {
        graph,
        root,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EdgeDecl, NodeDecl};

    fn graph_abc() -> ReversedGraph {
        let mut g = ReversedGraph::new();
        g.register_node("A");
        g.register_node("B");
        g.register_node("C");
        g
    }

    #[test]
    fn test_register_node_is_idempotent() {
        let mut g = ReversedGraph::new();
        let first = g.register_node("A");
        let second = g.register_node("A");

        assert_eq!(first, second);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.name(first), "A");
    }

    #[test]
    fn test_indices_are_dense_and_first_seen() {
        let g = graph_abc();
        assert_eq!(g.resolve("A").unwrap().index(), 0);
        assert_eq!(g.resolve("B").unwrap().index(), 1);
        assert_eq!(g.resolve("C").unwrap().index(), 2);
    }

    #[test]
    fn test_edge_is_stored_reversed() {
        let mut g = graph_abc();
        let warnings = g.add_edge("A", "B");
        assert!(warnings.is_empty());

        let a = g.resolve("A").unwrap();
        let b = g.resolve("B").unwrap();
        // Input A -> B must live as B -> A.
        assert!(g.graph.find_edge(b, a).is_some());
        assert!(g.graph.find_edge(a, b).is_none());
    }

    #[test]
    fn test_duplicate_edge_is_deduplicated() {
        let mut g = graph_abc();
        g.add_edge("A", "B");
        g.add_edge("A", "B");
        assert_eq!(g.graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_is_legal() {
        let mut g = graph_abc();
        let warnings = g.add_edge("A", "A");
        assert!(warnings.is_empty());

        let a = g.resolve("A").unwrap();
        assert!(g.graph.find_edge(a, a).is_some());
    }

    #[test]
    fn test_dangling_endpoints_warn_and_skip() {
        let mut g = graph_abc();
        let warnings = g.add_edge("X", "A");
        assert_eq!(
            warnings,
            vec![BuildWarning::DanglingReference {
                identifier: "X".into()
            }]
        );
        assert_eq!(g.graph.edge_count(), 0);

        // Both endpoints unknown: one warning per identifier.
        let warnings = g.add_edge("X", "Y");
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_delete_edge_is_idempotent() {
        let mut g = graph_abc();
        g.add_edge("B", "A");

        assert!(g.delete_edge("B", "A").is_empty());
        assert_eq!(g.graph.edge_count(), 0);

        // Second deletion: warning, no state change.
        let warnings = g.delete_edge("B", "A");
        assert_eq!(
            warnings,
            vec![BuildWarning::EdgeNotFound {
                from: "B".into(),
                to: "A".into()
            }]
        );
        assert_eq!(g.graph.edge_count(), 0);
    }

    #[test]
    fn test_delete_with_unknown_endpoint_warns() {
        let mut g = graph_abc();
        g.add_edge("B", "A");

        let warnings = g.delete_edge("Z", "A");
        assert_eq!(
            warnings,
            vec![BuildWarning::DanglingReference {
                identifier: "Z".into()
            }]
        );
        assert_eq!(g.graph.edge_count(), 1);
    }

    #[test]
    fn test_build_resolves_root_and_collects_warnings() {
        let input = GraphInput {
            nodes: vec![
                NodeDecl { id: "A".into() },
                NodeDecl { id: "B".into() },
                NodeDecl { id: "A".into() }, // duplicate, ignored
            ],
            root: "A".into(),
            edges: vec![
                EdgeDecl {
                    from: "B".into(),
                    to: "A".into(),
                },
                EdgeDecl {
                    from: "X".into(),
                    to: "A".into(),
                },
            ],
            deleted_edges: vec![EdgeDecl {
                from: "A".into(),
                to: "B".into(),
            }],
        };

        let outcome = build(&input).unwrap();
        assert_eq!(outcome.graph.node_count(), 2);
        assert_eq!(outcome.root, outcome.graph.resolve("A").unwrap());
        // One dangling reference (X), one missing deletion target (A -> B).
        assert_eq!(outcome.warnings.len(), 2);
        assert!(matches!(
            outcome.warnings[1],
            BuildWarning::EdgeNotFound { .. }
        ));
    }

    #[test]
    fn test_build_rejects_unknown_root() {
        let input = GraphInput {
            nodes: vec![NodeDecl { id: "A".into() }],
            root: "Z".into(),
            edges: Vec::new(),
            deleted_edges: Vec::new(),
        };

        let err = build(&input).unwrap_err();
        assert!(matches!(err, AtlasError::UnknownRoot(id) if id == "Z"));
    }
}
