use atlas::ReversedGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashSet;

pub struct GraphOracle;

impl GraphOracle {
    /// Computes the node indices with no remaining path to the root.
    ///
    /// # Algorithm
    /// 1. **The Frontier**: Start a depth-first walk at `root` with an explicit stack.
    /// 2. **The Living**: Follow outgoing edges of the reversed graph — each step
    ///    moves from a node to one of its predecessors in the original graph, so a
    ///    visited node is one with a directed path TO the root.
    /// 3. **The Verdict**: Every registered node NOT visited is an orphan.
    ///
    /// Nodes are marked visited before being pushed, so each is processed at most
    /// once and the walk terminates on any finite graph, cycles and self-loops
    /// included. The resulting SET never depends on sibling visit order; indices
    /// are returned in registration order.
    pub fn find_unreachable(graph: &ReversedGraph, root: NodeIndex) -> Vec<NodeIndex> {
        let node_count = graph.node_count();
        if node_count == 0 {
            return Vec::new();
        }

        let mut visited: HashSet<NodeIndex> = HashSet::with_capacity(node_count);
        let mut stack = vec![root];
        visited.insert(root);

        while let Some(node) = stack.pop() {
            for edge in graph.graph.edges_directed(node, Direction::Outgoing) {
                let predecessor = edge.target();
                if visited.insert(predecessor) {
                    stack.push(predecessor);
                }
            }
        }

        graph
            .graph
            .node_indices()
            .filter(|idx| !visited.contains(idx))
            .collect()
    }

    /// Like [`find_unreachable`](Self::find_unreachable), translated back to
    /// external identifiers.
    pub fn find_orphans(graph: &ReversedGraph, root: NodeIndex) -> Vec<String> {
        Self::find_unreachable(graph, root)
            .into_iter()
            .map(|idx| graph.name(idx).to_string())
            .collect()
    }
}
