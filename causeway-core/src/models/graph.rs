use serde::{Deserialize, Serialize};

/// One variable in the causal graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalNode {
    /// Variable name.
    pub variable: String,
    /// Number of incoming edges (things that cause this variable).
    pub in_degree: usize,
    /// Number of outgoing edges (things this variable causes).
    pub out_degree: usize,
    /// Degree centrality normalized to [0, 1].
    pub centrality: f64,
}

/// One surviving relationship as a graph edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalEdge {
    /// Id of the relationship this edge represents.
    pub relationship_id: String,
    /// Source node (cause variable).
    pub cause: String,
    /// Target node (effect variable).
    pub effect: String,
    /// Strength carried over from the relationship.
    pub strength: f64,
}

/// The discovered causal structure as a serializable value object.
///
/// Nodes cover the full discovered-variable universe, not just variables
/// with surviving edges; edge endpoints always reference existing nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CausalGraph {
    pub nodes: Vec<CausalNode>,
    pub edges: Vec<CausalEdge>,
}

impl CausalGraph {
    /// Look up a node by variable name.
    pub fn node(&self, variable: &str) -> Option<&CausalNode> {
        self.nodes.iter().find(|n| n.variable == variable)
    }

    /// Whether every edge endpoint references an existing node.
    pub fn is_consistent(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.node(&e.cause).is_some() && self.node(&e.effect).is_some())
    }
}
