//! Build the serializable causal graph from merged relationships.

use std::collections::HashMap;

use causeway_core::{CausalEdge, CausalGraph, CausalNode, CausalRelationship};

/// Build a graph with one node per discovered variable — isolated
/// variables included — and one edge per surviving relationship.
pub fn build(variables: &[String], relationships: &[CausalRelationship]) -> CausalGraph {
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut out_degree: HashMap<&str, usize> = HashMap::new();

    let edges: Vec<CausalEdge> = relationships
        .iter()
        .map(|r| {
            *out_degree.entry(r.cause.as_str()).or_default() += 1;
            *in_degree.entry(r.effect.as_str()).or_default() += 1;
            CausalEdge {
                relationship_id: r.id.clone(),
                cause: r.cause.clone(),
                effect: r.effect.clone(),
                strength: r.strength,
            }
        })
        .collect();

    // Degree centrality: degree over the maximum possible (2·(V-1)).
    let max_degree = if variables.len() > 1 {
        2.0 * (variables.len() - 1) as f64
    } else {
        1.0
    };

    let nodes = variables
        .iter()
        .map(|name| {
            let ins = in_degree.get(name.as_str()).copied().unwrap_or(0);
            let outs = out_degree.get(name.as_str()).copied().unwrap_or(0);
            CausalNode {
                variable: name.clone(),
                in_degree: ins,
                out_degree: outs,
                centrality: ((ins + outs) as f64 / max_degree).clamp(0.0, 1.0),
            }
        })
        .collect();

    CausalGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_variables_become_nodes() {
        let variables = vec!["a".to_string(), "b".to_string(), "lonely".to_string()];
        let relationships = vec![CausalRelationship::new("a", "b", 0.8, 0.8, "PC Algorithm")];
        let graph = build(&variables, &relationships);

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 1);
        assert!(graph.is_consistent());

        let lonely = graph.node("lonely").unwrap();
        assert_eq!(lonely.in_degree + lonely.out_degree, 0);
        assert_eq!(lonely.centrality, 0.0);

        let a = graph.node("a").unwrap();
        assert_eq!(a.out_degree, 1);
        assert!(a.centrality > 0.0);
    }
}
