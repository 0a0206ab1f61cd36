//! Merge raw detector candidates into combined relationships.
//!
//! Candidates are grouped by (cause, effect). Single-method hits survive
//! only above `min_causal_strength`; multi-method hits are combined with
//! fixed method weights (PC 0.4, Granger 0.4, Transfer Entropy 0.2,
//! anything else 0.1), weight-averaging strength and confidence and
//! concatenating methods and evidence.

use std::collections::BTreeMap;

use causeway_core::constants::method_weight;
use causeway_core::CausalRelationship;

/// Merge raw candidates. Output is sorted by descending strength, ties
/// broken by id for deterministic ordering.
pub fn merge(raw: Vec<CausalRelationship>, min_causal_strength: f64) -> Vec<CausalRelationship> {
    let mut groups: BTreeMap<String, Vec<CausalRelationship>> = BTreeMap::new();
    for relationship in raw {
        groups.entry(relationship.id.clone()).or_default().push(relationship);
    }

    let mut merged: Vec<CausalRelationship> = Vec::new();
    for (_, group) in groups {
        if group.len() == 1 {
            if let Some(single) = group.into_iter().next() {
                if single.strength > min_causal_strength {
                    merged.push(single);
                }
            }
            continue;
        }
        merged.push(combine(group));
    }

    merged.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    merged
}

/// Weight-average a multi-method group into one relationship.
fn combine(group: Vec<CausalRelationship>) -> CausalRelationship {
    let mut total_weight = 0.0;
    let mut strength = 0.0;
    let mut confidence = 0.0;

    let mut base = group[0].clone();
    base.methods.clear();
    base.evidence.clear();
    base.statistics.clear();

    for relationship in &group {
        let weight: f64 = relationship.methods.iter().map(|m| method_weight(m)).sum();
        total_weight += weight;
        strength += relationship.strength * weight;
        confidence += relationship.confidence * weight;

        base.methods.extend(relationship.methods.iter().cloned());
        base.evidence.extend(relationship.evidence.iter().cloned());
        for (key, value) in &relationship.statistics {
            base.statistics.insert(key.clone(), *value);
        }
    }

    if total_weight > 0.0 {
        base.strength = (strength / total_weight).clamp(0.0, 1.0);
        base.confidence = (confidence / total_weight).clamp(0.0, 1.0);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::constants::{METHOD_GRANGER, METHOD_PC, METHOD_TRANSFER_ENTROPY};

    #[test]
    fn weak_single_method_hit_is_dropped() {
        let raw = vec![CausalRelationship::new("a", "b", 0.2, 0.5, METHOD_PC)];
        assert!(merge(raw, 0.3).is_empty());
    }

    #[test]
    fn strong_single_method_hit_survives() {
        let raw = vec![CausalRelationship::new("a", "b", 0.8, 0.9, METHOD_PC)];
        let merged = merge(raw, 0.3);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "a->b");
    }

    #[test]
    fn multi_method_hits_are_weight_averaged() {
        let raw = vec![
            CausalRelationship::new("a", "b", 0.8, 0.8, METHOD_PC),
            CausalRelationship::new("a", "b", 0.4, 0.6, METHOD_GRANGER),
            CausalRelationship::new("a", "b", 0.2, 0.4, METHOD_TRANSFER_ENTROPY),
        ];
        let merged = merge(raw, 0.3);
        assert_eq!(merged.len(), 1);
        let combined = &merged[0];
        // (0.8·0.4 + 0.4·0.4 + 0.2·0.2) / 1.0
        assert!((combined.strength - 0.52).abs() < 1e-9);
        assert_eq!(combined.methods.len(), 3);
    }

    #[test]
    fn output_sorted_by_descending_strength() {
        let raw = vec![
            CausalRelationship::new("a", "b", 0.5, 0.5, METHOD_PC),
            CausalRelationship::new("c", "d", 0.9, 0.9, METHOD_PC),
        ];
        let merged = merge(raw, 0.3);
        assert_eq!(merged[0].id, "c->d");
        assert_eq!(merged[1].id, "a->b");
    }

    #[test]
    fn merged_below_floor_is_still_kept() {
        // The floor applies to single-method hits only; a multi-method
        // combination is kept on the strength of its corroboration.
        let raw = vec![
            CausalRelationship::new("a", "b", 0.25, 0.5, METHOD_PC),
            CausalRelationship::new("a", "b", 0.25, 0.5, METHOD_GRANGER),
        ];
        let merged = merge(raw, 0.3);
        assert_eq!(merged.len(), 1);
    }
}
