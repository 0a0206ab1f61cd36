//! Insight and recommendation generation from the assembled result parts.

use causeway_core::{
    CausalRelationship, ConfoundingFactor, Insight, InsightKind, InterventionEffect,
    Recommendation, ValidationOutcome,
};

/// Mean strength among validated relationships above which the
/// strong-causality insight fires.
const STRONG_CAUSALITY_MEAN: f64 = 0.7;

/// Confounder impact above which the confounding insight and the
/// investigate recommendation fire.
const NOTABLE_CONFOUNDER_IMPACT: f64 = 0.5;

/// Expected intervention effect above which the opportunity insight fires.
const INTERVENTION_OPPORTUNITY: f64 = 0.6;

/// Generate threshold-driven insights.
pub fn generate_insights(
    relationships: &[CausalRelationship],
    validation: &[ValidationOutcome],
    confounders: &[ConfoundingFactor],
    interventions: &[InterventionEffect],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Strong causality: judged over relationships that passed validation.
    let passed_ids: Vec<&str> = validation
        .iter()
        .filter(|v| v.passed)
        .map(|v| v.relationship_id.as_str())
        .collect();
    let passed: Vec<&CausalRelationship> = relationships
        .iter()
        .filter(|r| passed_ids.contains(&r.id.as_str()))
        .collect();
    if !passed.is_empty() {
        let mean_strength =
            passed.iter().map(|r| r.strength).sum::<f64>() / passed.len() as f64;
        if mean_strength > STRONG_CAUSALITY_MEAN {
            insights.push(Insight {
                kind: InsightKind::StrongCausality,
                description: format!(
                    "{} validated relationship(s) show strong causal structure (mean strength \
                     {mean_strength:.2})",
                    passed.len()
                ),
                score: mean_strength,
                related_ids: passed.iter().map(|r| r.id.clone()).collect(),
            });
        }
    }

    if let Some(worst) = confounders
        .iter()
        .filter(|c| c.impact > NOTABLE_CONFOUNDER_IMPACT)
        .max_by(|a, b| a.impact.partial_cmp(&b.impact).unwrap_or(std::cmp::Ordering::Equal))
    {
        insights.push(Insight {
            kind: InsightKind::ConfoundingDetected,
            description: format!(
                "variable {} confounds {} relationship(s) with impact {:.2}",
                worst.variable,
                worst.affected_relationships.len(),
                worst.impact
            ),
            score: worst.impact,
            related_ids: worst.affected_relationships.clone(),
        });
    }

    if let Some(best) = interventions
        .iter()
        .filter(|i| i.expected_effect.abs() > INTERVENTION_OPPORTUNITY)
        .max_by(|a, b| {
            a.expected_effect
                .abs()
                .partial_cmp(&b.expected_effect.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    {
        insights.push(Insight {
            kind: InsightKind::InterventionOpportunity,
            description: format!(
                "intervening on {} is expected to move {} by {:.2} standard deviations",
                best.variable, best.target, best.expected_effect
            ),
            score: best.expected_effect.abs(),
            related_ids: vec![format!("{}->{}", best.variable, best.target)],
        });
    }

    insights
}

/// Generate the two single-target recommendations.
pub fn generate_recommendations(
    relationships: &[CausalRelationship],
    confounders: &[ConfoundingFactor],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(strongest) = relationships.iter().max_by(|a, b| {
        a.strength
            .partial_cmp(&b.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        recommendations.push(Recommendation {
            action: "optimize".to_string(),
            target: strongest.id.clone(),
            rationale: format!(
                "{} is the strongest causal driver of {} (strength {:.2}); changes to it have \
                 the largest expected leverage",
                strongest.cause, strongest.effect, strongest.strength
            ),
            priority: strongest.strength,
        });
    }

    if let Some(worst) = confounders
        .iter()
        .filter(|c| c.impact > NOTABLE_CONFOUNDER_IMPACT)
        .max_by(|a, b| a.impact.partial_cmp(&b.impact).unwrap_or(std::cmp::Ordering::Equal))
    {
        recommendations.push(Recommendation {
            action: "investigate".to_string(),
            target: worst.variable.clone(),
            rationale: format!(
                "{} confounds {} relationship(s) with impact {:.2}; conclusions drawn from \
                 those relationships may be spurious",
                worst.variable,
                worst.affected_relationships.len(),
                worst.impact
            ),
            priority: worst.impact,
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn outcome(id: &str, passed: bool) -> ValidationOutcome {
        ValidationOutcome {
            relationship_id: id.to_string(),
            checks: HashMap::new(),
            overall_score: if passed { 0.8 } else { 0.2 },
            passed,
        }
    }

    #[test]
    fn strong_causality_requires_passed_relationships() {
        let relationships = vec![CausalRelationship::new("a", "b", 0.9, 0.9, "PC Algorithm")];
        let none_passed = vec![outcome("a->b", false)];
        assert!(generate_insights(&relationships, &none_passed, &[], &[]).is_empty());

        let passed = vec![outcome("a->b", true)];
        let insights = generate_insights(&relationships, &passed, &[], &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::StrongCausality);
    }

    #[test]
    fn recommendations_target_strongest_and_worst() {
        let relationships = vec![
            CausalRelationship::new("a", "b", 0.6, 0.8, "PC Algorithm"),
            CausalRelationship::new("c", "d", 0.9, 0.8, "PC Algorithm"),
        ];
        let confounders = vec![ConfoundingFactor {
            variable: "z".to_string(),
            affected_relationships: vec!["a->b".to_string()],
            impact: 0.7,
            confidence: 0.8,
            detection_method: "partial correlation".to_string(),
            evidence: Vec::new(),
            statistics: Default::default(),
        }];

        let recommendations = generate_recommendations(&relationships, &confounders);
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].action, "optimize");
        assert_eq!(recommendations[0].target, "c->d");
        assert_eq!(recommendations[1].action, "investigate");
        assert_eq!(recommendations[1].target, "z");
    }
}
