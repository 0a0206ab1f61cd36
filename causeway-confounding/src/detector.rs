//! Per-relationship confounder screening.

use std::collections::BTreeMap;

use rayon::prelude::*;

use causeway_core::{
    stats, AnalysisError, AnalysisResult, CancellationToken, CausalAnalysisConfig,
    CausalRelationship, ConfoundingFactor, ConfoundingMetrics, Dataset,
};

/// Association p-value both sides of a candidate must clear.
const ASSOCIATION_ALPHA: f64 = 0.05;

/// Output of a confounding scan.
#[derive(Debug, Clone)]
pub struct ConfoundingOutput {
    /// Merged confounders, highest impact first.
    pub confounders: Vec<ConfoundingFactor>,
    pub metrics: ConfoundingMetrics,
}

/// Scan all relationships for confounding variables.
///
/// Candidates are screened in parallel per relationship; a failing
/// candidate (degenerate data, non-finite statistics) is skipped with a
/// warning rather than aborting the scan.
pub fn detect(
    dataset: &Dataset,
    relationships: &[CausalRelationship],
    config: &CausalAnalysisConfig,
    token: &CancellationToken,
) -> AnalysisResult<ConfoundingOutput> {
    let mut raw: Vec<ConfoundingFactor> = Vec::new();

    for relationship in relationships {
        token.bail()?;

        let candidates: Vec<&String> = dataset
            .variables()
            .iter()
            .filter(|v| **v != relationship.cause && **v != relationship.effect)
            .take(config.max_confounding_variables)
            .collect();

        let found: Vec<ConfoundingFactor> = candidates
            .par_iter()
            .filter_map(|candidate| {
                if token.is_cancelled() {
                    return None;
                }
                match screen_candidate(dataset, relationship, candidate, config) {
                    Ok(factor) => factor,
                    Err(error) => {
                        tracing::warn!(
                            candidate = candidate.as_str(),
                            relationship = relationship.id.as_str(),
                            %error,
                            "confounder candidate skipped"
                        );
                        None
                    }
                }
            })
            .collect();
        raw.extend(found);
    }

    token.bail()?;

    let confounders = merge_by_variable(raw);
    let metrics = super::metrics::compute_metrics(&confounders, relationships.len());
    Ok(ConfoundingOutput {
        confounders,
        metrics,
    })
}

/// The strongest confounder of a specific relationship, if any.
///
/// Absence is an explicit `None`, not a zero-impact placeholder.
pub fn find_confounder(
    dataset: &Dataset,
    relationship: &CausalRelationship,
    config: &CausalAnalysisConfig,
) -> Option<ConfoundingFactor> {
    let token = CancellationToken::new();
    detect(dataset, std::slice::from_ref(relationship), config, &token)
        .ok()?
        .confounders
        .into_iter()
        .next()
}

/// Screen one candidate against one relationship.
fn screen_candidate(
    dataset: &Dataset,
    relationship: &CausalRelationship,
    candidate: &str,
    config: &CausalAnalysisConfig,
) -> AnalysisResult<Option<ConfoundingFactor>> {
    let (cause, effect, control) =
        dataset.aligned_triple(&relationship.cause, &relationship.effect, candidate);
    let n = cause.len();
    if n < 3 {
        return Ok(None);
    }

    let r_cause = stats::pearson(&control, &cause);
    let r_effect = stats::pearson(&control, &effect);
    let p_cause = stats::two_sided_p_value(stats::correlation_t_statistic(r_cause, n));
    let p_effect = stats::two_sided_p_value(stats::correlation_t_statistic(r_effect, n));

    let raw = stats::pearson(&cause, &effect);
    let partial = stats::partial_correlation(&cause, &effect, &control);
    let impact = (raw - partial).abs().clamp(0.0, 1.0);

    if !impact.is_finite() {
        return Err(AnalysisError::Singular {
            context: format!("partial correlation for candidate {candidate}"),
        });
    }

    // Both associations must be significant AND controlling must move the
    // correlation materially.
    if p_cause >= ASSOCIATION_ALPHA
        || p_effect >= ASSOCIATION_ALPHA
        || impact <= config.confounding_threshold
    {
        return Ok(None);
    }

    let confidence = 0.3 * (1.0 - p_cause) + 0.3 * (1.0 - p_effect) + 0.4 * (impact * 2.0).min(1.0);

    let mut factor = ConfoundingFactor {
        variable: candidate.to_string(),
        affected_relationships: vec![relationship.id.clone()],
        impact,
        confidence: confidence.clamp(0.0, 1.0),
        detection_method: "partial correlation".to_string(),
        evidence: vec![format!(
            "controlling for {candidate} moves r({}, {}) from {raw:.3} to {partial:.3}",
            relationship.cause, relationship.effect
        )],
        statistics: std::collections::HashMap::new(),
    };
    factor.statistics.insert("correlation_with_cause".into(), r_cause);
    factor.statistics.insert("correlation_with_effect".into(), r_effect);
    factor.statistics.insert("p_value_cause".into(), p_cause);
    factor.statistics.insert("p_value_effect".into(), p_effect);
    factor.statistics.insert("raw_correlation".into(), raw);
    factor.statistics.insert("partial_correlation".into(), partial);

    Ok(Some(factor))
}

/// Merge per-relationship findings for the same variable: impact and
/// confidence are averaged, relationship and evidence lists unioned.
fn merge_by_variable(raw: Vec<ConfoundingFactor>) -> Vec<ConfoundingFactor> {
    let mut groups: BTreeMap<String, Vec<ConfoundingFactor>> = BTreeMap::new();
    for factor in raw {
        groups.entry(factor.variable.clone()).or_default().push(factor);
    }

    let mut merged: Vec<ConfoundingFactor> = groups
        .into_values()
        .filter_map(|group| {
            let count = group.len() as f64;
            let mut iter = group.into_iter();
            let mut base = iter.next()?;
            for other in iter {
                base.impact += other.impact;
                base.confidence += other.confidence;
                for id in other.affected_relationships {
                    if !base.affected_relationships.contains(&id) {
                        base.affected_relationships.push(id);
                    }
                }
                for line in other.evidence {
                    if !base.evidence.contains(&line) {
                        base.evidence.push(line);
                    }
                }
                for (key, value) in other.statistics {
                    base.statistics.entry(key).or_insert(value);
                }
            }
            base.impact = (base.impact / count).clamp(0.0, 1.0);
            base.confidence = (base.confidence / count).clamp(0.0, 1.0);
            Some(base)
        })
        .collect();

    merged.sort_by(|a, b| {
        b.impact
            .partial_cmp(&a.impact)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.variable.cmp(&b.variable))
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_averages_and_unions() {
        let make = |rel: &str, impact: f64| ConfoundingFactor {
            variable: "z".to_string(),
            affected_relationships: vec![rel.to_string()],
            impact,
            confidence: 0.6,
            detection_method: "partial correlation".to_string(),
            evidence: vec![format!("evidence for {rel}")],
            statistics: Default::default(),
        };
        let merged = merge_by_variable(vec![make("a->b", 0.4), make("c->d", 0.8)]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].impact - 0.6).abs() < 1e-9);
        assert_eq!(merged[0].affected_relationships.len(), 2);
        assert_eq!(merged[0].evidence.len(), 2);
    }
}
