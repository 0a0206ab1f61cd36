//! # causeway-sem
//!
//! Structural equation modeling: one linear equation per effect variable,
//! fitted from that variable's validated causes by closed-form OLS.
//! (`sem_convergence_threshold` / `max_sem_iterations` in the config refer
//! to an iterative fitter this crate deliberately does not implement.)

pub mod ols;

use std::collections::BTreeMap;

use causeway_core::constants::Z_95;
use causeway_core::models::equation::standard_assumptions;
use causeway_core::{
    stats, CausalRelationship, Dataset, EquationTerm, ModelStatistics, StructuralEquation,
};

/// Output of structural modeling.
#[derive(Debug, Clone)]
pub struct ModelingOutput {
    pub equations: Vec<StructuralEquation>,
    pub statistics: ModelStatistics,
}

/// Fit one equation per effect variable appearing in `relationships`.
///
/// Effects whose usable sample rows cannot support the design (n < k + 2)
/// are skipped with a warning; a failed fit never aborts the run.
pub fn fit_equations(dataset: &Dataset, relationships: &[CausalRelationship]) -> ModelingOutput {
    // Group causes per effect, keeping deterministic (sorted) cause order.
    let mut by_effect: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for relationship in relationships {
        let causes = by_effect.entry(relationship.effect.as_str()).or_default();
        if !causes.contains(&relationship.cause.as_str()) {
            causes.push(relationship.cause.as_str());
        }
    }

    let mut equations = Vec::new();
    for (effect, mut causes) in by_effect {
        causes.sort_unstable();
        match fit_single(dataset, effect, &causes) {
            Ok(equation) => equations.push(equation),
            Err(error) => {
                tracing::warn!(effect, %error, "structural equation skipped");
            }
        }
    }

    let statistics = aggregate(&equations);
    ModelingOutput {
        equations,
        statistics,
    }
}

fn fit_single(
    dataset: &Dataset,
    effect: &str,
    causes: &[&str],
) -> causeway_core::AnalysisResult<StructuralEquation> {
    // Rows come only from samples that carry the effect and every cause.
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut y: Vec<f64> = Vec::new();
    'samples: for sample in dataset.samples() {
        let Some(&target) = sample.variables.get(effect) else {
            continue;
        };
        let mut row = Vec::with_capacity(causes.len());
        for cause in causes {
            match sample.variables.get(*cause) {
                Some(&value) => row.push(value),
                None => continue 'samples,
            }
        }
        rows.push(row);
        y.push(target);
    }

    let fit = ols::fit(&rows, &y)?;
    if fit.used_pseudo_inverse {
        tracing::debug!(effect, "normal equations ill-conditioned, used SVD pseudo-inverse");
    }

    let names: Vec<String> = std::iter::once("intercept".to_string())
        .chain(causes.iter().map(|c| c.to_string()))
        .collect();

    let terms: Vec<EquationTerm> = names
        .into_iter()
        .enumerate()
        .map(|(j, variable)| {
            let coefficient = fit.coefficients[j];
            let std_error = fit.std_errors[j];
            let t_statistic = if std_error > causeway_core::constants::EPSILON {
                coefficient / std_error
            } else {
                0.0
            };
            EquationTerm {
                variable,
                coefficient,
                std_error,
                t_statistic,
                p_value: stats::two_sided_p_value(t_statistic),
                confidence_interval: (
                    coefficient - Z_95 * std_error,
                    coefficient + Z_95 * std_error,
                ),
            }
        })
        .collect();

    let mut fit_map = std::collections::HashMap::new();
    fit_map.insert("aic".to_string(), fit.aic);
    fit_map.insert("bic".to_string(), fit.bic);
    fit_map.insert("rmse".to_string(), fit.rmse);

    Ok(StructuralEquation {
        dependent: effect.to_string(),
        terms,
        r_squared: fit.r_squared,
        adjusted_r_squared: fit.adjusted_r_squared,
        std_error: fit.residual_std_error,
        fit: fit_map,
        sample_count: fit.sample_count,
        assumptions: standard_assumptions(),
    })
}

/// Mean R²/adjusted-R² across equations plus parameter and error totals.
fn aggregate(equations: &[StructuralEquation]) -> ModelStatistics {
    if equations.is_empty() {
        return ModelStatistics::default();
    }
    let count = equations.len() as f64;
    ModelStatistics {
        overall_fit: equations.iter().map(|e| e.r_squared).sum::<f64>() / count,
        overall_adjusted_fit: equations.iter().map(|e| e.adjusted_r_squared).sum::<f64>() / count,
        equation_count: equations.len(),
        parameter_count: equations.iter().map(|e| e.terms.len()).sum(),
        mean_std_error: equations.iter().map(|e| e.std_error).sum::<f64>() / count,
    }
}
