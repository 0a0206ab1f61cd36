//! Structural equation modeling against known generating equations.

use causeway_core::{CausalData, CausalRelationship, Dataset};
use causeway_sem::fit_equations;
use test_fixtures::Noise;

fn relationship(cause: &str, effect: &str) -> CausalRelationship {
    CausalRelationship::new(cause, effect, 0.9, 0.9, "PC Algorithm")
}

// ==== single-cause recovery ====

#[test]
fn recovers_simple_regression_coefficients() {
    // y = 5 + 2x + small noise
    let data = test_fixtures::regression_pair(50, "x", "y", 5.0, 2.0, 0.5, 2);
    let dataset = Dataset::new(&data);
    let output = fit_equations(&dataset, &[relationship("x", "y")]);

    assert_eq!(output.equations.len(), 1);
    let equation = &output.equations[0];
    assert_eq!(equation.dependent, "y");
    assert_eq!(equation.sample_count, 50);

    let intercept = equation.coefficient("intercept").unwrap();
    let slope = equation.coefficient("x").unwrap();
    assert!((intercept - 5.0).abs() < 0.3, "intercept {intercept}");
    assert!((slope - 2.0).abs() < 0.3, "slope {slope}");
    assert!(equation.r_squared > 0.9, "r² {}", equation.r_squared);

    let slope_term = equation.terms.iter().find(|t| t.variable == "x").unwrap();
    assert!(slope_term.p_value < 0.01);
    assert!(slope_term.confidence_interval.0 < slope);
    assert!(slope_term.confidence_interval.1 > slope);

    for key in ["aic", "bic", "rmse"] {
        assert!(equation.fit.contains_key(key), "missing {key}");
    }
    assert_eq!(output.statistics.equation_count, 1);
    assert!(output.statistics.overall_fit > 0.9);
}

// ==== multi-cause recovery ====

#[test]
fn recovers_two_cause_equation() {
    // y = 1 + 2a + 3b + small noise, a and b independent.
    let mut noise = Noise::new(21);
    let n = 40;
    let a: Vec<f64> = (0..n).map(|_| 10.0 + 5.0 * noise.unit()).collect();
    let b: Vec<f64> = (0..n).map(|_| 3.0 * noise.unit()).collect();
    let data: Vec<CausalData> = (0..n)
        .map(|i| {
            let y = 1.0 + 2.0 * a[i] + 3.0 * b[i] + 0.1 * noise.unit();
            test_fixtures::sample(i, &[("a", a[i]), ("b", b[i]), ("y", y)])
        })
        .collect();
    let dataset = Dataset::new(&data);

    let output = fit_equations(
        &dataset,
        &[relationship("a", "y"), relationship("b", "y")],
    );
    assert_eq!(output.equations.len(), 1);
    let equation = &output.equations[0];
    assert_eq!(equation.terms.len(), 3);
    assert_eq!(equation.causes().collect::<Vec<_>>(), vec!["a", "b"]);

    assert!((equation.coefficient("intercept").unwrap() - 1.0).abs() < 0.3);
    assert!((equation.coefficient("a").unwrap() - 2.0).abs() < 0.1);
    assert!((equation.coefficient("b").unwrap() - 3.0).abs() < 0.1);
    assert!(equation.r_squared > 0.99);
}

#[test]
fn duplicate_causes_collapse_to_one_term() {
    let data = test_fixtures::regression_pair(50, "x", "y", 5.0, 2.0, 0.5, 2);
    let dataset = Dataset::new(&data);
    // The same cause reported by two detectors must not enter the design twice.
    let output = fit_equations(
        &dataset,
        &[relationship("x", "y"), relationship("x", "y")],
    );
    assert_eq!(output.equations.len(), 1);
    assert_eq!(output.equations[0].terms.len(), 2);
}

// ==== failure handling ====

#[test]
fn under_sampled_effect_is_skipped_not_fatal() {
    let data = test_fixtures::regression_pair(3, "x", "y", 5.0, 2.0, 0.5, 2);
    let dataset = Dataset::new(&data);
    let output = fit_equations(&dataset, &[relationship("x", "y")]);
    assert!(output.equations.is_empty());
    assert_eq!(output.statistics.equation_count, 0);
}

#[test]
fn no_relationships_yields_empty_model() {
    let data = test_fixtures::regression_pair(50, "x", "y", 5.0, 2.0, 0.5, 2);
    let dataset = Dataset::new(&data);
    let output = fit_equations(&dataset, &[]);
    assert!(output.equations.is_empty());
    assert_eq!(output.statistics.parameter_count, 0);
}
