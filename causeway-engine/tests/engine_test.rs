//! End-to-end pipeline tests over the seeded engineering scenario.

use causeway_core::{AnalysisError, CancellationToken, CausalAnalysisConfig, InsightKind};
use causeway_engine::CausalAnalysisEngine;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ==== full pipeline ====

#[tokio::test]
async fn end_to_end_engineering_scenario() {
    init_tracing();
    let data = test_fixtures::engineering_scenario(60, 2);
    let engine = CausalAnalysisEngine::with_defaults();
    let result = engine.analyze(&data).await.unwrap();

    // Planted structure is recovered.
    let labels = result.relationship_labels();
    assert!(result.relationships.len() >= 2);
    assert!(labels.contains("CodeComplexity->ExecutionTime"));
    assert!(labels.contains("CodeComplexity->MemoryUsage"));
    assert!(labels.contains("TestCoverage->ErrorRate"));

    // The unrelated noise variable never produces a strong relationship.
    for relationship in &result.relationships {
        if relationship.cause == "TeamSize" || relationship.effect == "TeamSize" {
            assert!(relationship.strength <= 0.3, "spurious {}", relationship.id);
        }
    }

    // Every downstream phase produced output for this dataset.
    assert!(!result.equations.is_empty());
    assert!(!result.interventions.is_empty());
    assert_eq!(result.validation.len(), result.relationships.len());
    assert!(result.validation.iter().all(|v| v.passed));
    assert!(result.graph.is_consistent());
    assert_eq!(result.sample_count, 60);

    for relationship in &result.relationships {
        let strength = result.causal_strengths.get(&relationship.id).copied();
        assert!(strength.is_some(), "no blended strength for {}", relationship.id);
        assert!((0.0..=1.0).contains(&strength.unwrap()));
    }

    assert!(
        result.overall_confidence > 0.5,
        "overall confidence {}",
        result.overall_confidence
    );

    // Strong validated structure surfaces as an insight, and the strongest
    // relationship drives the optimize recommendation.
    assert!(result
        .insights
        .iter()
        .any(|i| i.kind == InsightKind::StrongCausality));
    assert!(!result.recommendations.is_empty());
    assert_eq!(result.recommendations[0].action, "optimize");
}

#[tokio::test]
async fn identical_inputs_reproduce_identical_results() {
    let data = test_fixtures::engineering_scenario(60, 2);
    let engine = CausalAnalysisEngine::with_defaults();
    let first = engine.analyze(&data).await.unwrap();
    let second = engine.analyze(&data).await.unwrap();

    assert_eq!(first.relationships.len(), second.relationships.len());
    for (a, b) in first.relationships.iter().zip(&second.relationships) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.strength, b.strength);
        assert_eq!(a.confidence, b.confidence);
    }
    assert_eq!(first.overall_confidence, second.overall_confidence);
    assert_eq!(first.causal_strengths, second.causal_strengths);
}

// ==== edge cases ====

#[tokio::test]
async fn empty_dataset_yields_empty_result() {
    let engine = CausalAnalysisEngine::with_defaults();
    let result = engine.analyze(&[]).await.unwrap();
    assert!(result.relationships.is_empty());
    assert!(result.equations.is_empty());
    assert!(result.confounders.is_empty());
    assert_eq!(result.overall_confidence, 0.0);
    assert_eq!(result.sample_count, 0);
}

#[tokio::test]
async fn invalid_config_is_rejected_up_front() {
    let config = CausalAnalysisConfig {
        min_causal_strength: 1.5,
        ..CausalAnalysisConfig::default()
    };
    let engine = CausalAnalysisEngine::new(config);
    let data = test_fixtures::engineering_scenario(60, 2);
    assert!(matches!(
        engine.analyze(&data).await,
        Err(AnalysisError::InvalidConfig { .. })
    ));
}

#[tokio::test]
async fn cancelled_token_aborts_analysis() {
    let data = test_fixtures::engineering_scenario(60, 2);
    let engine = CausalAnalysisEngine::with_defaults();
    let token = CancellationToken::new();
    token.cancel();
    assert!(matches!(
        engine.analyze_with_token(&data, &token).await,
        Err(AnalysisError::Cancelled)
    ));
}
