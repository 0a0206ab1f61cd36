//! Sliding-window temporal analysis.
//!
//! Windows of `temporal_window_size` samples advance with 75% overlap
//! (step = max(1, size/4)). Each window runs the single-shot pipeline;
//! window-to-window stability is the Jaccard similarity of relationship
//! label sets, and a change point is recorded whenever stability crosses
//! below `causal_stability_threshold`.

use chrono::Utc;

use causeway_core::{
    stats, AnalysisResult, CancellationToken, CausalData, CausalChangePoint, Dataset,
    StabilityStatistics, TemporalCausalAnalysisResult, TemporalWindow,
};

use crate::CausalAnalysisEngine;

pub(crate) fn run(
    engine: &CausalAnalysisEngine,
    data: &[CausalData],
    token: &CancellationToken,
) -> AnalysisResult<TemporalCausalAnalysisResult> {
    let dataset = Dataset::new(data);
    let window_size = engine.config().temporal_window_size.min(dataset.len()).max(1);
    let step = (window_size / 4).max(1);

    let mut windows: Vec<TemporalWindow> = Vec::new();
    let mut change_points: Vec<CausalChangePoint> = Vec::new();
    let mut previous_labels: Option<std::collections::HashSet<String>> = None;
    let mut previous_stability = 1.0f64;

    let mut start = 0usize;
    while start + window_size <= dataset.len() {
        let view = dataset.window(start, window_size);
        let result = engine.run_pipeline(&view, token)?;

        let labels = result.relationship_labels();
        let stability_score = match &previous_labels {
            None => 1.0,
            Some(previous) => stats::jaccard(previous, &labels),
        };

        let start_time = view
            .samples()
            .first()
            .map(|s| s.timestamp)
            .unwrap_or_else(Utc::now);
        let end_time = view
            .samples()
            .last()
            .map(|s| s.timestamp)
            .unwrap_or(start_time);
        let index = windows.len();

        let threshold = engine.config().causal_stability_threshold;
        if previous_stability >= threshold && stability_score < threshold {
            tracing::info!(
                window = index,
                stability = stability_score,
                "causal change point detected"
            );
            change_points.push(CausalChangePoint {
                window_index: index,
                timestamp: start_time,
                stability_score,
                description: format!(
                    "relationship stability fell to {stability_score:.2}, below threshold \
                     {threshold:.2}"
                ),
            });
        }

        windows.push(TemporalWindow {
            index,
            start_time,
            end_time,
            result,
            stability_score,
        });

        previous_labels = Some(labels);
        previous_stability = stability_score;
        start += step;
    }

    let scores: Vec<f64> = windows.iter().map(|w| w.stability_score).collect();
    let stability = if scores.is_empty() {
        StabilityStatistics::default()
    } else {
        StabilityStatistics {
            mean: stats::mean(&scores),
            variance: stats::variance(&scores),
            min: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    };

    Ok(TemporalCausalAnalysisResult {
        windows,
        change_points,
        stability,
        analyzed_at: Utc::now(),
    })
}
