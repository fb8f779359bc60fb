//! Descriptive pattern-integrity heuristics.
//!
//! Stateless helpers for callers composing their own idea diagnostics;
//! the ecosystem composite does not consume these directly.

/// Whether a pattern holds across scales, measured by variance.
/// Lower variance means higher integrity. 0.0 for an empty sample.
pub fn fractal_integrity(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    1.0 / (1.0 + variance)
}

/// How well predictions align with observations: 1 / (1 + mean abs error).
/// 0.0 when either side is empty or the lengths differ.
pub fn predictive_coherence(predicted: &[f64], observed: &[f64]) -> f64 {
    if predicted.is_empty() || observed.is_empty() || predicted.len() != observed.len() {
        return 0.0;
    }
    let mean_error = predicted
        .iter()
        .zip(observed)
        .map(|(p, o)| (p - o).abs())
        .sum::<f64>()
        / predicted.len() as f64;
    1.0 / (1.0 + mean_error)
}

/// Higher when more limitations are acknowledged relative to claims made.
pub fn self_awareness_metric(acknowledged_limits: usize, total_claims: usize) -> f64 {
    if total_claims == 0 {
        return 0.0;
    }
    acknowledged_limits as f64 / total_claims as f64
}

/// Combine scores from independent discoveries of the same pattern.
pub fn redundant_discovery_score(independent_scores: &[f64]) -> f64 {
    if independent_scores.is_empty() {
        return 0.0;
    }
    independent_scores.iter().sum::<f64>() / independent_scores.len() as f64
}

/// Occurrences of a pattern relative to the domains examined.
/// Unbounded above: more occurrences than domains is meaningful.
pub fn system_coherence(pattern_occurrences: usize, domain_count: usize) -> f64 {
    if domain_count == 0 {
        return 0.0;
    }
    pattern_occurrences as f64 / domain_count as f64
}
