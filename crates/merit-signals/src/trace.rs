use std::collections::HashSet;

use chrono::{DateTime, Utc};

/// Word-overlap similarity between a text and its claimed antecedents.
///
/// For each related text: shared words / max(words in current, 1), then the
/// mean across antecedents. 0.0 with no related texts. A lightweight stand-in
/// for embedding-based semantic provenance.
pub fn semantic_provenance(current_text: &str, related_texts: &[&str]) -> f64 {
    if related_texts.is_empty() {
        return 0.0;
    }
    let current_lower = current_text.to_lowercase();
    let current: HashSet<&str> = current_lower.split_whitespace().collect();

    let total: f64 = related_texts
        .iter()
        .map(|rt| {
            let rt_lower = rt.to_lowercase();
            let overlap = rt_lower
                .split_whitespace()
                .collect::<HashSet<&str>>()
                .into_iter()
                .filter(|w| current.contains(w))
                .count();
            overlap as f64 / current.len().max(1) as f64
        })
        .sum();
    total / related_texts.len() as f64
}

/// Weight an event by temporal proximity to its context.
///
/// 1 hour apart weighs 0.5, 1 day apart roughly 0.04.
pub fn temporal_layering(event_time: DateTime<Utc>, context_time: DateTime<Utc>) -> f64 {
    let delta = (context_time - event_time).num_seconds().abs() as f64;
    1.0 / (1.0 + delta / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn no_antecedents_scores_zero() {
        assert_eq!(semantic_provenance("hello world", &[]), 0.0);
    }

    #[test]
    fn full_overlap_scores_one() {
        assert_eq!(semantic_provenance("hello world", &["world hello"]), 1.0);
    }

    #[test]
    fn partial_overlap_is_averaged() {
        let score = semantic_provenance("hello world", &["hello", "world news"]);
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn simultaneous_events_weigh_one() {
        let now = Utc::now();
        assert_eq!(temporal_layering(now, now), 1.0);
    }

    #[test]
    fn weight_decays_with_distance() {
        let now = Utc::now();
        let hour = temporal_layering(now, now + Duration::hours(1));
        let day = temporal_layering(now, now + Duration::days(1));
        assert!((hour - 0.5).abs() < 1e-9);
        assert!(day < hour);
    }
}
