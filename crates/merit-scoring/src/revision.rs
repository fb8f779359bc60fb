/// Blend a new score into the history with a fixed-weight moving average.
///
/// An empty history takes the new score unchanged — there is no trend to
/// damp against on the first observation. Otherwise the appended value is
/// `(1 - weight) * last + weight * new_score`. Exactly one value is
/// appended per call, and the history is never reordered or truncated.
pub fn cyclic_revision(score_history: &mut Vec<f64>, new_score: f64, weight: f64) -> f64 {
    let updated = match score_history.last() {
        None => new_score,
        Some(last) => (1.0 - weight) * last + weight * new_score,
    };
    score_history.push(updated);
    updated
}
