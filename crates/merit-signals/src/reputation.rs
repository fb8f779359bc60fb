use std::collections::HashSet;

use merit_core::models::ReputationTrail;

/// Trust derived from breadth of distinct contributors over raw volume:
/// unique actors / total events. 0.0 for an empty trail.
pub fn trust_score(trail: &ReputationTrail) -> f64 {
    let unique: HashSet<&str> = trail.events().iter().map(|e| e.actor.as_str()).collect();
    unique.len() as f64 / trail.events().len().max(1) as f64
}
