//! Shared defaults and fixed tag sets.

/// Feedback tags that count toward an idea's usefulness score.
/// Matched case-insensitively.
pub const USEFUL_TAGS: [&str; 3] = ["success", "aha", "solution"];

/// Default weight on the usefulness (impact) sub-score.
pub const DEFAULT_IMPACT_WEIGHT: f64 = 0.4;

/// Default weight on the social-trust sub-score.
pub const DEFAULT_TRUST_WEIGHT: f64 = 0.4;

/// Default weight on the belief-alignment sub-score.
pub const DEFAULT_ALIGNMENT_WEIGHT: f64 = 0.2;

/// Default weight on the scoring-panel sub-score.
/// Content scoring is opt-in: integrators must weight it explicitly.
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.0;

/// Smoothing factor for the cyclic-revision blend.
/// 0.5 gives equal weight to the accumulated trend and the new observation.
pub const DEFAULT_REVISION_WEIGHT: f64 = 0.5;
