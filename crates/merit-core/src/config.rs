use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{MeritError, MeritResult};

/// Weights applied to each sub-score when computing an idea's composite.
///
/// Weights are not required to sum to 1 and are never normalized — callers
/// are responsible for choosing a consistent weighting scheme. Validation
/// only rejects non-finite or negative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight on the usefulness (impact) sub-score.
    pub impact_weight: f64,
    /// Weight on the social-trust sub-score.
    pub trust_weight: f64,
    /// Weight on the belief-alignment sub-score.
    pub alignment_weight: f64,
    /// Weight on the scoring-panel sub-score. Defaults to 0.0: content
    /// scoring earns nothing unless the integrator opts in.
    pub content_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            impact_weight: constants::DEFAULT_IMPACT_WEIGHT,
            trust_weight: constants::DEFAULT_TRUST_WEIGHT,
            alignment_weight: constants::DEFAULT_ALIGNMENT_WEIGHT,
            content_weight: constants::DEFAULT_CONTENT_WEIGHT,
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML. Missing fields take defaults.
    pub fn from_toml(toml_str: &str) -> MeritResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed weights at the boundary.
    pub fn validate(&self) -> MeritResult<()> {
        for (name, value) in [
            ("impact_weight", self.impact_weight),
            ("trust_weight", self.trust_weight),
            ("alignment_weight", self.alignment_weight),
            ("content_weight", self.content_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MeritError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}
