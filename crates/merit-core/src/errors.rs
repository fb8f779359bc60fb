use thiserror::Error;

/// Result alias used across the workspace.
pub type MeritResult<T> = Result<T, MeritError>;

/// Errors raised for programmer mistakes at configuration boundaries.
///
/// Business-rule outcomes (insufficient balance, gating denied, missing idea
/// state, empty panel) are never errors — they resolve to documented neutral
/// or failure values so integrators can branch without error handling.
#[derive(Debug, Error)]
pub enum MeritError {
    #[error("invalid weight `{name}`: {value} (weights must be finite and >= 0)")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
