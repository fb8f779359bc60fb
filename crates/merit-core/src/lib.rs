//! # merit-core
//!
//! Foundation crate for the Merit reputation system.
//! Defines the append-only log models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{MeritError, MeritResult};
pub use models::{
    BeliefNode, Feedback, IdeaTrace, OriginEvent, ReputationEvent, ReputationTrail, Score,
    UsefulnessRecord,
};
pub use traits::{FnAgent, IIdentityVerifier, INotifier, IScoringAgent};
