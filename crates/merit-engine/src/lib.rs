//! # merit-engine
//!
//! The ecosystem aggregator. On every interaction or content evaluation it
//! updates the relevant sub-score logs, recomputes the weighted composite
//! for the idea, diffs against the last recorded composite, and mints
//! reputation tokens to the acting user when the idea's value increased.
//!
//! Tokens are a derivative of score *improvement*, not of absolute score:
//! an idea that is already excellent earns nothing further unless it keeps
//! improving.

pub mod bus;
pub mod engine;
pub mod store;

pub use bus::EventBus;
pub use engine::EcosystemEngine;
pub use store::{IIdeaStore, IdeaState, MemoryIdeaStore};
