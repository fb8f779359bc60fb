//! # merit-scoring
//!
//! Decentralized content scoring: a panel of pluggable agents per idea,
//! with new observations blended into the accumulated trend via a
//! fixed-weight exponential moving average (cyclic revision). The blend
//! damps single noisy evaluations against the idea's scoring history.

pub mod panel;
pub mod revision;

pub use panel::AgentPanel;
pub use revision::cyclic_revision;
