//! # merit-signals
//!
//! The independent sub-score providers feeding the ecosystem composite.
//! Each module is a pure scalar function over the append-only log models in
//! `merit-core`; all outputs fall in [0, 1] unless noted otherwise.

pub mod alignment;
pub mod heuristics;
pub mod reputation;
pub mod trace;
pub mod usefulness;

pub use alignment::score_alignment;
pub use reputation::trust_score;
pub use trace::{semantic_provenance, temporal_layering};
pub use usefulness::impact_score;
