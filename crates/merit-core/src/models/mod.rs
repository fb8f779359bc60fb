pub mod belief;
pub mod reputation;
pub mod score;
pub mod trace;
pub mod usefulness;

pub use belief::BeliefNode;
pub use reputation::{ReputationEvent, ReputationTrail};
pub use score::Score;
pub use trace::{IdeaTrace, OriginEvent};
pub use usefulness::{Feedback, UsefulnessRecord};
