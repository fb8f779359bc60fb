use std::collections::HashMap;

use merit_core::models::{IdeaTrace, ReputationTrail, Score, UsefulnessRecord};
use merit_scoring::AgentPanel;

/// Everything the aggregator tracks for one idea.
///
/// Logs are created lazily: a field stays `None` until the first operation
/// that touches it. `overall_score` treats an idea without all three
/// interaction logs as unscored.
#[derive(Debug, Default)]
pub struct IdeaState {
    pub trace: Option<IdeaTrace>,
    pub usefulness: Option<UsefulnessRecord>,
    pub reputation: Option<ReputationTrail>,
    pub panel: Option<AgentPanel>,
    /// Composite recorded by the most recent settle, the baseline for the
    /// next delta. Defaults to 0 for an idea never scored.
    pub last_score: Score,
}

/// Backing store for per-idea state, injected into the aggregator.
///
/// An explicit seam instead of module-level shared maps: swapping the
/// backing store or isolating tests requires no global state.
pub trait IIdeaStore: Send + Sync {
    fn get(&self, idea_id: &str) -> Option<&IdeaState>;
    fn get_mut(&mut self, idea_id: &str) -> Option<&mut IdeaState>;
    /// Fetch the idea's state, creating empty state on first sight.
    fn get_or_create(&mut self, idea_id: &str) -> &mut IdeaState;
}

/// HashMap-backed store, the default for a single-process ecosystem.
#[derive(Debug, Default)]
pub struct MemoryIdeaStore {
    ideas: HashMap<String, IdeaState>,
}

impl MemoryIdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}

impl IIdeaStore for MemoryIdeaStore {
    fn get(&self, idea_id: &str) -> Option<&IdeaState> {
        self.ideas.get(idea_id)
    }

    fn get_mut(&mut self, idea_id: &str) -> Option<&mut IdeaState> {
        self.ideas.get_mut(idea_id)
    }

    fn get_or_create(&mut self, idea_id: &str) -> &mut IdeaState {
        self.ideas.entry(idea_id.to_string()).or_default()
    }
}
