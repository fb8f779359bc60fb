use merit_core::constants::DEFAULT_REVISION_WEIGHT;
use merit_core::traits::IScoringAgent;
use tracing::warn;

use crate::revision::cyclic_revision;

/// An ordered panel of scoring agents attached to one idea, plus the
/// append-only history of blended results.
pub struct AgentPanel {
    pub item_id: String,
    agents: Vec<Box<dyn IScoringAgent>>,
    score_history: Vec<f64>,
}

impl AgentPanel {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            agents: Vec::new(),
            score_history: Vec::new(),
        }
    }

    pub fn add_agent(&mut self, agent: Box<dyn IScoringAgent>) {
        self.agents.push(agent);
    }

    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    pub fn score_history(&self) -> &[f64] {
        &self.score_history
    }

    /// Last blended value, or 0.0 before any evaluation.
    pub fn last_score(&self) -> f64 {
        self.score_history.last().copied().unwrap_or(0.0)
    }

    /// Run every agent on `content`, average the finite evaluations, and
    /// blend the mean into the history via cyclic revision.
    ///
    /// Returns 0.0 with no history append when the panel is empty. An agent
    /// returning a non-finite value is skipped and the remaining agents are
    /// averaged; if every evaluation was non-finite the call returns 0.0
    /// and leaves the history untouched.
    pub fn run_agents(&mut self, content: &str) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }

        let mut sum = 0.0;
        let mut count = 0usize;
        for agent in &self.agents {
            let score = agent.evaluate(content);
            if score.is_finite() {
                sum += score;
                count += 1;
            } else {
                warn!(agent = agent.name(), score, "skipping non-finite agent score");
            }
        }

        if count == 0 {
            return 0.0;
        }

        let avg = sum / count as f64;
        cyclic_revision(&mut self.score_history, avg, DEFAULT_REVISION_WEIGHT)
    }
}

impl std::fmt::Debug for AgentPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentPanel")
            .field("item_id", &self.item_id)
            .field("agents", &self.agent_names())
            .field("score_history", &self.score_history)
            .finish()
    }
}
