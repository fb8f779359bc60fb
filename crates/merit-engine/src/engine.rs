//! EcosystemEngine — orchestrates sub-score updates, composite scoring,
//! and delta-based token minting.

use merit_core::config::EngineConfig;
use merit_core::errors::MeritResult;
use merit_core::models::{BeliefNode, IdeaTrace, ReputationTrail, Score, UsefulnessRecord};
use merit_core::traits::{
    IIdentityVerifier, INotifier, IScoringAgent, NoopIdentityVerifier, NoopNotifier,
};
use merit_learn::{LearningMap, LearningNode};
use merit_ledger::TokenLedger;
use merit_scoring::AgentPanel;
use tracing::{debug, info};

use crate::store::{IIdeaStore, IdeaState, MemoryIdeaStore};

/// The aggregate root of the Merit ecosystem.
///
/// Owns the idea store, the token ledger, and the learning map; consults an
/// optional belief tree for alignment scoring. Every mutating operation
/// takes `&mut self`, which serializes writers at the type level — any
/// transport exposing the engine over concurrent connections must keep that
/// single-writer discipline per idea and per user.
pub struct EcosystemEngine {
    config: EngineConfig,
    store: Box<dyn IIdeaStore>,
    ledger: TokenLedger,
    learning_map: LearningMap,
    belief_tree: Option<BeliefNode>,
    notifier: Box<dyn INotifier>,
    verifier: Box<dyn IIdentityVerifier>,
}

impl EcosystemEngine {
    /// Engine with default weights, an in-memory store, and noop
    /// collaborators.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            store: Box::new(MemoryIdeaStore::new()),
            ledger: TokenLedger::new(),
            learning_map: LearningMap::new(),
            belief_tree: None,
            notifier: Box::new(NoopNotifier),
            verifier: Box::new(NoopIdentityVerifier),
        }
    }

    /// Engine with explicit weights. Rejects non-finite or negative weights.
    pub fn with_config(config: EngineConfig) -> MeritResult<Self> {
        config.validate()?;
        let mut engine = Self::new();
        engine.config = config;
        Ok(engine)
    }

    /// Attach a belief tree for alignment scoring.
    pub fn with_belief_tree(mut self, tree: BeliefNode) -> Self {
        self.belief_tree = Some(tree);
        self
    }

    /// Replace the noop notifier with a real fan-out.
    pub fn with_notifier(mut self, notifier: Box<dyn INotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the in-memory idea store.
    pub fn with_store(mut self, store: Box<dyn IIdeaStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the noop identity verifier.
    pub fn with_verifier(mut self, verifier: Box<dyn IIdentityVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    // --- Core operations ---

    /// Record a user interaction across all sub-score logs, then settle the
    /// composite: mint the positive delta to `user`, cache the new value,
    /// and publish an `interaction` event.
    pub fn add_interaction(&mut self, idea_id: &str, user: &str, tags: &[&str], description: &str) {
        {
            let state = self.store.get_or_create(idea_id);
            state
                .trace
                .get_or_insert_with(|| IdeaTrace::new(idea_id))
                .add_event(user, description, None);
            let record = state
                .usefulness
                .get_or_insert_with(|| UsefulnessRecord::new(idea_id));
            for tag in tags {
                record.add_feedback(user, tag, description);
            }
            state
                .reputation
                .get_or_insert_with(|| ReputationTrail::new(idea_id))
                .add_event(user, description);
        }

        let minted = self.settle_score(idea_id, Some(user));

        self.notifier.publish(
            "interaction",
            &serde_json::json!({
                "id": uuid::Uuid::new_v4().to_string(),
                "idea_id": idea_id,
                "user": user,
                "description": description,
                "minted": minted,
            }),
        );
    }

    /// Run the idea's scoring panel on `content`, then settle the composite
    /// exactly as an interaction would. Anonymous evaluation (`user` absent)
    /// updates the cached composite but never mints.
    ///
    /// Returns the panel's single-call result, not the composite; 0.0 when
    /// the idea has no panel.
    pub fn evaluate_content(&mut self, idea_id: &str, content: &str, user: Option<&str>) -> f64 {
        let panel_result = match self
            .store
            .get_mut(idea_id)
            .and_then(|state| state.panel.as_mut())
        {
            Some(panel) => panel.run_agents(content),
            None => 0.0,
        };

        self.settle_score(idea_id, user);
        panel_result
    }

    /// The weighted composite for an idea, or 0.0 before its first
    /// interaction (an idea with zero interactions has no composite).
    ///
    /// Weights are applied as configured, without normalization.
    pub fn overall_score(&self, idea_id: &str) -> f64 {
        let Some(state) = self.store.get(idea_id) else {
            return 0.0;
        };
        let (record, reputation) = match (&state.trace, &state.usefulness, &state.reputation) {
            (Some(_), Some(record), Some(reputation)) => (record, reputation),
            _ => return 0.0,
        };

        let alignment = match &self.belief_tree {
            Some(tree) => merit_signals::score_alignment(&record.tags(), tree),
            None => 0.0,
        };
        let content = state
            .panel
            .as_ref()
            .map(AgentPanel::last_score)
            .unwrap_or(0.0);

        self.config.impact_weight * merit_signals::impact_score(record)
            + self.config.trust_weight * merit_signals::trust_score(reputation)
            + self.config.alignment_weight * alignment
            + self.config.content_weight * content
    }

    /// Register a scoring agent on the idea's panel, creating the panel on
    /// first registration.
    pub fn add_scoring_agent(&mut self, idea_id: &str, agent: Box<dyn IScoringAgent>) {
        self.store
            .get_or_create(idea_id)
            .panel
            .get_or_insert_with(|| AgentPanel::new(idea_id))
            .add_agent(agent);
    }

    /// Recompute the composite, mint the positive delta to `user`, and
    /// record the new composite as the baseline for the next delta.
    ///
    /// The baseline moves unconditionally: a declining score is recorded
    /// but already-minted tokens are never clawed back. Returns the minted
    /// amount (0.0 when nothing was minted).
    fn settle_score(&mut self, idea_id: &str, user: Option<&str>) -> f64 {
        let composite = self.overall_score(idea_id);
        let previous = {
            let state = self.store.get_or_create(idea_id);
            let previous = state.last_score.value();
            state.last_score = Score::new(composite);
            previous
        };

        let delta = composite - previous;
        if delta > 0.0 {
            if let Some(user) = user {
                self.ledger.mint(user, delta);
                info!(idea_id, user, delta, composite, "minted on score improvement");
                return delta;
            }
            debug!(idea_id, delta, "score improved anonymously, nothing minted");
        } else {
            debug!(idea_id, delta, "composite did not improve, nothing minted");
        }
        0.0
    }

    // --- Identity facade ---

    /// Verify an identity token, returning the user id it belongs to.
    pub fn login(&self, id_token: &str) -> Option<String> {
        self.verifier.verify(id_token)
    }

    // --- Learning facade ---

    pub fn add_learning_node(&mut self, node: LearningNode) {
        self.learning_map.add_node(node);
    }

    pub fn available_lessons(&self, user: &str) -> Vec<String> {
        self.learning_map.available_nodes(&self.ledger, user)
    }

    pub fn complete_lesson(&mut self, user: &str, node_id: &str) -> bool {
        self.learning_map.complete_node(&self.ledger, user, node_id)
    }

    // --- Accessors ---

    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut TokenLedger {
        &mut self.ledger
    }

    pub fn learning_map(&self) -> &LearningMap {
        &self.learning_map
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// State recorded for an idea, if any.
    pub fn idea(&self, idea_id: &str) -> Option<&IdeaState> {
        self.store.get(idea_id)
    }
}

impl Default for EcosystemEngine {
    fn default() -> Self {
        Self::new()
    }
}
