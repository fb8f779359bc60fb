use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One social-trust event on an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationEvent {
    pub actor: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only reputation log for one idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationTrail {
    pub item_id: String,
    events: Vec<ReputationEvent>,
}

impl ReputationTrail {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            events: Vec::new(),
        }
    }

    pub fn add_event(&mut self, actor: &str, description: &str) {
        self.events.push(ReputationEvent {
            actor: actor.to_string(),
            description: description.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn events(&self) -> &[ReputationEvent] {
        &self.events
    }
}
