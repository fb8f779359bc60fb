use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single event in an idea's journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginEvent {
    pub actor: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    /// Another idea this event relates to, if any.
    pub related_idea: Option<String>,
}

/// Tracks the contextual journey of an idea.
///
/// The event log is append-only: entries are never mutated or removed, and
/// ordering is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaTrace {
    pub idea_id: String,
    events: Vec<OriginEvent>,
}

impl IdeaTrace {
    pub fn new(idea_id: impl Into<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            events: Vec::new(),
        }
    }

    /// Append an event attributed to `actor`, timestamped now.
    pub fn add_event(&mut self, actor: &str, description: &str, related_idea: Option<&str>) {
        self.events.push(OriginEvent {
            actor: actor.to_string(),
            timestamp: Utc::now(),
            description: description.to_string(),
            related_idea: related_idea.map(str::to_string),
        });
    }

    pub fn events(&self) -> &[OriginEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// A simple textual representation of the idea's path.
    pub fn origin_map(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| format!("{} | {}: {}", e.timestamp.to_rfc3339(), e.actor, e.description))
            .collect()
    }

    pub fn last_actor(&self) -> Option<&str> {
        self.events.last().map(|e| e.actor.as_str())
    }
}
