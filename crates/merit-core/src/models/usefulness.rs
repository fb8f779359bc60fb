use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One piece of usefulness feedback on an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub user: String,
    pub tag: String,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only feedback log for one idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsefulnessRecord {
    pub item_id: String,
    feedback: Vec<Feedback>,
}

impl UsefulnessRecord {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            feedback: Vec::new(),
        }
    }

    pub fn add_feedback(&mut self, user: &str, tag: &str, notes: &str) {
        self.feedback.push(Feedback {
            user: user.to_string(),
            tag: tag.to_string(),
            notes: notes.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// All tags in insertion order.
    pub fn tags(&self) -> Vec<&str> {
        self.feedback.iter().map(|fb| fb.tag.as_str()).collect()
    }
}
