//! # merit-learn
//!
//! A lesson graph gated by reputation-token balances. The threshold on a
//! node is a balance check, not a charge: completing a lesson never debits
//! the ledger.

use std::collections::HashMap;

use merit_ledger::TokenLedger;
use serde::{Deserialize, Serialize};

/// A lesson or goal in the learning map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningNode {
    pub node_id: String,
    pub required_tokens: f64,
    /// Ids of follow-on lessons.
    pub children: Vec<String>,
}

impl LearningNode {
    pub fn new(node_id: impl Into<String>, required_tokens: f64) -> Self {
        Self {
            node_id: node_id.into(),
            required_tokens,
            children: Vec::new(),
        }
    }
}

/// Tracks user progress through token-gated lessons.
///
/// The ledger is consulted, never owned: callers pass it per operation so
/// the aggregate root keeps single ownership of balances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningMap {
    nodes: Vec<LearningNode>,
    /// Per-user completion sequence, insertion order = completion order.
    progress: HashMap<String, Vec<String>>,
}

impl LearningMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: LearningNode) {
        self.nodes.push(node);
    }

    pub fn node(&self, node_id: &str) -> Option<&LearningNode> {
        self.nodes.iter().find(|n| n.node_id == node_id)
    }

    /// Nodes the user can enter: not yet completed, and the user's balance
    /// meets the node's threshold. Registration order.
    pub fn available_nodes(&self, ledger: &TokenLedger, user: &str) -> Vec<String> {
        let balance = ledger.balance_of(user);
        let completed = self.completed(user);
        self.nodes
            .iter()
            .filter(|n| !completed.contains(&n.node_id.as_str()) && balance >= n.required_tokens)
            .map(|n| n.node_id.clone())
            .collect()
    }

    /// Mark a node completed. Fails without mutation when the node is not
    /// currently available to the user.
    pub fn complete_node(&mut self, ledger: &TokenLedger, user: &str, node_id: &str) -> bool {
        if !self
            .available_nodes(ledger, user)
            .iter()
            .any(|id| id == node_id)
        {
            return false;
        }
        self.progress
            .entry(user.to_string())
            .or_default()
            .push(node_id.to_string());
        true
    }

    /// The user's completion sequence so far.
    pub fn completed_nodes(&self, user: &str) -> &[String] {
        self.progress.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    fn completed(&self, user: &str) -> std::collections::HashSet<&str> {
        self.completed_nodes(user)
            .iter()
            .map(String::as_str)
            .collect()
    }
}
