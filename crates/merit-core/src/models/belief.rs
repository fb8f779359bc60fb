use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node in a rooted belief-label tree.
///
/// Alignment scoring only consults the flattened label set; tree structure
/// is preserved for callers that build or display the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefNode {
    pub label: String,
    pub children: Vec<BeliefNode>,
}

impl BeliefNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, node: BeliefNode) {
        self.children.push(node);
    }

    /// Builder-style child attachment.
    pub fn with_child(mut self, node: BeliefNode) -> Self {
        self.children.push(node);
        self
    }

    /// Every label in the tree, this node included.
    pub fn labels(&self) -> HashSet<&str> {
        let mut labels = HashSet::new();
        self.collect_labels(&mut labels);
        labels
    }

    fn collect_labels<'a>(&'a self, labels: &mut HashSet<&'a str>) {
        labels.insert(self.label.as_str());
        for child in &self.children {
            child.collect_labels(labels);
        }
    }
}
