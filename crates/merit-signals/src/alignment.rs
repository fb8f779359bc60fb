use merit_core::models::BeliefNode;

/// Fraction of tags present anywhere in the belief tree's label set.
///
/// Membership is an exact, case-sensitive label match; tree structure is
/// ignored beyond the flattened label collection. 0.0 with no tags.
pub fn score_alignment<S: AsRef<str>>(info_tags: &[S], belief_tree: &BeliefNode) -> f64 {
    let labels = belief_tree.labels();
    let matches = info_tags
        .iter()
        .filter(|t| labels.contains(t.as_ref()))
        .count();
    matches as f64 / info_tags.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_the_tags_match() {
        let tree = BeliefNode::new("growth").with_child(BeliefNode::new("freedom"));
        assert_eq!(score_alignment(&["growth", "justice"], &tree), 0.5);
    }

    #[test]
    fn no_tags_scores_zero() {
        let tree = BeliefNode::new("growth");
        let tags: [&str; 0] = [];
        assert_eq!(score_alignment(&tags, &tree), 0.0);
    }

    #[test]
    fn nested_labels_count() {
        let tree = BeliefNode::new("growth")
            .with_child(BeliefNode::new("freedom").with_child(BeliefNode::new("autonomy")));
        assert_eq!(score_alignment(&["autonomy"], &tree), 1.0);
    }

    #[test]
    fn match_is_case_sensitive() {
        let tree = BeliefNode::new("growth");
        assert_eq!(score_alignment(&["Growth"], &tree), 0.0);
    }
}
