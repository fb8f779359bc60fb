use merit_core::constants::USEFUL_TAGS;
use merit_core::models::UsefulnessRecord;

/// Frequency of useful tags across the feedback log.
///
/// Tags are matched case-insensitively against the fixed useful set.
/// 0.0 for a record with no feedback.
pub fn impact_score(record: &UsefulnessRecord) -> f64 {
    let useful = record
        .feedback()
        .iter()
        .filter(|fb| {
            let tag = fb.tag.to_lowercase();
            USEFUL_TAGS.contains(&tag.as_str())
        })
        .count();
    useful as f64 / record.feedback().len().max(1) as f64
}
