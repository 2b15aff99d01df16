// Skill co-occurrence over per-posting inferred skill sets.
use crate::analyzer::{Snapshot, normalize_query, value_counts};
use crate::model::QueryError;

/// Skills most often inferred alongside `skill` on the same posting, the
/// target itself excluded, at most `limit` entries. Ties past the cutoff
/// keep first-appearance order, so the result is only stable for a fixed
/// row order.
pub fn co_skills(
    snapshot: &Snapshot,
    skill: &str,
    limit: usize,
) -> Result<Vec<(String, usize)>, QueryError> {
    let skill = normalize_query(skill)?;

    let mut counts = value_counts(
        snapshot
            .skill_sets
            .iter()
            .filter(|set| set.iter().any(|s| *s == skill))
            .flat_map(|set| set.iter().map(String::as_str))
            .filter(|s| *s != skill),
    );
    counts.truncate(limit);

    if counts.is_empty() {
        return Err(QueryError::NoResults(skill));
    }
    Ok(counts)
}
