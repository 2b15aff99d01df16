// Aggregate views over the expanded posting table.

pub mod cooccur;
pub mod demand;

use crate::model::{Posting, QueryError, TaggedPosting};
use crate::tagger;
use std::collections::HashMap;

/// Immutable per-session view of the dataset: the expanded rows plus the
/// inferred skill set of each original posting. Loaded once at startup;
/// every dashboard action is a pure function over it.
pub struct Snapshot {
    pub rows: Vec<TaggedPosting>,
    pub skill_sets: Vec<Vec<String>>,
}

impl Snapshot {
    pub fn from_postings(postings: &[Posting]) -> Self {
        Self {
            rows: tagger::expand(postings),
            skill_sets: postings
                .iter()
                .map(|p| tagger::assign_skills(&p.title))
                .collect(),
        }
    }

    pub fn posting_count(&self) -> usize {
        self.skill_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalizes a free-text query, rejecting empty or whitespace-only input
/// before any table lookup happens.
pub fn normalize_query(input: &str) -> Result<String, QueryError> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return Err(QueryError::EmptyInput);
    }
    Ok(query)
}

/// Occurrence counts, most frequent first. The sort is stable, so ties keep
/// first-appearance order.
pub(crate) fn value_counts<'a, I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for item in items {
        if !counts.contains_key(item) {
            order.push(item);
        }
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|key| (key.to_string(), counts[key]))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
