// Demand aggregations: skill counts overall, per title, per location.
use crate::analyzer::{Snapshot, normalize_query, value_counts};
use crate::model::QueryError;

/// Counts of every skill across all expanded rows, most demanded first.
pub fn skill_counts(snapshot: &Snapshot) -> Vec<(String, usize)> {
    value_counts(snapshot.rows.iter().map(|r| r.skill.as_str()))
}

/// Top skills per job title, at most `k` each, titles in first-appearance
/// order. Backs the heatmap view.
pub fn top_skills_by_title(
    snapshot: &Snapshot,
    k: usize,
) -> Vec<(String, Vec<(String, usize)>)> {
    let mut titles: Vec<&str> = Vec::new();
    for row in &snapshot.rows {
        if !titles.contains(&row.title.as_str()) {
            titles.push(&row.title);
        }
    }

    titles
        .into_iter()
        .map(|title| {
            let mut counts = value_counts(
                snapshot
                    .rows
                    .iter()
                    .filter(|r| r.title == title)
                    .map(|r| r.skill.as_str()),
            );
            counts.truncate(k);
            (title.to_string(), counts)
        })
        .collect()
}

/// Skill distribution for titles containing the query as a case-insensitive
/// substring, the way the dashboard's free-text title search works.
pub fn skills_for_title(
    snapshot: &Snapshot,
    query: &str,
) -> Result<Vec<(String, usize)>, QueryError> {
    let query = normalize_query(query)?;
    let counts = value_counts(
        snapshot
            .rows
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&query))
            .map(|r| r.skill.as_str()),
    );
    if counts.is_empty() {
        return Err(QueryError::NoResults(query));
    }
    Ok(counts)
}

/// Job titles demanding the given skill, by row count.
pub fn titles_for_skill(
    snapshot: &Snapshot,
    skill: &str,
) -> Result<Vec<(String, usize)>, QueryError> {
    let skill = normalize_query(skill)?;
    let counts = value_counts(
        snapshot
            .rows
            .iter()
            .filter(|r| r.skill == skill)
            .map(|r| r.title.as_str()),
    );
    if counts.is_empty() {
        return Err(QueryError::NoResults(skill));
    }
    Ok(counts)
}

/// Locations demanding the given skill, by row count. Same shape as
/// `titles_for_skill`, grouped on the location column instead.
pub fn cities_for_skill(
    snapshot: &Snapshot,
    skill: &str,
) -> Result<Vec<(String, usize)>, QueryError> {
    let skill = normalize_query(skill)?;
    let counts = value_counts(
        snapshot
            .rows
            .iter()
            .filter(|r| r.skill == skill)
            .map(|r| r.location.as_str()),
    );
    if counts.is_empty() {
        return Err(QueryError::NoResults(skill));
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Posting;

    fn posting(title: &str, location: &str) -> Posting {
        Posting {
            title: title.to_string(),
            location: location.to_string(),
            skills: vec![],
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot::from_postings(&[
            posting("Software Engineer", "Berlin"),
            posting("Software Engineer", "Berlin"),
            posting("Software Engineer", "Remote"),
            posting("Data Engineer", "Remote"),
            posting("Data Engineer", "Austin"),
            posting("Office Manager", "Berlin"),
        ])
    }

    #[test]
    fn titles_for_skill_counts_by_title() {
        let ranking = titles_for_skill(&snapshot(), "python").unwrap();
        assert_eq!(
            ranking,
            vec![
                ("Software Engineer".to_string(), 3),
                ("Data Engineer".to_string(), 2),
            ]
        );
    }

    #[test]
    fn cities_for_skill_counts_by_location() {
        let ranking = cities_for_skill(&snapshot(), " SQL ").unwrap();
        assert_eq!(
            ranking,
            vec![
                ("Berlin".to_string(), 2),
                ("Remote".to_string(), 2),
                ("Austin".to_string(), 1),
            ]
        );
    }

    #[test]
    fn unknown_skill_reports_no_results() {
        assert_eq!(
            titles_for_skill(&snapshot(), "cobol"),
            Err(QueryError::NoResults("cobol".to_string()))
        );
    }

    #[test]
    fn blank_query_is_rejected_before_lookup() {
        assert_eq!(titles_for_skill(&snapshot(), "  "), Err(QueryError::EmptyInput));
        assert_eq!(cities_for_skill(&snapshot(), ""), Err(QueryError::EmptyInput));
        assert_eq!(skills_for_title(&snapshot(), "\t"), Err(QueryError::EmptyInput));
    }

    #[test]
    fn skills_for_title_matches_substring_case_insensitively() {
        let counts = skills_for_title(&snapshot(), "software").unwrap();
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 9);
        assert!(counts.iter().any(|(s, c)| s == "python" && *c == 3));
    }

    #[test]
    fn top_skills_by_title_truncates_per_title() {
        let grid = top_skills_by_title(&snapshot(), 2);
        assert_eq!(grid[0].0, "Software Engineer");
        assert!(grid.iter().all(|(_, skills)| skills.len() <= 2));
    }

    #[test]
    fn skill_counts_sum_to_row_count() {
        let snapshot = snapshot();
        let total: usize = skill_counts(&snapshot).iter().map(|(_, c)| c).sum();
        assert_eq!(total, snapshot.rows.len());
    }
}
