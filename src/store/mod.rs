// Flat-file artifact shared by the collector, explorer and cities binaries.
pub mod csv;

use crate::model::{Posting, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["title", "location", "skills"];

/// Serializes a raw tag list into the bracketed form stored in the `skills`
/// column, e.g. `['rust', 'sql']`; an empty list becomes `[]`.
pub fn serialize_tags(tags: &[String]) -> String {
    let quoted: Vec<String> = tags.iter().map(|t| format!("'{t}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Parses a bracketed tag list back into the original ordered tags.
pub fn parse_tags(cell: &str) -> Vec<String> {
    let inner = cell
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(", ")
        .map(|t| t.trim().trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Writes the raw posting table as `title,location,skills` CSV.
pub fn save_postings(path: &Path, postings: &[Posting]) -> Result<(), StoreError> {
    let mut buf: Vec<u8> = Vec::new();
    csv::write_row(&mut buf, &HEADER.map(String::from))?;
    for posting in postings {
        csv::write_row(
            &mut buf,
            &[
                posting.title.clone(),
                posting.location.clone(),
                serialize_tags(&posting.skills),
            ],
        )?;
    }
    fs::write(path, buf)?;
    Ok(())
}

/// Reads the raw posting table back. The header row must match what
/// `save_postings` writes; every data row must carry exactly three fields.
pub fn load_postings(path: &Path) -> Result<Vec<Posting>, StoreError> {
    let text = fs::read_to_string(path)?;
    let mut rows = csv::parse_rows(&text);
    if rows.is_empty() {
        return Err(StoreError::Empty);
    }

    let header = rows.remove(0);
    if header.len() != HEADER.len()
        || header.iter().zip(HEADER).any(|(cell, want)| cell != want)
    {
        return Err(StoreError::BadHeader(header.join(",")));
    }

    let mut postings = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let [title, location, skills]: [String; 3] = row
            .try_into()
            .map_err(|_| StoreError::MalformedRow(i + 2))?;
        postings.push(Posting {
            title,
            location,
            skills: parse_tags(&skills),
        });
    }
    Ok(postings)
}

/// Writes a skill's title ranking to `<output_dir>/recommendations_<skill>.csv`
/// and returns the path written. This is the file the dashboard offers for
/// download.
pub fn export_recommendations(
    output_dir: &str,
    skill: &str,
    ranking: &[(String, usize)],
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(output_dir)?;
    let path = Path::new(output_dir).join(format!(
        "recommendations_{}.csv",
        skill.replace(' ', "_")
    ));

    let mut buf: Vec<u8> = Vec::new();
    csv::write_row(&mut buf, &["title".to_string(), "count".to_string()])?;
    for (title, count) in ranking {
        csv::write_row(&mut buf, &[title.clone(), count.to_string()])?;
    }
    fs::write(&path, buf)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_the_bracketed_form() {
        let tags = vec!["react".to_string(), "node.js".to_string(), "sql".to_string()];
        assert_eq!(serialize_tags(&tags), "['react', 'node.js', 'sql']");
        assert_eq!(parse_tags(&serialize_tags(&tags)), tags);
    }

    #[test]
    fn empty_tag_list_round_trips() {
        assert_eq!(serialize_tags(&[]), "[]");
        assert!(parse_tags("[]").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn bad_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, "name,city,tags\na,b,[]\n").unwrap();
        assert!(matches!(
            load_postings(&path),
            Err(StoreError::BadHeader(_))
        ));
    }

    #[test]
    fn short_row_is_reported_with_its_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, "title,location,skills\nonly-one-field\n").unwrap();
        assert!(matches!(
            load_postings(&path),
            Err(StoreError::MalformedRow(2))
        ));
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, "").unwrap();
        assert!(matches!(load_postings(&path), Err(StoreError::Empty)));
    }
}
