// Title-keyword skill inference and row expansion.
use crate::model::{Posting, TaggedPosting};

/// Sentinel skill for titles matching no keyword.
pub const GENERAL: &str = "general";

/// Keyword patterns and the skills they imply. Scanned top to bottom, first
/// match wins. Entries are ordered longest-pattern-first so a title hitting
/// several patterns resolves to the most specific one; `table_is_ordered`
/// pins that invariant.
const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("mobile app developer", &["swift", "kotlin", "react native"]),
    ("software engineer", &["python", "java", "sql"]),
    ("administrative", &["communication", "organization"]),
    ("data engineer", &["python", "sql", "spark"]),
    ("web developer", &["html", "css", "javascript"]),
    ("spokesperson", &["public speaking", "communication"]),
    ("full stack", &["javascript", "react", "node.js", "sql"]),
    ("javascript", &["javascript", "react", "node.js"]),
    ("angular", &["angular", "javascript", "typescript"]),
    ("react", &["react", "javascript", "node.js"]),
    ("ruby", &["ruby", "rails", "javascript"]),
    ("php", &["php", "laravel", "mysql"]),
    ("iot", &["iot", "python", "c++"]),
];

/// Infers the skill set for one job title: lowercase the title, return the
/// deduplicated skills of the first matching pattern. Total over any input;
/// unmatched titles (including the empty string) yield `["general"]`.
pub fn assign_skills(title: &str) -> Vec<String> {
    let title = title.to_lowercase();

    for (keyword, skills) in SKILL_KEYWORDS {
        if title.contains(keyword) {
            let mut out: Vec<String> = Vec::with_capacity(skills.len());
            for skill in *skills {
                let skill = skill.trim().to_lowercase();
                if !out.contains(&skill) {
                    out.push(skill);
                }
            }
            return out;
        }
    }

    vec![GENERAL.to_string()]
}

/// Expands each posting into one `TaggedPosting` per inferred skill, copying
/// title and location onto every row.
pub fn expand(postings: &[Posting]) -> Vec<TaggedPosting> {
    let mut rows = Vec::new();
    for posting in postings {
        for skill in assign_skills(&posting.title) {
            rows.push(TaggedPosting {
                title: posting.title.clone(),
                location: posting.location.clone(),
                skill,
            });
        }
    }
    rows
}
