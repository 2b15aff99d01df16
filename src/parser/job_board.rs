// Job-board HTML parsing. Every page-structure assumption lives in this file,
// so a markup change on the board touches nothing else.
use crate::model::{ParseError, Posting};
use scraper::{Html, Selector};

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<Posting>, ParseError>;
}

/// Parser for the remote-job board: one `tr.job` per posting, the title in a
/// nested `h2`, skill tags in `span.tag` elements, location in the row's
/// `data-location` attribute with "Remote" as the fallback.
pub struct JobBoardParser;

impl JobBoardParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JobBoardParser {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(rule: &str) -> Result<Selector, ParseError> {
    Selector::parse(rule).map_err(|e| ParseError::BadSelector(e.to_string()))
}

impl Parser for JobBoardParser {
    fn parse(&self, html: &str) -> Result<Vec<Posting>, ParseError> {
        let document = Html::parse_document(html);

        let row_selector = selector("tr.job")?;
        let title_selector = selector("h2")?;
        let tag_selector = selector("span.tag")?;

        let mut postings = Vec::new();

        for row in document.select(&row_selector) {
            // Ad rows and expanded-description rows carry no h2.
            let Some(title_node) = row.select(&title_selector).next() else {
                continue;
            };
            let title = title_node.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                continue;
            }

            let location = row
                .value()
                .attr("data-location")
                .map(str::trim)
                .filter(|loc| !loc.is_empty())
                .unwrap_or("Remote")
                .to_string();

            let skills = row
                .select(&tag_selector)
                .map(|tag| tag.text().collect::<String>().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect();

            postings.push(Posting {
                title,
                location,
                skills,
            });
        }

        Ok(postings)
    }
}
