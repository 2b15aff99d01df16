// Minimal CSV parser/writer (quotes + CRLF tolerant). The artifact is three
// columns wide; no external parser crate needed.
use std::io::{self, Write};
use std::mem::take;

const SEP: char = ',';

/// Parses CSV text into rows of fields. Handles quoted fields, doubled-quote
/// escapes and CRLF line endings; blank lines are skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            SEP if !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes a single CSV row to any writer, quoting fields that need it.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{SEP}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn round_trips_quoted_fields() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["a,b", "plain", "say \"hi\""])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let rows = parse_rows(&text);
        assert_eq!(rows, vec![row(&["a,b", "plain", "say \"hi\""])]);
    }

    #[test]
    fn parses_crlf_and_skips_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn last_row_without_trailing_newline_is_kept() {
        let rows = parse_rows("a,b\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], row(&["c", "d"]));
    }

    #[test]
    fn commas_inside_quotes_do_not_split() {
        let rows = parse_rows("title,\"['x', 'y']\"\n");
        assert_eq!(rows, vec![row(&["title", "['x', 'y']"])]);
    }
}
