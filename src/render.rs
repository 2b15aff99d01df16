// Terminal chart rendering for the explorer views.
use colored::Colorize;

const MAX_BAR_WIDTH: usize = 40;
const TITLE_WIDTH: usize = 20;

/// Shortens a title to 20 chars plus an ellipsis, as used for heatmap
/// column headers.
pub fn shorten_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let cut: String = title.chars().take(TITLE_WIDTH).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}

fn label_width(entries: &[(String, usize)], min: usize) -> usize {
    entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(min)
}

/// Horizontal bar chart, one labelled row per entry, bars scaled to the
/// largest count.
pub fn bar_chart(entries: &[(String, usize)]) -> String {
    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let width = label_width(entries, 0);

    let mut out = String::new();
    for (label, count) in entries {
        let bar = "█".repeat((count * MAX_BAR_WIDTH).div_ceil(max));
        out.push_str(&format!("{label:width$}  {} {count}\n", bar.cyan()));
    }
    out
}

/// Count grid with skills as rows and shortened titles as columns. Absent
/// (skill, title) cells render as a dimmed 0, matching the heatmap's
/// zero-filled pivot.
pub fn heatmap(columns: &[(String, Vec<(String, usize)>)]) -> String {
    let mut skills: Vec<&str> = Vec::new();
    for (_, cells) in columns {
        for (skill, _) in cells {
            if !skills.contains(&skill.as_str()) {
                skills.push(skill);
            }
        }
    }

    let row_width = skills
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max("skill".len());
    let headers: Vec<String> = columns.iter().map(|(t, _)| shorten_title(t)).collect();

    let mut out = String::new();
    out.push_str(&format!("{:row_width$}", "skill").bold().to_string());
    for header in &headers {
        out.push_str(&format!("  {header}").bold().to_string());
    }
    out.push('\n');

    for skill in &skills {
        out.push_str(&format!("{skill:row_width$}"));
        for ((_, cells), header) in columns.iter().zip(&headers) {
            let count = cells
                .iter()
                .find(|(s, _)| s == skill)
                .map(|(_, c)| *c)
                .unwrap_or(0);
            let w = header.chars().count();
            let cell = format!("  {count:>w$}");
            if count == 0 {
                out.push_str(&cell.dimmed().to_string());
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }
    out
}

/// Percentage breakdown over the total count, one row per entry with a
/// proportional marker bar.
pub fn pie(entries: &[(String, usize)]) -> String {
    let total: usize = entries.iter().map(|(_, c)| *c).sum::<usize>().max(1);
    let width = label_width(entries, 0);

    let mut out = String::new();
    for (label, count) in entries {
        let pct = *count as f64 * 100.0 / total as f64;
        let bar = "▪".repeat((pct / 100.0 * MAX_BAR_WIDTH as f64).round() as usize);
        out.push_str(&format!("{label:width$}  {pct:>5.1}%  {}\n", bar.yellow()));
    }
    out
}

/// Plain ranked "label / count" table, used by the recommenders and the
/// cities CLI.
pub fn ranked_table(label_header: &str, entries: &[(String, usize)]) -> String {
    let width = label_width(entries, label_header.chars().count());

    let mut out = String::new();
    out.push_str(&format!("{label_header:width$}  count\n").bold().to_string());
    for (label, count) in entries {
        out.push_str(&format!("{label:width$}  {count}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn entries(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn shorten_title_cuts_past_twenty_chars() {
        assert_eq!(shorten_title("Software Engineer"), "Software Engineer");
        assert_eq!(
            shorten_title("Senior Staff Platform Engineer"),
            "Senior Staff Platfor..."
        );
    }

    #[test]
    fn bar_chart_scales_to_the_largest_count() {
        plain();
        let chart = bar_chart(&entries(&[("python", 4), ("sql", 2)]));
        let lines: Vec<&str> = chart.lines().collect();
        let bars: Vec<usize> = lines
            .iter()
            .map(|l| l.chars().filter(|c| *c == '█').count())
            .collect();
        assert_eq!(bars[0], MAX_BAR_WIDTH);
        assert_eq!(bars[1], MAX_BAR_WIDTH / 2);
    }

    #[test]
    fn pie_percentages_sum_to_one_hundred() {
        plain();
        let chart = pie(&entries(&[("a", 1), ("b", 1), ("c", 2)]));
        assert!(chart.contains("25.0%"));
        assert!(chart.contains("50.0%"));
    }

    #[test]
    fn heatmap_fills_absent_cells_with_zero() {
        plain();
        let grid = vec![
            ("Data Engineer".to_string(), entries(&[("python", 2), ("spark", 2)])),
            ("Web Developer".to_string(), entries(&[("html", 1)])),
        ];
        let chart = heatmap(&grid);
        assert!(chart.contains("spark"));
        // spark never occurs under Web Developer.
        let spark_line = chart.lines().find(|l| l.starts_with("spark")).unwrap();
        assert!(spark_line.trim_end().ends_with('0'));
    }

    #[test]
    fn ranked_table_lists_entries_in_order() {
        plain();
        let table = ranked_table("location", &entries(&[("Berlin", 3), ("Remote", 1)]));
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("location"));
        assert!(lines[1].starts_with("Berlin"));
        assert!(lines[2].starts_with("Remote"));
    }
}
