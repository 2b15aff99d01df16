// Interactive terminal dashboard over a loaded snapshot.
use crate::analyzer::{Snapshot, cooccur, demand};
use crate::config::AppConfig;
use crate::model::QueryError;
use crate::render;
use crate::store;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

const MENU: &str = "\
  1) Heatmap: top skills by job title
  2) Bar chart: most in-demand skills
  3) Pie breakdown: skills for a job title
  4) Recommend job titles for a skill
  5) Recommend complementary skills
  q) Quit";

/// Runs the menu loop until the user quits or stdin closes. The snapshot is
/// loaded once by the caller and never mutated here; every action is a pure
/// lookup plus rendering.
pub fn run(snapshot: &Snapshot, config: &AppConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "Job Market Analysis".bold());
    println!(
        "Explore skills and recommendations over {} postings.\n",
        snapshot.posting_count()
    );

    loop {
        println!("{MENU}");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => show_heatmap(snapshot, config),
            "2" => show_bar_chart(snapshot, config),
            "3" => {
                let query = prompt(&mut lines, "Job title (e.g. Software Engineer): ")?;
                show_pie(snapshot, &query);
            }
            "4" => {
                let query = prompt(&mut lines, "Skill (e.g. python, sql): ")?;
                recommend_titles(snapshot, config, &query);
            }
            "5" => {
                let query = prompt(&mut lines, "Skill (e.g. python, sql): ")?;
                recommend_co_skills(snapshot, config, &query);
            }
            "q" | "quit" | "exit" => break,
            other => println!("{}", format!("unknown choice: {other}").red()),
        }
        println!();
    }
    Ok(())
}

fn prompt<I>(lines: &mut I, message: &str) -> io::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{message}");
    io::stdout().flush()?;
    lines.next().unwrap_or_else(|| Ok(String::new()))
}

fn report(err: &QueryError) {
    println!("{}", err.to_string().red());
}

fn show_heatmap(snapshot: &Snapshot, config: &AppConfig) {
    println!("{}", "Top skills by job title".bold());
    let grid = demand::top_skills_by_title(snapshot, config.heatmap_skills_per_title);
    print!("{}", render::heatmap(&grid));
}

fn show_bar_chart(snapshot: &Snapshot, config: &AppConfig) {
    println!("{}", "Most in-demand skills".bold());
    let mut counts = demand::skill_counts(snapshot);
    counts.truncate(config.bar_chart_skills);
    print!("{}", render::bar_chart(&counts));
}

fn show_pie(snapshot: &Snapshot, query: &str) {
    match demand::skills_for_title(snapshot, query) {
        Ok(counts) => {
            println!(
                "{}",
                format!("Skill distribution for '{}'", query.trim()).bold()
            );
            print!("{}", render::pie(&counts));
        }
        Err(e) => report(&e),
    }
}

fn recommend_titles(snapshot: &Snapshot, config: &AppConfig, query: &str) {
    match demand::titles_for_skill(snapshot, query) {
        Ok(ranking) => {
            let skill = query.trim().to_lowercase();
            println!("{}", format!("Job titles requiring '{skill}'").bold());
            print!("{}", render::ranked_table("title", &ranking));

            match store::export_recommendations(&config.output_dir, &skill, &ranking) {
                Ok(path) => println!("Recommendations saved to {}", path.display()),
                Err(e) => warn!("Recommendation export failed: {e}"),
            }
        }
        Err(e) => report(&e),
    }
}

fn recommend_co_skills(snapshot: &Snapshot, config: &AppConfig, query: &str) {
    match cooccur::co_skills(snapshot, query, config.co_skill_limit) {
        Ok(ranking) => {
            println!(
                "{}",
                format!("Skills commonly paired with '{}'", query.trim().to_lowercase()).bold()
            );
            print!("{}", render::ranked_table("skill", &ranking));
        }
        Err(e) => report(&e),
    }
}
