use colored::Colorize;
use devtools_core::search::{self, EntryKind, SearchResult};

use crate::prelude::{println, *};
use crate::store::open_preferences;

#[derive(Debug, clap::Args)]
pub struct SearchOptions {
    /// Search terms; shows recent searches when omitted
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let mut prefs = open_preferences(&global)?;
    let query = options.query.join(" ");

    if query.trim().is_empty() {
        let recent = prefs.recent_searches();
        if options.json {
            return print_json(&serde_json::json!({ "recent_searches": recent }));
        }
        if recent.is_empty() {
            println!("{}", "No recent searches.".yellow());
        } else {
            println!("{}", "Recent searches".bright_cyan().bold());
            for q in recent {
                println!("  {q}");
            }
        }
        return Ok(());
    }

    let results = search::search(&query);
    prefs.set_search_query(&query);
    prefs.record_search(&query);

    if options.json {
        return print_json(&results);
    }

    print_results(&query, &results);
    Ok(())
}

fn print_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("{}", f!("No tools match '{query}'.").yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Score".bold().cyan(),
        "Kind".bold().cyan(),
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Description".bold().cyan()
    ]);
    for r in results {
        let kind = match r.kind {
            EntryKind::Tool => "tool".bright_white(),
            EntryKind::Category => "category".bright_magenta(),
        };
        table.add_row(prettytable::row![
            r.score.to_string().bright_yellow(),
            kind,
            r.id.green(),
            r.name.bright_white(),
            r.description.bright_black()
        ]);
    }
    table.printstd();
}
