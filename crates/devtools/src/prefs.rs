use colored::Colorize;
use devtools_core::prefs::{PreferenceStore, Preferences};

use crate::prelude::{println, *};
use crate::store::{open_preferences, JsonFileStore};

#[derive(Debug, clap::Parser)]
#[command(name = "prefs")]
#[command(about = "Show or reset stored preferences")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print every stored preference
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the preferences file location
    Path,

    /// Forget recent searches
    ClearRecent,

    /// Remove every stored preference
    Reset,
}

/// Raw key/value pairs as they sit in the preferences file.
fn entry_rows(prefs: &Preferences<JsonFileStore>) -> Vec<(String, String)> {
    prefs.store().entries().into_iter().collect()
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let mut prefs = open_preferences(&global)?;

    match app.command {
        Commands::Show { json } => {
            if json {
                return print_json(&serde_json::json!({
                    "expanded_categories": prefs.expanded_categories(),
                    "search_query": prefs.search_query(),
                    "scroll_position": prefs.scroll_position(),
                    "last_visit": prefs.last_visit().map(|t| t.to_rfc3339()),
                    "source_category": prefs.source_category(),
                    "recent_searches": prefs.recent_searches(),
                }));
            }

            let entries = entry_rows(&prefs);
            if entries.is_empty() {
                println!("{}", "No preferences stored.".yellow());
                return Ok(());
            }
            let mut table = new_table();
            for (key, value) in entries {
                table.add_row(prettytable::row![key.green(), value]);
            }
            table.printstd();
        }
        Commands::Path => println!("{}", prefs.store().path().display()),
        Commands::ClearRecent => {
            prefs.clear_recent_searches();
            println!("{}", "Recent searches cleared.".green());
        }
        Commands::Reset => {
            prefs.reset();
            println!("{}", "Preferences reset.".green());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rows_list_stored_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::new(JsonFileStore::open(dir.path().join("prefs.json")));
        assert!(entry_rows(&prefs).is_empty());

        prefs.set_source_category("text");
        prefs.record_search("slug");

        let rows = entry_rows(&prefs);
        assert_eq!(
            rows,
            vec![
                ("recent_searches".to_string(), r#"["slug"]"#.to_string()),
                ("source_category".to_string(), "text".to_string()),
            ]
        );
    }
}
