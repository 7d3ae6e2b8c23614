use colored::Colorize;
use devtools_core::catalog::{self, Tool};

use crate::prelude::{eprintln, println, *};
use crate::store::open_preferences;

#[derive(Debug, clap::Parser)]
#[command(name = "catalog")]
#[command(about = "Browse tools and categories")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List categories; expanded ones also list their tools
    Categories,

    /// List tools
    Tools {
        /// Only tools in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only popular tools
        #[arg(short, long)]
        popular: bool,
    },

    /// Show one tool
    Show { id: String },

    /// Expand or collapse a category in `catalog categories`
    Toggle { category: String },
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let mut prefs = open_preferences(&global)?;

    match app.command {
        Commands::Categories => {
            if let Some(last) = prefs.last_visit() {
                if global.verbose {
                    eprintln!("Last visit: {}", last.to_rfc3339());
                }
            }
            prefs.set_last_visit(chrono::Utc::now());

            let expanded = prefs.expanded_categories();
            if app.json {
                let categories: Vec<_> = catalog::categories()
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "category": c,
                            "expanded": expanded.iter().any(|e| e == c.id),
                            "tools": catalog::tools_in_category(c.id).len(),
                        })
                    })
                    .collect();
                return print_json(&categories);
            }

            for category in catalog::categories() {
                let tools = catalog::tools_in_category(category.id);
                let is_expanded = expanded.iter().any(|e| e == category.id);
                let marker = if is_expanded { "v" } else { ">" };
                println!(
                    "{} {} {} {}",
                    marker.bright_black(),
                    category.name.bright_white().bold(),
                    f!("({})", tools.len()).bright_black(),
                    category.id.green()
                );
                if is_expanded {
                    for tool in tools {
                        println!("    {} {}", tool.id.cyan(), tool.description.bright_black());
                    }
                }
            }
        }
        Commands::Tools { category, popular } => {
            let tools: Vec<&Tool> = match &category {
                Some(id) => {
                    let found = catalog::find_category(id)
                        .ok_or_else(|| eyre!("Unknown category: {}", id))?;
                    prefs.set_source_category(found.id);
                    catalog::tools_in_category(found.id)
                }
                None => catalog::tools().iter().collect(),
            };
            let tools: Vec<&Tool> = tools.into_iter().filter(|t| !popular || t.popular).collect();

            if app.json {
                return print_json(&tools);
            }
            print_tools(&tools);
        }
        Commands::Show { id } => {
            let tool = catalog::find_tool(&id).ok_or_else(|| eyre!("Unknown tool: {}", id))?;
            if app.json {
                return print_json(tool);
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["Name".green(), tool.name.bright_white().bold()]);
            table.add_row(prettytable::row!["ID".green(), tool.id]);
            table.add_row(prettytable::row!["Category".green(), tool.category]);
            table.add_row(prettytable::row!["Description".green(), tool.description]);
            table.add_row(prettytable::row!["Icon".green(), tool.icon.as_str()]);
            table.add_row(prettytable::row!["Tags".green(), tool.tags.join(", ")]);
            if tool.popular {
                table.add_row(prettytable::row!["Popular".green(), "yes".bright_yellow()]);
            }
            table.printstd();
        }
        Commands::Toggle { category } => {
            let found = catalog::find_category(&category)
                .ok_or_else(|| eyre!("Unknown category: {}", category))?;
            let expanded = prefs.toggle_category(found.id);

            if app.json {
                return print_json(&serde_json::json!({ "category": found.id, "expanded": expanded }));
            }
            let state = if expanded { "expanded" } else { "collapsed" };
            println!("{} {}", found.name.bright_white().bold(), state.green());
        }
    }

    Ok(())
}

fn print_tools(tools: &[&Tool]) {
    if tools.is_empty() {
        println!("{}", "No tools found.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Category".bold().cyan(),
        "Description".bold().cyan()
    ]);
    for tool in tools {
        let name = if tool.popular {
            f!("{} *", tool.name).bright_yellow()
        } else {
            tool.name.bright_white()
        };
        table.add_row(prettytable::row![
            tool.id.green(),
            name,
            tool.category.bright_magenta(),
            tool.description.bright_black()
        ]);
    }
    table.printstd();
}
