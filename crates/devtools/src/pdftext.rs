use std::path::PathBuf;

use colored::Colorize;

use crate::input::read_file;
use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "pdf")]
#[command(about = "Extract text and metadata from PDF files")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Extract the plain text of every page
    Text {
        /// Path to the PDF file
        path: PathBuf,

        /// Only print this page (1-based)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Print page count and document metadata
    Info {
        /// Path to the PDF file
        path: PathBuf,
    },
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Text { path, page } => {
            let bytes = read_file(&path)?;
            let extracted = pdf::extract_text(&bytes).map_err(|e| eyre!(e))?;

            if global.verbose {
                eprintln!("{} pages in {}", extracted.page_count, path.display());
            }

            if let Some(number) = page {
                let page = extracted
                    .pages
                    .iter()
                    .find(|p| p.page == number)
                    .ok_or_else(|| {
                        eyre!("Page {} out of range (1-{})", number, extracted.page_count)
                    })?;
                return if app.json {
                    print_json(page)
                } else {
                    println!("{}", page.text);
                    Ok(())
                };
            }

            if app.json {
                return print_json(&extracted);
            }

            for page in &extracted.pages {
                println!("{}", f!("--- page {} ---", page.page).bright_black());
                if page.text.is_empty() {
                    println!("{}", "(no text)".yellow());
                } else {
                    println!("{}", page.text);
                }
            }
        }
        Commands::Info { path } => {
            let bytes = read_file(&path)?;
            let info = pdf::info(&bytes).map_err(|e| eyre!(e))?;

            if app.json {
                return print_json(&info);
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["Version".green(), info.version]);
            table.add_row(prettytable::row!["Pages".green(), info.page_count]);
            for (key, value) in &info.metadata {
                table.add_row(prettytable::row![key.green(), value]);
            }
            table.printstd();
        }
    }

    Ok(())
}
