use colored::Colorize;
use devtools_core::text::{self, Case, SortOrder, TextStats};

use crate::input::read_text;
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Count, transform and clean up text")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CaseArg {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
}

impl From<CaseArg> for Case {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper => Case::Upper,
            CaseArg::Lower => Case::Lower,
            CaseArg::Title => Case::Title,
            CaseArg::Sentence => Case::Sentence,
            CaseArg::Camel => Case::Camel,
            CaseArg::Pascal => Case::Pascal,
            CaseArg::Snake => Case::Snake,
            CaseArg::Kebab => Case::Kebab,
            CaseArg::Constant => Case::Constant,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Characters, words, sentences, paragraphs, lines and reading time
    Stats { text: Option<String> },

    /// URL-friendly slug
    Slug { text: Option<String> },

    /// Change letter case
    Case {
        #[arg(value_enum)]
        case: CaseArg,
        text: Option<String>,
    },

    /// Remove repeated lines, keeping the first occurrence
    DedupeLines { text: Option<String> },

    /// Remove repeated words, keeping the first occurrence
    DedupeWords { text: Option<String> },

    /// Reverse the characters
    Reverse { text: Option<String> },

    /// Sort lines
    Sort {
        text: Option<String>,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,

        /// Compare lines case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let output = match app.command {
        Commands::Stats { text } => {
            let stats = text::analyze(&read_text(text)?);
            return if app.json {
                print_json(&stats)
            } else {
                print_stats(&stats);
                Ok(())
            };
        }
        Commands::Slug { text } => text::generate_slug(&read_text(text)?),
        Commands::Case { case, text } => text::convert_case(&read_text(text)?, case.into()),
        Commands::DedupeLines { text } => text::remove_duplicate_lines(&read_text(text)?),
        Commands::DedupeWords { text } => text::remove_duplicate_words(&read_text(text)?),
        Commands::Reverse { text } => text::reverse_text(&read_text(text)?),
        Commands::Sort {
            text,
            desc,
            ignore_case,
        } => {
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            text::sort_lines(&read_text(text)?, order, ignore_case)
        }
    };

    if app.json {
        print_json(&serde_json::json!({ "result": output }))
    } else {
        println!("{output}");
        Ok(())
    }
}

fn print_stats(stats: &TextStats) {
    let mut table = new_table();
    let rows = [
        ("Characters", stats.characters),
        ("Characters (no spaces)", stats.characters_no_spaces),
        ("Words", stats.words),
        ("Sentences", stats.sentences),
        ("Paragraphs", stats.paragraphs),
        ("Lines", stats.lines),
        ("Reading time (min)", stats.reading_time_minutes),
    ];
    for (label, value) in rows {
        table.add_row(prettytable::row![label.green(), value.to_string().bright_white()]);
    }
    table.printstd();
}
