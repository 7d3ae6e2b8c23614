use colored::Colorize;
use devtools_core::format;

use crate::input::read_text;
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "json")]
#[command(about = "Format, minify and validate JSON")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Pretty-print JSON
    Format {
        input: Option<String>,

        /// Spaces per indentation level (0 for compact output)
        #[arg(short, long, env = "DEVTOOLS_JSON_INDENT", default_value = "2")]
        indent: usize,
    },

    /// Remove all insignificant whitespace
    Minify { input: Option<String> },

    /// Check that the input parses as JSON
    Validate {
        input: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Format { input, indent } => {
            let formatted = format::format_json(&read_text(input)?, indent).map_err(|e| eyre!(e))?;
            println!("{formatted}");
        }
        Commands::Minify { input } => {
            let minified = format::minify_json(&read_text(input)?).map_err(|e| eyre!(e))?;
            println!("{minified}");
        }
        Commands::Validate { input, json } => {
            let result = format::validate_json(&read_text(input)?);
            if json {
                print_json(&serde_json::json!({
                    "valid": result.is_ok(),
                    "error": result.as_ref().err().map(|e| e.to_string()),
                }))?;
            } else {
                match result {
                    Ok(()) => println!("{}", "valid JSON".green().bold()),
                    Err(e) => println!("{} {}", "invalid JSON:".red().bold(), e),
                }
            }
        }
    }

    Ok(())
}
