use colored::Colorize;
use devtools_core::convert;

use crate::input::read_value;
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "convert")]
#[command(about = "Timestamp and number base conversions")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert between Unix seconds and RFC 3339; `now` prints the current time
    Timestamp { value: Option<String> },

    /// Convert an integer between bases 2 to 36
    Base {
        value: String,

        /// Base of the input
        #[arg(long, default_value = "10")]
        from: u32,

        /// Base of the output
        #[arg(long, default_value = "16")]
        to: u32,
    },
}

/// Both renderings of one instant.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timestamp {
    pub unix: i64,
    pub rfc3339: String,
}

/// Accepts Unix seconds, an RFC 3339 date-time or `now`.
pub fn timestamp(value: &str) -> Result<Timestamp, convert::ConvertError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("now") {
        let unix = chrono::Utc::now().timestamp();
        return Ok(Timestamp {
            unix,
            rfc3339: convert::unix_to_rfc3339(unix)?,
        });
    }

    match value.parse::<i64>() {
        Ok(unix) => Ok(Timestamp {
            unix,
            rfc3339: convert::unix_to_rfc3339(unix)?,
        }),
        Err(_) => {
            let unix = convert::rfc3339_to_unix(value)?;
            Ok(Timestamp {
                unix,
                rfc3339: convert::unix_to_rfc3339(unix)?,
            })
        }
    }
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Timestamp { value } => {
            let value = read_value(value)?;
            let ts = timestamp(&value).map_err(|e| eyre!(e))?;
            if app.json {
                print_json(&ts)?;
            } else {
                println!("{}: {}", "Unix".green(), ts.unix);
                println!("{}: {}", "RFC 3339".green(), ts.rfc3339);
            }
        }
        Commands::Base { value, from, to } => {
            let conversion = convert::convert_base(&value, from, to).map_err(|e| eyre!(e))?;
            if app.json {
                print_json(&conversion)?;
            } else {
                println!("{}", conversion.output);
            }
        }
    }

    Ok(())
}
