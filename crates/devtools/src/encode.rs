use std::path::{Path, PathBuf};

use colored::Colorize;
use devtools_core::encode::{self, DecodedJwt};

use crate::input::{read_file, read_text, read_value};
use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "encode")]
#[command(about = "Base64, URL, HTML and JWT encoding helpers")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Base64 encode (or decode with --decode)
    Base64 {
        input: Option<String>,
        #[arg(short, long)]
        decode: bool,
    },

    /// Percent-encode for URLs (or decode with --decode)
    Url {
        input: Option<String>,
        #[arg(short, long)]
        decode: bool,
    },

    /// Escape HTML entities (or unescape with --decode)
    Html {
        input: Option<String>,
        #[arg(short, long)]
        decode: bool,
    },

    /// Encode a file as a base64 data URI
    DataUri {
        path: PathBuf,

        /// MIME type (guessed from the extension when omitted)
        #[arg(short, long)]
        mime: Option<String>,
    },

    /// Decode the header and payload of a JSON Web Token
    Jwt {
        token: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Base64 { input, decode } => {
            let input = read_text(input)?;
            let output = if decode {
                encode::base64_decode(input.trim()).map_err(|e| eyre!(e))?
            } else {
                encode::base64_encode(&input)
            };
            println!("{output}");
        }
        Commands::Url { input, decode } => {
            let input = read_text(input)?;
            let output = if decode {
                encode::url_decode(&input).map_err(|e| eyre!(e))?
            } else {
                encode::url_encode(&input)
            };
            println!("{output}");
        }
        Commands::Html { input, decode } => {
            let input = read_text(input)?;
            let output = if decode {
                encode::html_unescape(&input)
            } else {
                encode::html_escape(&input)
            };
            println!("{output}");
        }
        Commands::DataUri { path, mime } => {
            let bytes = read_file(&path)?;
            let mime = mime.unwrap_or_else(|| guess_mime(&path));
            if global.verbose {
                eprintln!("{} bytes as {mime}", bytes.len());
            }
            println!("{}", encode::to_data_uri(&bytes, &mime));
        }
        Commands::Jwt { token, json } => {
            let decoded = encode::decode_jwt(&read_value(token)?).map_err(|e| eyre!(e))?;
            if json {
                print_json(&decoded)?;
            } else {
                print_jwt(&decoded)?;
            }
        }
    }

    Ok(())
}

pub fn guess_mime(path: &Path) -> String {
    if let Ok(format) = image::ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        _ => "application/octet-stream",
    }
    .to_string()
}

fn print_jwt(decoded: &DecodedJwt) -> Result<()> {
    println!("{}", "HEADER".bright_cyan().bold());
    println!("{}", serde_json::to_string_pretty(&decoded.header)?);
    println!("{}", "PAYLOAD".bright_cyan().bold());
    println!("{}", serde_json::to_string_pretty(&decoded.payload)?);
    println!("{}", "SIGNATURE".bright_cyan().bold());
    println!("{}", decoded.signature.bright_black());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("logo.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("icon.svg")), "image/svg+xml");
        assert_eq!(guess_mime(Path::new("archive")), "application/octet-stream");
    }
}
