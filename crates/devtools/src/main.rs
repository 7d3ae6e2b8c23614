use crate::prelude::*;
use clap::Parser;

mod catalog;
mod color;
mod convert;
mod encode;
mod error;
mod hash;
mod input;
mod json;
mod mcp;
mod palette;
mod pdftext;
mod prefs;
mod prelude;
mod search;
mod store;
mod text;
mod uuidgen;
mod validate;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Everyday developer utilities: colors, validators, encoders, text tools and more"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Preferences file (defaults to <config dir>/devtools/preferences.json)
    #[clap(long, env = "DEVTOOLS_PREFS", global = true)]
    prefs_file: Option<std::path::PathBuf>,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert colors between HEX, RGB, HSL and CMYK
    Color(crate::color::App),

    /// Extract the dominant colors of an image
    Palette(crate::palette::PaletteOptions),

    /// Validate emails, URLs, IPs, UUIDs, card numbers and passwords
    Validate(crate::validate::App),

    /// Count, transform and clean up text
    Text(crate::text::App),

    /// Format, minify and validate JSON
    Json(crate::json::App),

    /// Base64, URL, HTML and JWT encoding helpers
    Encode(crate::encode::App),

    /// MD5 and SHA-2 digests
    Hash(crate::hash::HashOptions),

    /// Timestamp and number base conversions
    Convert(crate::convert::App),

    /// Generate random UUIDs
    Uuid(crate::uuidgen::UuidOptions),

    /// Search the tool catalog
    Search(crate::search::SearchOptions),

    /// Browse tools and categories
    Catalog(crate::catalog::App),

    /// Show or reset stored preferences
    Prefs(crate::prefs::App),

    /// Extract text and metadata from PDF files
    Pdf(crate::pdftext::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Color(sub_app) => crate::color::run(sub_app, app.global),
        SubCommands::Palette(options) => crate::palette::run(options, app.global),
        SubCommands::Validate(sub_app) => crate::validate::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Json(sub_app) => crate::json::run(sub_app, app.global),
        SubCommands::Encode(sub_app) => crate::encode::run(sub_app, app.global),
        SubCommands::Hash(options) => crate::hash::run(options, app.global),
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global),
        SubCommands::Uuid(options) => crate::uuidgen::run(options, app.global),
        SubCommands::Search(options) => crate::search::run(options, app.global),
        SubCommands::Catalog(sub_app) => crate::catalog::run(sub_app, app.global),
        SubCommands::Prefs(sub_app) => crate::prefs::run(sub_app, app.global),
        SubCommands::Pdf(sub_app) => crate::pdftext::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
