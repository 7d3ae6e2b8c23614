use colored::Colorize;
use devtools_core::color::{self, ColorReport, Contrast, Rgb};

use crate::input::read_value;
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "color")]
#[command(about = "Convert colors between HEX, RGB, HSL and CMYK")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show a color (hex, rgb() or hsl()) in every notation
    #[clap(name = "convert")]
    Convert {
        /// Color such as "#1e90ff", "rgb(30, 144, 255)" or "hsl(210, 100%, 56%)"
        color: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// WCAG contrast ratio between two colors
    #[clap(name = "contrast")]
    Contrast {
        foreground: String,
        background: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert { color, json } => {
            let input = read_value(color)?;
            let report = color::convert(&input).map_err(|e| eyre!(e))?;

            if json {
                print_json(&report)
            } else {
                print_report(&report);
                Ok(())
            }
        }
        Commands::Contrast {
            foreground,
            background,
            json,
        } => {
            let fg = parse_any(&foreground)?;
            let bg = parse_any(&background)?;
            let contrast = color::contrast_ratio(fg, bg);

            if json {
                print_json(&contrast)
            } else {
                print_contrast(fg, bg, &contrast);
                Ok(())
            }
        }
    }
}

fn parse_any(input: &str) -> Result<Rgb> {
    Ok(color::convert(input).map_err(|e| eyre!(e))?.rgb)
}

fn swatch(rgb: Rgb) -> String {
    "      ".on_truecolor(rgb.r, rgb.g, rgb.b).to_string()
}

fn print_report(report: &ColorReport) {
    println!("{} {}", swatch(report.rgb), report.hex.bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["HEX".bold().cyan(), report.hex]);
    table.add_row(prettytable::row!["RGB".bold().cyan(), report.rgb_css]);
    table.add_row(prettytable::row!["HSL".bold().cyan(), report.hsl_css]);
    table.add_row(prettytable::row!["CMYK".bold().cyan(), report.cmyk_css]);
    table.printstd();
}

fn print_contrast(fg: Rgb, bg: Rgb, contrast: &Contrast) {
    let sample = " Sample text ".truecolor(fg.r, fg.g, fg.b).on_truecolor(bg.r, bg.g, bg.b);
    println!("{sample}  {}", f!("{:.2}:1", contrast.ratio).bold());

    let verdict = |pass: bool| if pass { "pass".green() } else { "fail".red() };

    let mut table = new_table();
    table.add_row(prettytable::row!["AA normal text".cyan(), verdict(contrast.aa_normal)]);
    table.add_row(prettytable::row!["AA large text".cyan(), verdict(contrast.aa_large)]);
    table.add_row(prettytable::row!["AAA normal text".cyan(), verdict(contrast.aaa_normal)]);
    table.add_row(prettytable::row!["AAA large text".cyan(), verdict(contrast.aaa_large)]);
    table.printstd();
}
