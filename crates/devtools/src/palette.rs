use std::path::{Path, PathBuf};

use colored::Colorize;
use devtools_core::palette::{extract_palette, sample_pixels, sample_step, PaletteColor};

use crate::input::read_file;
use crate::prelude::{eprintln, println, *};

/// Upper bound on pixels fed to the clustering.
pub const MAX_SAMPLES: usize = 10_000;

#[derive(Debug, clap::Args)]
pub struct PaletteOptions {
    /// Image file (PNG or JPEG)
    pub path: PathBuf,

    /// Number of colors to extract
    #[arg(short, long, default_value = "5")]
    pub colors: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: PaletteOptions, global: crate::Global) -> Result<()> {
    let bytes = read_file(&options.path)?;
    if global.verbose {
        eprintln!("Decoding {} ({} bytes)", options.path.display(), bytes.len());
    }

    let palette = extract_from_bytes(&bytes, options.colors)?;

    if options.json {
        return print_json(&palette);
    }

    if palette.is_empty() {
        println!("{}", "No opaque pixels found.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["".bold(), "HEX".bold().cyan(), "Share".bold().cyan()]);
    for color in &palette {
        table.add_row(prettytable::row![
            "    ".on_truecolor(color.rgb.r, color.rgb.g, color.rgb.b),
            color.hex.bright_white(),
            f!("{:.1}%", color.share * 100.0).bright_yellow()
        ]);
    }
    table.printstd();

    Ok(())
}

pub fn extract_from_file(path: &Path, colors: usize) -> Result<Vec<PaletteColor>> {
    extract_from_bytes(&read_file(path)?, colors)
}

/// Decode an image and cluster a sample of its pixels.
pub fn extract_from_bytes(bytes: &[u8], colors: usize) -> Result<Vec<PaletteColor>> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::Image(e.to_string()))?
        .to_rgba8();

    let pixel_count = image.width() as usize * image.height() as usize;
    let step = sample_step(pixel_count, MAX_SAMPLES);
    log::debug!("sampling every {step} of {pixel_count} pixels");

    let pixels = sample_pixels(image.as_raw(), step);
    Ok(extract_palette(&pixels, colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn two_color_png() -> Vec<u8> {
        let mut image = image::RgbaImage::new(4, 4);
        for (x, _, pixel) in image.enumerate_pixels_mut() {
            *pixel = if x < 2 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 255, 255])
            };
        }

        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_two_color_image() {
        let palette = extract_from_bytes(&two_color_png(), 5).unwrap();
        let mut hexes: Vec<&str> = palette.iter().map(|c| c.hex.as_str()).collect();
        hexes.sort();
        assert_eq!(hexes, vec!["#0000ff", "#ff0000"]);

        let total: f64 = palette.iter().map(|c| c.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_not_an_image() {
        assert!(extract_from_bytes(b"plain text", 3).is_err());
    }
}
