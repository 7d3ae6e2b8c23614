//! Color space conversions between HEX, RGB, HSL and CMYK.
//!
//! Every function validates its input and returns a [`ColorError`] instead of
//! panicking, so callers can surface bad input inline next to their output.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),

    #[error("Value out of range: {0}")]
    InvalidRange(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        hsl_from_channels(self.r, self.g, self.b)
    }

    pub fn to_cmyk(self) -> Cmyk {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let k = 1.0 - r.max(g).max(b);

        if k >= 1.0 {
            return Cmyk {
                c: 0,
                m: 0,
                y: 0,
                k: 100,
            };
        }

        let channel = |v: f64| (((1.0 - v - k) / (1.0 - k)) * 100.0).round() as u8;
        Cmyk {
            c: channel(r),
            m: channel(g),
            y: channel(b),
            k: (k * 100.0).round() as u8,
        }
    }

    /// WCAG 2.x relative luminance in [0, 1].
    pub fn relative_luminance(self) -> f64 {
        let linear = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and lightness in percent.
///
/// Components keep full precision so that `rgb -> hsl -> rgb` is lossless;
/// the textual and serialized forms are rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Whole-number components, hue normalized to [0, 360).
    pub fn rounded(&self) -> (u16, u8, u8) {
        let h = (self.h.round() as u16) % 360;
        (h, self.s.round() as u8, self.l.round() as u8)
    }

    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let (h, s, l) = self.rounded();
        let mut state = serializer.serialize_struct("Hsl", 3)?;
        state.serialize_field("h", &h)?;
        state.serialize_field("s", &s)?;
        state.serialize_field("l", &l)?;
        state.end()
    }
}

/// Cyan, magenta, yellow and key as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// Every representation of a single color.
#[derive(Debug, Clone, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
    pub rgb_css: String,
    pub hsl_css: String,
    pub cmyk_css: String,
}

impl From<Rgb> for ColorReport {
    fn from(rgb: Rgb) -> Self {
        let hsl = rgb.to_hsl();
        let cmyk = rgb.to_cmyk();
        ColorReport {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            cmyk,
            rgb_css: rgb.to_string(),
            hsl_css: hsl.to_string(),
            cmyk_css: cmyk.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Contrast {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundTripReport {
    pub original: Rgb,
    pub hex: String,
    pub hex_round_trip: bool,
    pub hsl: Hsl,
    pub from_hsl: Rgb,
    pub max_channel_delta: u8,
}

impl RoundTripReport {
    pub fn within_tolerance(&self) -> bool {
        self.hex_round_trip && self.max_channel_delta <= 1
    }
}

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^#?([0-9a-f]{3}|[0-9a-f]{6})$").unwrap())
}

fn rgb_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[\d.]+\s*)?\)$",
        )
        .unwrap()
    })
}

fn hsl_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^hsla?\(\s*(\d{1,3}(?:\.\d+)?)\s*,\s*(\d{1,3}(?:\.\d+)?)%?\s*,\s*(\d{1,3}(?:\.\d+)?)%?\s*(?:,\s*[\d.]+\s*)?\)$",
        )
        .unwrap()
    })
}

/// True for `#rgb` / `#rrggbb`, with or without the leading `#`.
pub fn is_valid_hex(hex: &str) -> bool {
    hex_regex().is_match(hex)
}

pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidFormat(format!(
            "'{hex}' is not a 3 or 6 digit hex color"
        )));
    }

    let digits = hex.trim_start_matches('#');
    let full: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let byte = |i: usize| {
        u8::from_str_radix(&full[i..i + 2], 16)
            .map_err(|e| ColorError::InvalidFormat(format!("'{hex}': {e}")))
    };

    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

fn channel(name: &str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| {
        ColorError::InvalidRange(format!("{name} must be between 0 and 255, got {value}"))
    })
}

/// Validate raw channel values and build an [`Rgb`].
pub fn rgb(r: i64, g: i64, b: i64) -> Result<Rgb, ColorError> {
    Ok(Rgb::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
}

pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String, ColorError> {
    Ok(rgb(r, g, b)?.to_hex())
}

pub fn rgb_to_hsl(r: i64, g: i64, b: i64) -> Result<Hsl, ColorError> {
    Ok(rgb(r, g, b)?.to_hsl())
}

fn hsl_from_channels(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: (h / 6.0) * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Rgb, ColorError> {
    if !(0.0..=360.0).contains(&h) {
        return Err(ColorError::InvalidRange(format!(
            "hue must be between 0 and 360, got {h}"
        )));
    }
    if !(0.0..=100.0).contains(&s) {
        return Err(ColorError::InvalidRange(format!(
            "saturation must be between 0 and 100, got {s}"
        )));
    }
    if !(0.0..=100.0).contains(&l) {
        return Err(ColorError::InvalidRange(format!(
            "lightness must be between 0 and 100, got {l}"
        )));
    }

    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Ok(Rgb::new(to_u8(r), to_u8(g), to_u8(b)))
}

pub fn rgb_to_cmyk(r: i64, g: i64, b: i64) -> Result<Cmyk, ColorError> {
    Ok(rgb(r, g, b)?.to_cmyk())
}

pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Result<Rgb, ColorError> {
    for (name, value) in [("cyan", c), ("magenta", m), ("yellow", y), ("key", k)] {
        if !(0.0..=100.0).contains(&value) {
            return Err(ColorError::InvalidRange(format!(
                "{name} must be between 0 and 100, got {value}"
            )));
        }
    }

    let k = 1.0 - k / 100.0;
    let to_u8 = |v: f64| (255.0 * (1.0 - v / 100.0) * k).round() as u8;
    Ok(Rgb::new(to_u8(c), to_u8(m), to_u8(y)))
}

/// Parse `rgb(r, g, b)` (alpha in `rgba(...)` is accepted and ignored).
pub fn parse_rgb(input: &str) -> Result<Rgb, ColorError> {
    let caps = rgb_regex()
        .captures(input.trim())
        .ok_or_else(|| ColorError::InvalidFormat(format!("'{input}' is not an rgb() color")))?;

    let component = |i: usize| caps[i].parse::<i64>().unwrap_or(i64::MAX);
    rgb(component(1), component(2), component(3))
}

/// Parse `hsl(h, s%, l%)` (alpha in `hsla(...)` is accepted and ignored).
pub fn parse_hsl(input: &str) -> Result<Hsl, ColorError> {
    let caps = hsl_regex()
        .captures(input.trim())
        .ok_or_else(|| ColorError::InvalidFormat(format!("'{input}' is not an hsl() color")))?;

    let component = |i: usize| caps[i].parse::<f64>().unwrap_or(f64::MAX);
    let (h, s, l) = (component(1), component(2), component(3));

    // Range check through the conversion so errors match hsl_to_rgb.
    hsl_to_rgb(h, s, l)?;
    Ok(Hsl { h, s, l })
}

/// Detect the notation of `input` (hex, `rgb()` or `hsl()`) and report
/// the color in every representation.
pub fn convert(input: &str) -> Result<ColorReport, ColorError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    let rgb = if lower.starts_with("rgb") {
        parse_rgb(trimmed)?
    } else if lower.starts_with("hsl") {
        parse_hsl(trimmed)?.to_rgb()?
    } else {
        hex_to_rgb(trimmed)?
    };

    Ok(ColorReport::from(rgb))
}

pub fn contrast_ratio(foreground: Rgb, background: Rgb) -> Contrast {
    let a = foreground.relative_luminance();
    let b = background.relative_luminance();
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    let exact = (lighter + 0.05) / (darker + 0.05);

    // Thresholds apply to the unrounded ratio.
    Contrast {
        ratio: (exact * 100.0).round() / 100.0,
        aa_normal: exact >= 4.5,
        aa_large: exact >= 3.0,
        aaa_normal: exact >= 7.0,
        aaa_large: exact >= 4.5,
    }
}

/// Convert a color through hex and HSL and back, reporting any drift.
pub fn round_trip_check(r: i64, g: i64, b: i64) -> Result<RoundTripReport, ColorError> {
    let original = rgb(r, g, b)?;
    let hex = original.to_hex();
    let hex_round_trip = hex_to_rgb(&hex)? == original;
    let hsl = original.to_hsl();
    let from_hsl = hsl.to_rgb()?;

    let max_channel_delta = [
        original.r.abs_diff(from_hsl.r),
        original.g.abs_diff(from_hsl.g),
        original.b.abs_diff(from_hsl.b),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    Ok(RoundTripReport {
        original,
        hex,
        hex_round_trip,
        hsl,
        from_hsl,
        max_channel_delta,
    })
}
