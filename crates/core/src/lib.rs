//! Core library for devtools
//!
//! This crate implements the **Functional Core** of the devtools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`devtools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pdf`**: PDF text extraction on top of `lopdf`
//! - **`devtools`**: CLI, preference file and MCP server (the Imperative Shell)
//!
//! Every tool is an independent leaf. Functions take their whole input at
//! once, return `Result` values for anything a user can get wrong, and never
//! touch the filesystem, the network or the clock.
//!
//! # Module Organization
//!
//! - [`color`]: HEX, RGB, HSL and CMYK conversions, contrast ratio
//! - [`palette`]: k-means dominant color extraction over sampled pixels
//! - [`validate`]: email, URL, IP, UUID, credit card and password checks
//! - [`text`]: counters, case conversion, slugs, duplicate removal
//! - [`format`]: JSON pretty-printing and minification
//! - [`encode`]: Base64, URL, HTML entity, data URI and JWT helpers
//! - [`hash`]: MD5 and SHA-2 digests
//! - [`convert`]: timestamps and number bases
//! - [`catalog`]: the static tool and category list
//! - [`search`]: priority-weighted substring search over the catalog
//! - [`prefs`]: the preference storage port and its typed facade
//!
//! `prefs` is the only stateful module and nothing else depends on it.
//!
//! # Example Usage
//!
//! ```rust
//! use devtools_core::color::{hex_to_rgb, rgb_to_hex};
//!
//! let rgb = hex_to_rgb("#1e90ff").unwrap();
//! assert_eq!(rgb.to_string(), "rgb(30, 144, 255)");
//! assert_eq!(rgb_to_hex(30, 144, 255).unwrap(), "#1e90ff");
//! ```

pub mod catalog;
pub mod color;
pub mod convert;
pub mod encode;
pub mod format;
pub mod hash;
pub mod palette;
pub mod prefs;
pub mod search;
pub mod text;
pub mod validate;
