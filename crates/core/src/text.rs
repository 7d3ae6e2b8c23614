use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Words per minute used for the reading-time estimate.
pub const READING_WPM: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

fn paragraph_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+").unwrap())
}

fn slug_strip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_\s-]").unwrap())
}

fn slug_collapse_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_-]+").unwrap())
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

pub fn count_characters_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn count_sentences(text: &str) -> usize {
    sentence_regex()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn count_paragraphs(text: &str) -> usize {
    paragraph_regex()
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}

pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

pub fn analyze(text: &str) -> TextStats {
    let words = count_words(text);
    TextStats {
        characters: count_characters(text),
        characters_no_spaces: count_characters_no_spaces(text),
        words,
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        lines: count_lines(text),
        reading_time_minutes: words.div_ceil(READING_WPM),
    }
}

/// Drop repeated lines, keeping the first occurrence of each.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop repeated words, keeping the first occurrence of each. Words are
/// re-joined with single spaces.
pub fn remove_duplicate_words(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| seen.insert(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn generate_slug(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let stripped = slug_strip_regex().replace_all(&lower, "");
    let collapsed = slug_collapse_regex().replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split on anything that is not alphanumeric, and on lower-to-upper
/// boundaries so `camelCase` input splits too.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Capitalize the first letter of every whitespace-separated word,
/// keeping the original separators.
pub fn to_title_case(text: &str) -> String {
    word_regex()
        .replace_all(text, |caps: &regex::Captures| capitalize(&caps[0]))
        .into_owned()
}

pub fn to_camel_case(text: &str) -> String {
    split_words(text)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn convert_case(text: &str, case: Case) -> String {
    match case {
        Case::Upper => text.to_uppercase(),
        Case::Lower => text.to_lowercase(),
        Case::Title => to_title_case(text),
        Case::Sentence => {
            let lower = text.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        Case::Camel => to_camel_case(text),
        Case::Pascal => split_words(text).iter().map(|w| capitalize(w)).collect(),
        Case::Snake => join_lower(text, "_"),
        Case::Kebab => join_lower(text, "-"),
        Case::Constant => join_lower(text, "_").to_uppercase(),
    }
}

fn join_lower(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn sort_lines(text: &str, order: SortOrder, case_insensitive: bool) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if case_insensitive {
        lines.sort_by_key(|line| line.to_lowercase());
    } else {
        lines.sort();
    }
    if order == SortOrder::Descending {
        lines.reverse();
    }
    lines.join("\n")
}
