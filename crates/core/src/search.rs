//! Substring search over the tool catalog.
//!
//! Despite being called fuzzy in the UI, matching is plain case-insensitive
//! substring containment weighted by where the match occurs.

use serde::Serialize;

use crate::catalog::{self, Category, Tool};

pub const MAX_RESULTS: usize = 10;

pub const SCORE_EXACT_NAME: u8 = 100;
pub const SCORE_NAME_PREFIX: u8 = 90;
pub const SCORE_NAME_CONTAINS: u8 = 70;
pub const SCORE_DESCRIPTION: u8 = 50;
pub const SCORE_TAG: u8 = 40;
pub const SCORE_CATEGORY: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Tool,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    pub id: String,
    pub kind: EntryKind,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Name of the category a tool belongs to; empty for categories.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub kind: EntryKind,
    pub name: String,
    pub description: String,
    pub score: u8,
}

pub fn build_index(tools: &[Tool], categories: &[Category]) -> Vec<SearchEntry> {
    let category_name = |id: &str| {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| id.to_string())
    };

    let tool_entries = tools.iter().map(|tool| SearchEntry {
        id: tool.id.to_string(),
        kind: EntryKind::Tool,
        name: tool.name.to_string(),
        description: tool.description.to_string(),
        tags: tool.tags.iter().map(|t| t.to_string()).collect(),
        category: category_name(tool.category),
    });

    let category_entries = categories.iter().map(|category| SearchEntry {
        id: category.id.to_string(),
        kind: EntryKind::Category,
        name: category.name.to_string(),
        description: category.description.to_string(),
        tags: Vec::new(),
        category: String::new(),
    });

    tool_entries.chain(category_entries).collect()
}

/// Score one entry against an already lowercased query. Zero means no match.
pub fn score_entry(entry: &SearchEntry, query: &str) -> u8 {
    let name = entry.name.to_lowercase();

    if name == query {
        SCORE_EXACT_NAME
    } else if name.starts_with(query) {
        SCORE_NAME_PREFIX
    } else if name.contains(query) {
        SCORE_NAME_CONTAINS
    } else if entry.description.to_lowercase().contains(query) {
        SCORE_DESCRIPTION
    } else if entry
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query))
    {
        SCORE_TAG
    } else if !entry.category.is_empty() && entry.category.to_lowercase().contains(query) {
        SCORE_CATEGORY
    } else {
        0
    }
}

/// Rank entries by score, ties alphabetically by name, at most
/// [`MAX_RESULTS`] results.
pub fn search_index(index: &[SearchEntry], query: &str) -> Vec<SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &query);
            (score > 0).then(|| SearchResult {
                id: entry.id.clone(),
                kind: entry.kind,
                name: entry.name.clone(),
                description: entry.description.clone(),
                score,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    results.truncate(MAX_RESULTS);
    results
}

/// Search the built-in catalog.
pub fn search(query: &str) -> Vec<SearchResult> {
    let index = build_index(catalog::tools(), catalog::categories());
    search_index(&index, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: &str, tags: &[&str], category: &str) -> SearchEntry {
        SearchEntry {
            id: name.to_lowercase().replace(' ', "-"),
            kind: EntryKind::Tool,
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_score_ladder() {
        assert_eq!(score_entry(&entry("JSON", "", &[], ""), "json"), 100);
        assert_eq!(score_entry(&entry("JSON Formatter", "", &[], ""), "json"), 90);
        assert_eq!(score_entry(&entry("Pretty JSON", "", &[], ""), "json"), 70);
        assert_eq!(score_entry(&entry("Tree", "reads json", &[], ""), "json"), 50);
        assert_eq!(score_entry(&entry("Tree", "", &["jsonl"], ""), "json"), 40);
        assert_eq!(score_entry(&entry("Tree", "", &[], "JSON Tools"), "json"), 30);
        assert_eq!(score_entry(&entry("Tree", "", &[], ""), "json"), 0);
    }

    #[test]
    fn test_search_ranks_name_prefix_above_description() {
        let results = search("json");
        let formatter = results
            .iter()
            .position(|r| r.name == "JSON Formatter")
            .unwrap();
        let jwt = results.iter().position(|r| r.name == "JWT Decoder").unwrap();
        assert!(formatter < jwt);
        assert_eq!(results[formatter].score, SCORE_NAME_PREFIX);
        assert_eq!(results[jwt].score, SCORE_DESCRIPTION);
    }

    #[test]
    fn test_search_ties_sorted_alphabetically() {
        let results = search("json");
        let top: Vec<&str> = results.iter().take(3).map(|r| r.name.as_str()).collect();
        assert_eq!(top, vec!["JSON Formatter", "JSON Minifier", "JSON Validator"]);
    }

    #[test]
    fn test_search_exact_match_first() {
        let results = search("word counter");
        assert_eq!(results[0].name, "Word Counter");
        assert_eq!(results[0].score, SCORE_EXACT_NAME);
    }

    #[test]
    fn test_search_matches_categories() {
        let results = search("validators");
        assert_eq!(results[0].kind, EntryKind::Category);
        assert_eq!(results[0].score, SCORE_EXACT_NAME);
        // Tools in the category match through their category name.
        assert!(results
            .iter()
            .any(|r| r.kind == EntryKind::Tool && r.score == SCORE_CATEGORY));
    }

    #[test]
    fn test_search_caps_results() {
        let index: Vec<SearchEntry> = (0..25)
            .map(|i| entry(&format!("Tool {i:02}"), "", &[], ""))
            .collect();
        let results = search_index(&index, "tool");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].name, "Tool 00");
    }

    #[test]
    fn test_search_empty_query() {
        assert!(search("   ").is_empty());
    }
}
