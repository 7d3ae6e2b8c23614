use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalize text pulled out of a content stream.
///
/// NFKC folds ligatures and compatibility forms, replacement characters are
/// dropped, runs of spaces and tabs collapse to one space, a word split by a
/// hyphen at the end of a line is joined, and blank-line runs shrink to one.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text.nfkc().filter(|&c| c != '\u{FFFD}').collect();

    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r"[ \t]+").unwrap());
    let collapsed = re_spaces.replace_all(&folded, " ");

    static RE_HYPHEN: OnceLock<Regex> = OnceLock::new();
    let re_hyphen = RE_HYPHEN.get_or_init(|| Regex::new(r"([a-zA-Z])- ?\n ?([a-z])").unwrap());
    let joined = re_hyphen.replace_all(&collapsed, "$1$2");

    let lines: Vec<&str> = joined.lines().map(str::trim).collect();

    static RE_BLANKS: OnceLock<Regex> = OnceLock::new();
    let re_blanks = RE_BLANKS.get_or_init(|| Regex::new(r"\n{3,}").unwrap());
    re_blanks
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_text("Hello world."), "Hello world.");
    }

    #[test]
    fn test_ligatures_fold() {
        assert_eq!(normalize_text("\u{FB01}nd the \u{FB04}ow"), "find the fflow");
    }

    #[test]
    fn test_replacement_character_removed() {
        assert_eq!(normalize_text("ab\u{FFFD}c"), "abc");
    }

    #[test]
    fn test_spaces_collapse() {
        assert_eq!(normalize_text("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_hyphenated_line_break_joined() {
        assert_eq!(normalize_text("extrac-\ntion works"), "extraction works");
        // Capitalized continuation is left alone.
        assert_eq!(normalize_text("Jean-\nPaul"), "Jean-\nPaul");
    }

    #[test]
    fn test_blank_runs_shrink() {
        assert_eq!(normalize_text("\n\none\n\n\n\ntwo  \n"), "one\n\ntwo");
    }
}
