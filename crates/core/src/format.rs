use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The parser's own message, passed through unchanged.
    #[error("{0}")]
    Syntax(String),

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

fn parse(input: &str) -> Result<serde_json::Value, FormatError> {
    serde_json::from_str(input).map_err(|e| FormatError::Syntax(e.to_string()))
}

/// Pretty-print JSON with `indent` spaces per level. An indent of zero
/// yields compact output.
pub fn format_json(input: &str, indent: usize) -> Result<String, FormatError> {
    let value = parse(input)?;

    if indent == 0 {
        return serde_json::to_string(&value).map_err(|e| FormatError::Serialize(e.to_string()));
    }

    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::Serialize(e.to_string()))?;

    String::from_utf8(out).map_err(|e| FormatError::Serialize(e.to_string()))
}

pub fn minify_json(input: &str) -> Result<String, FormatError> {
    format_json(input, 0)
}

pub fn validate_json(input: &str) -> Result<(), FormatError> {
    parse(input).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_two_spaces() {
        assert_eq!(format_json(r#"{"a":1}"#, 2).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_json_four_spaces_nested() {
        let formatted = format_json(r#"{"a":[1,{"b":null}]}"#, 4).unwrap();
        assert_eq!(
            formatted,
            "{\n    \"a\": [\n        1,\n        {\n            \"b\": null\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_format_json_preserves_key_order() {
        assert_eq!(
            minify_json(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap(),
            r#"{"z":1,"a":2,"m":3}"#
        );
    }

    #[test]
    fn test_minify_json() {
        assert_eq!(minify_json(r#"{ "a" : 1 }"#).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_format_json_zero_indent_is_compact() {
        assert_eq!(format_json("[ 1, 2 ]", 0).unwrap(), "[1,2]");
    }

    #[test]
    fn test_format_json_syntax_error_passes_parser_message() {
        let err = format_json(r#"{"a":}"#, 2).unwrap_err();
        let expected = serde_json::from_str::<serde_json::Value>(r#"{"a":}"#)
            .unwrap_err()
            .to_string();
        assert_eq!(err, FormatError::Syntax(expected));
    }

    #[test]
    fn test_validate_json() {
        assert!(validate_json("true").is_ok());
        assert!(validate_json("{").is_err());
    }
}
