use devtools_core::{format, text, validate};
use serde::Deserialize;
use serde_json::json;

use super::{parse_args, schema, to_text_result, to_tool_result, tool, tool_error, JsonRpcError, Tool};
use crate::validate::{check, Kind};

const TRANSFORMS: &[&str] = &[
    "slug",
    "upper",
    "lower",
    "title",
    "sentence",
    "camel",
    "pascal",
    "snake",
    "kebab",
    "constant",
    "reverse",
    "sort_asc",
    "sort_desc",
    "dedupe_lines",
    "dedupe_words",
];

pub fn definitions() -> Vec<Tool> {
    vec![
        tool(
            "text_stats",
            "Count characters (with and without whitespace), words, sentences, paragraphs and lines, and estimate reading time at 200 words per minute.",
            schema(
                json!({ "text": { "type": "string", "description": "Text to analyze" } }),
                &["text"],
            ),
        ),
        tool(
            "text_transform",
            "Transform text: URL slug, letter case conversions, reversal, line sorting, or removal of duplicate lines or words.",
            schema(
                json!({
                    "text": { "type": "string", "description": "Text to transform" },
                    "operation": {
                        "type": "string",
                        "description": "Transformation to apply",
                        "enum": TRANSFORMS
                    }
                }),
                &["text", "operation"],
            ),
        ),
        tool(
            "json_format",
            "Pretty-print or minify a JSON document. Returns the parser error when the input is not valid JSON.",
            schema(
                json!({
                    "json": { "type": "string", "description": "JSON document" },
                    "indent": { "type": "number", "description": "Spaces per indentation level (default: 2)" },
                    "minify": { "type": "boolean", "description": "Minify instead of pretty-printing (default: false)" }
                }),
                &["json"],
            ),
        ),
        tool(
            "validate",
            "Validate an email address, URL, IPv4 or IPv6 address, UUID, credit card number (Luhn checksum and issuer) or password strength.",
            schema(
                json!({
                    "kind": {
                        "type": "string",
                        "description": "What to validate",
                        "enum": ["email", "url", "ipv4", "ipv6", "uuid", "credit_card", "password"]
                    },
                    "value": { "type": "string", "description": "Value to check" }
                }),
                &["kind", "value"],
            ),
        ),
    ]
}

pub fn handle_text_stats(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        text: String,
    }

    let args: Args = parse_args(arguments)?;
    to_text_result(&text::analyze(&args.text))
}

pub fn handle_text_transform(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        text: String,
        operation: String,
    }

    let args: Args = parse_args(arguments)?;
    let input = args.text.as_str();

    let result = match args.operation.as_str() {
        "slug" => text::generate_slug(input),
        "upper" => text::convert_case(input, text::Case::Upper),
        "lower" => text::convert_case(input, text::Case::Lower),
        "title" => text::convert_case(input, text::Case::Title),
        "sentence" => text::convert_case(input, text::Case::Sentence),
        "camel" => text::convert_case(input, text::Case::Camel),
        "pascal" => text::convert_case(input, text::Case::Pascal),
        "snake" => text::convert_case(input, text::Case::Snake),
        "kebab" => text::convert_case(input, text::Case::Kebab),
        "constant" => text::convert_case(input, text::Case::Constant),
        "reverse" => text::reverse_text(input),
        "sort_asc" => text::sort_lines(input, text::SortOrder::Ascending, false),
        "sort_desc" => text::sort_lines(input, text::SortOrder::Descending, false),
        "dedupe_lines" => text::remove_duplicate_lines(input),
        "dedupe_words" => text::remove_duplicate_words(input),
        other => {
            return tool_error(format!(
                "Unknown operation '{other}'. Expected one of: {}",
                TRANSFORMS.join(", ")
            ))
        }
    };

    to_text_result(&json!({ "result": result }))
}

pub fn handle_json_format(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        json: String,
        indent: Option<usize>,
        #[serde(default)]
        minify: bool,
    }

    let args: Args = parse_args(arguments)?;
    let result = if args.minify {
        format::minify_json(&args.json)
    } else {
        format::format_json(&args.json, args.indent.unwrap_or(2))
    };

    to_tool_result(result.map(|formatted| json!({ "result": formatted })))
}

pub fn handle_validate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Check {
        Email,
        Url,
        Ipv4,
        Ipv6,
        Uuid,
        CreditCard,
        Password,
    }

    #[derive(Deserialize)]
    struct Args {
        kind: Check,
        value: String,
    }

    let args: Args = parse_args(arguments)?;
    let value = args.value.trim();

    match args.kind {
        Check::Email => to_text_result(&check(Kind::Email, value)),
        Check::Url => to_text_result(&check(Kind::Url, value)),
        Check::Ipv4 => to_text_result(&check(Kind::Ipv4, value)),
        Check::Ipv6 => to_text_result(&check(Kind::Ipv6, value)),
        Check::Uuid => to_text_result(&check(Kind::Uuid, value)),
        Check::CreditCard => to_text_result(&validate::validate_credit_card(value)),
        Check::Password => to_text_result(&validate::validate_password(&args.value)),
    }
}
