use devtools_core::{convert, encode, hash::HashAlgorithm};
use serde::Deserialize;
use serde_json::json;

use super::{parse_args, schema, to_text_result, to_tool_result, tool, tool_error, JsonRpcError, Tool};

const MAX_UUIDS: usize = 100;

pub fn definitions() -> Vec<Tool> {
    vec![
        tool(
            "encode",
            "Encode or decode text: Base64 (UTF-8), URL percent-encoding or HTML entities.",
            schema(
                json!({
                    "operation": {
                        "type": "string",
                        "description": "Operation to apply",
                        "enum": ["base64_encode", "base64_decode", "url_encode", "url_decode", "html_escape", "html_unescape"]
                    },
                    "input": { "type": "string", "description": "Text to encode or decode" }
                }),
                &["operation", "input"],
            ),
        ),
        tool(
            "jwt_decode",
            "Decode the header and payload of a JSON Web Token. The signature is returned as-is and NOT verified.",
            schema(
                json!({ "token": { "type": "string", "description": "Compact JWT (header.payload.signature)" } }),
                &["token"],
            ),
        ),
        tool(
            "hash",
            "Hex digests of UTF-8 text with MD5, SHA-224, SHA-256, SHA-384 and SHA-512, or a single algorithm.",
            schema(
                json!({
                    "text": { "type": "string", "description": "Text to hash" },
                    "algorithm": {
                        "type": "string",
                        "description": "Only compute this algorithm (default: all)",
                        "enum": ["md5", "sha224", "sha256", "sha384", "sha512"]
                    }
                }),
                &["text"],
            ),
        ),
        tool(
            "timestamp_convert",
            "Convert Unix seconds to an RFC 3339 UTC date-time and back. Accepts 'now' for the current time.",
            schema(
                json!({ "value": { "type": "string", "description": "Unix seconds, RFC 3339 date-time or 'now'" } }),
                &["value"],
            ),
        ),
        tool(
            "base_convert",
            "Convert a non-negative integer between bases 2 to 36. 0x, 0o and 0b prefixes and '_' separators are accepted.",
            schema(
                json!({
                    "value": { "type": "string", "description": "Number to convert" },
                    "from": { "type": "number", "description": "Input base (default: 10)" },
                    "to": { "type": "number", "description": "Output base (default: 16)" }
                }),
                &["value"],
            ),
        ),
        tool(
            "uuid_generate",
            "Generate random version 4 UUIDs.",
            schema(
                json!({ "count": { "type": "number", "description": "How many UUIDs (default: 1, max: 100)" } }),
                &[],
            ),
        ),
    ]
}

pub fn handle_encode(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        operation: String,
        input: String,
    }

    let args: Args = parse_args(arguments)?;
    let input = args.input.as_str();

    let result = match args.operation.as_str() {
        "base64_encode" => Ok(encode::base64_encode(input)),
        "base64_decode" => encode::base64_decode(input.trim()),
        "url_encode" => Ok(encode::url_encode(input)),
        "url_decode" => encode::url_decode(input),
        "html_escape" => Ok(encode::html_escape(input)),
        "html_unescape" => Ok(encode::html_unescape(input)),
        other => return tool_error(format!("Unknown operation '{other}'")),
    };

    to_tool_result(result.map(|output| json!({ "result": output })))
}

pub fn handle_jwt_decode(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        token: String,
    }

    let args: Args = parse_args(arguments)?;
    to_tool_result(encode::decode_jwt(args.token.trim()))
}

pub fn handle_hash(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        text: String,
        algorithm: Option<HashAlgorithm>,
    }

    let args: Args = parse_args(arguments)?;
    to_text_result(&crate::hash::digests(args.text.as_bytes(), args.algorithm))
}

pub fn handle_timestamp_convert(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        value: serde_json::Value,
    }

    let args: Args = parse_args(arguments)?;
    // Accept both "1700000000" and 1700000000.
    let value = match args.value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        other => return tool_error(format!("Expected a string or number, got {other}")),
    };

    to_tool_result(crate::convert::timestamp(&value))
}

pub fn handle_base_convert(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        value: String,
        from: Option<u32>,
        to: Option<u32>,
    }

    let args: Args = parse_args(arguments)?;
    to_tool_result(convert::convert_base(
        &args.value,
        args.from.unwrap_or(10),
        args.to.unwrap_or(16),
    ))
}

pub fn handle_uuid_generate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize, Default)]
    struct Args {
        count: Option<usize>,
    }

    let args: Args = match arguments {
        Some(arguments) => parse_args(Some(arguments))?,
        None => Args::default(),
    };
    let count = args.count.unwrap_or(1).clamp(1, MAX_UUIDS);

    to_text_result(&crate::uuidgen::generate(count, false))
}
