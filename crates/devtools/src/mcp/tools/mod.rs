mod catalog;
mod color;
mod encode;
mod pdf;
mod text;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool, INTERNAL_ERROR, INVALID_PARAMS};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn parse_args<T: serde::de::DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid arguments: {e}")))
}

fn internal_err(message: String) -> JsonRpcError {
    JsonRpcError::new(INTERNAL_ERROR, message)
}

fn call_result(text: String, is_error: bool) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(CallToolResult {
        content: vec![Content::Text { text }],
        is_error: is_error.then_some(true),
    })
    .map_err(|e| internal_err(format!("Internal error: {e}")))
}

fn to_text_result(value: &impl Serialize) -> Result<serde_json::Value, JsonRpcError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| internal_err(format!("Serialization error: {e}")))?;
    call_result(json, false)
}

/// Report a failure caused by the tool input rather than the protocol.
fn tool_error(message: impl std::fmt::Display) -> Result<serde_json::Value, JsonRpcError> {
    call_result(message.to_string(), true)
}

fn to_tool_result<T: Serialize, E: std::fmt::Display>(
    result: Result<T, E>,
) -> Result<serde_json::Value, JsonRpcError> {
    match result {
        Ok(value) => to_text_result(&value),
        Err(e) => tool_error(e),
    }
}

/// Run CPU-heavy or file-reading work off the async runtime.
async fn run_blocking<T, F>(f: F) -> Result<Result<T, String>, JsonRpcError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| internal_err(format!("Task join error: {e}")))
}

fn schema(properties: serde_json::Value, required: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn tool(name: &str, description: &str, input_schema: serde_json::Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

// ---------------------------------------------------------------------------
// Protocol handlers
// ---------------------------------------------------------------------------

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "devtools".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| internal_err(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = color::definitions()
        .into_iter()
        .chain(text::definitions())
        .chain(encode::definitions())
        .chain(catalog::definitions())
        .chain(pdf::definitions())
        .collect();

    serde_json::to_value(ToolsList { tools })
        .map_err(|e| internal_err(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    _global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

    log::debug!("tools/call {}", params.name);

    match params.name.as_str() {
        "color_convert" => color::handle_color_convert(params.arguments),
        "color_contrast" => color::handle_color_contrast(params.arguments),
        "palette_extract" => color::handle_palette_extract(params.arguments).await,
        "text_stats" => text::handle_text_stats(params.arguments),
        "text_transform" => text::handle_text_transform(params.arguments),
        "json_format" => text::handle_json_format(params.arguments),
        "validate" => text::handle_validate(params.arguments),
        "encode" => encode::handle_encode(params.arguments),
        "jwt_decode" => encode::handle_jwt_decode(params.arguments),
        "hash" => encode::handle_hash(params.arguments),
        "timestamp_convert" => encode::handle_timestamp_convert(params.arguments),
        "base_convert" => encode::handle_base_convert(params.arguments),
        "uuid_generate" => encode::handle_uuid_generate(params.arguments),
        "tool_search" => catalog::handle_tool_search(params.arguments),
        "tool_list" => catalog::handle_tool_list(params.arguments),
        "pdf_extract_text" => pdf::handle_pdf_extract_text(params.arguments).await,
        "pdf_info" => pdf::handle_pdf_info(params.arguments).await,
        _ => Err(JsonRpcError::new(
            INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        )),
    }
}
