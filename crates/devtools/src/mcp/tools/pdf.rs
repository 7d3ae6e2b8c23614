use serde::Deserialize;

use super::{parse_args, run_blocking, schema, to_tool_result, tool, JsonRpcError, Tool};

pub fn definitions() -> Vec<Tool> {
    vec![
        tool(
            "pdf_extract_text",
            "Extract the plain text of a PDF, page by page, by walking its content streams. Encrypted documents are rejected.",
            schema(
                serde_json::json!({
                    "path": { "type": "string", "description": "Path to the PDF file" },
                    "page": { "type": "number", "description": "Only return this page (1-based)" }
                }),
                &["path"],
            ),
        ),
        tool(
            "pdf_info",
            "PDF version, page count and Info dictionary metadata (Title, Author, Producer, ...).",
            schema(
                serde_json::json!({
                    "path": { "type": "string", "description": "Path to the PDF file" }
                }),
                &["path"],
            ),
        ),
    ]
}

fn read(path: &str) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("Failed to read {path}: {e}"))
}

pub async fn handle_pdf_extract_text(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        path: String,
        page: Option<u32>,
    }

    let args: Args = parse_args(arguments)?;

    let result = run_blocking(move || {
        let extracted = ::pdf::extract_text(&read(&args.path)?).map_err(|e| format!("PDF error: {e}"))?;
        let page_count = extracted.page_count;
        match args.page {
            Some(number) => extracted
                .pages
                .into_iter()
                .find(|p| p.page == number)
                .map(|p| serde_json::json!(p))
                .ok_or_else(|| format!("Page {number} out of range (1-{page_count})")),
            None => Ok(serde_json::json!(extracted)),
        }
    })
    .await?;

    to_tool_result(result)
}

pub async fn handle_pdf_info(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        path: String,
    }

    let args: Args = parse_args(arguments)?;

    let result = run_blocking(move || {
        ::pdf::info(&read(&args.path)?).map_err(|e| format!("PDF error: {e}"))
    })
    .await?;

    to_tool_result(result)
}
