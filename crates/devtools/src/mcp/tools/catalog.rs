use devtools_core::{catalog, search};
use serde::Deserialize;
use serde_json::json;

use super::{parse_args, schema, to_text_result, tool, tool_error, JsonRpcError, Tool};

pub fn definitions() -> Vec<Tool> {
    vec![
        tool(
            "tool_search",
            "Search the devtools catalog. Case-insensitive substring match ranked by where it hits: exact name, name prefix, name, description, tags, then category. Returns at most 10 results.",
            schema(
                json!({ "query": { "type": "string", "description": "Search terms" } }),
                &["query"],
            ),
        ),
        tool(
            "tool_list",
            "List catalog tools, optionally only one category or only popular tools. Without arguments also lists the categories.",
            schema(
                json!({
                    "category": { "type": "string", "description": "Category id, e.g. 'color' or 'encoders'" },
                    "popular": { "type": "boolean", "description": "Only popular tools (default: false)" }
                }),
                &[],
            ),
        ),
    ]
}

pub fn handle_tool_search(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        query: String,
    }

    let args: Args = parse_args(arguments)?;
    to_text_result(&search::search(&args.query))
}

pub fn handle_tool_list(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize, Default)]
    struct Args {
        category: Option<String>,
        #[serde(default)]
        popular: bool,
    }

    let args: Args = match arguments {
        Some(arguments) => parse_args(Some(arguments))?,
        None => Args::default(),
    };

    let tools: Vec<&catalog::Tool> = match &args.category {
        Some(id) => match catalog::find_category(id) {
            Some(category) => catalog::tools_in_category(category.id),
            None => return tool_error(format!("Unknown category: {id}")),
        },
        None => catalog::tools().iter().collect(),
    };
    let tools: Vec<&catalog::Tool> = tools
        .into_iter()
        .filter(|t| !args.popular || t.popular)
        .collect();

    if args.category.is_none() {
        to_text_result(&json!({ "categories": catalog::categories(), "tools": tools }))
    } else {
        to_text_result(&tools)
    }
}
