use devtools_core::color;
use serde::Deserialize;
use serde_json::json;

use super::{
    parse_args, run_blocking, schema, to_text_result, to_tool_result, tool, tool_error,
    JsonRpcError, Tool,
};

const DEFAULT_PALETTE_SIZE: usize = 5;
const MAX_PALETTE_SIZE: usize = 16;

pub fn definitions() -> Vec<Tool> {
    vec![
        tool(
            "color_convert",
            "Convert a color given as HEX (#rgb or #rrggbb), rgb(r, g, b) or hsl(h, s%, l%) into HEX, RGB, HSL and CMYK.",
            schema(
                json!({
                    "color": {
                        "type": "string",
                        "description": "Color to convert, e.g. '#1e90ff', 'rgb(30, 144, 255)' or 'hsl(210, 100%, 56%)'"
                    }
                }),
                &["color"],
            ),
        ),
        tool(
            "color_contrast",
            "WCAG 2 contrast ratio between a foreground and a background color, with AA/AAA pass flags for normal and large text.",
            schema(
                json!({
                    "foreground": { "type": "string", "description": "Text color in any supported notation" },
                    "background": { "type": "string", "description": "Background color in any supported notation" }
                }),
                &["foreground", "background"],
            ),
        ),
        tool(
            "palette_extract",
            "Extract the dominant colors of a PNG or JPEG image with k-means clustering. Returns colors ordered by share of the image.",
            schema(
                json!({
                    "path": { "type": "string", "description": "Path to the image file" },
                    "colors": { "type": "number", "description": "Number of colors to extract (default: 5, max: 16)" }
                }),
                &["path"],
            ),
        ),
    ]
}

pub fn handle_color_convert(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        color: String,
    }

    let args: Args = parse_args(arguments)?;
    to_tool_result(color::convert(&args.color))
}

pub fn handle_color_contrast(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        foreground: String,
        background: String,
    }

    let args: Args = parse_args(arguments)?;
    let (fg, bg) = match (color::convert(&args.foreground), color::convert(&args.background)) {
        (Ok(fg), Ok(bg)) => (fg.rgb, bg.rgb),
        (Err(e), _) | (_, Err(e)) => return tool_error(e),
    };

    to_text_result(&color::contrast_ratio(fg, bg))
}

pub async fn handle_palette_extract(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        path: String,
        colors: Option<usize>,
    }

    let args: Args = parse_args(arguments)?;
    let colors = args
        .colors
        .unwrap_or(DEFAULT_PALETTE_SIZE)
        .clamp(1, MAX_PALETTE_SIZE);

    let result = run_blocking(move || {
        crate::palette::extract_from_file(std::path::Path::new(&args.path), colors)
            .map_err(|e| e.to_string())
    })
    .await?;

    to_tool_result(result)
}
