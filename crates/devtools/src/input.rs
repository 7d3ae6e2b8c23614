use std::io::{IsTerminal, Read};

use crate::prelude::*;

/// Return the positional argument, or everything on stdin when it is
/// missing or `-`. One trailing newline is dropped from stdin.
pub fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(value) if value != "-" => Ok(value),
        _ => read_stdin(),
    }
}

/// Like [`read_text`] but trims surrounding whitespace, for single values
/// such as colors, tokens and addresses.
pub fn read_value(arg: Option<String>) -> Result<String> {
    Ok(read_text(arg)?.trim().to_string())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::Input("no input given; pass an argument or pipe data on stdin".into()).into());
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| Error::Input(f!("failed to read stdin: {e}")))?;

    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

pub fn read_file(path: &std::path::Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| f!("Failed to read {}", path.display()))
}
