//! JSON in, JSON out

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::io::{Read, Write};

/// Expand a leading `~` the way the shell would
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Read the whole input, from a file or from stdin
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            let path = expand_path(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read JSON from stdin")?;
            Ok(buf)
        }
    }
}

pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| anyhow!("Input is not valid JSON: {}", e))
}

/// Compact JSON, or pretty JSON with `indent` spaces and a trailing newline
pub fn render(value: &Value, indent: Option<usize>) -> Result<String> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };

    let indent = " ".repeat(width);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    let mut rendered = String::from_utf8(buf).context("Serialized JSON is not UTF-8")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write to a file, or to stdout
pub fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            let path = expand_path(path);
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file {}", path))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
