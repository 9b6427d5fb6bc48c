use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// How a rewritten document is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// No whitespace between tokens, the way animation exporters ship files.
    #[default]
    Compact,
    Pretty,
}

/// Read and parse an animation document.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, or is not valid JSON.
pub fn load(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).with_context(|| {
        if path.exists() {
            format!("failed to read {}", path.display())
        } else {
            format!("file not found: {}", path.display())
        }
    })?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Serialize a document. Object key order is kept as loaded and non-ASCII
/// text is written verbatim.
///
/// # Errors
///
/// Fails only if the value cannot be represented as JSON.
pub fn to_string(value: &Value, style: OutputStyle) -> Result<String> {
    let text = match style {
        OutputStyle::Compact => serde_json::to_string(value)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Write a document to `path`, replacing any existing file.
///
/// # Errors
///
/// Fails if serialization or the write fails.
pub fn save(path: &Path, value: &Value, style: OutputStyle) -> Result<()> {
    let text = to_string(value, style)?;
    std::fs::write(path, text)
        .with_context(|| format!("failed to write document to {}", path.display()))?;
    Ok(())
}
