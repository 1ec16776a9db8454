//! Source list loading.
//!
//! Reads the media source cells exported from the song table, either as
//! a JSON array or as a plain text file with one value per line.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::player::{resolve_value, ResolvedSource, Resolver};

/// Default record field holding the media source in JSON exports.
pub const DEFAULT_SOURCE_FIELD: &str = "AUDIO";

/// One cell from a source list.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    /// 1-based line number or array position.
    pub position: usize,
    /// The cell as read; non-string JSON values are kept as they are.
    pub value: Value,
}

/// A source entry together with its resolution.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    /// 1-based line number or array position.
    pub position: usize,
    /// The raw text, when the cell was a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// `None` when there is nothing to render.
    pub resolved: Option<ResolvedSource>,
}

/// Load source cells from `path`.
///
/// `.json` files must hold an array. String elements are the cells
/// themselves; object elements contribute their `field` value. Any other
/// file is read line by line, skipping `#` comments.
pub fn load_sources(path: &Path, field: &str) -> Result<Vec<SourceEntry>> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        parse_json_sources(&content, field).map_err(|message| Error::parse(message, path.to_path_buf()))?
    } else {
        parse_text_sources(&content)
    };

    tracing::info!("Loaded {} source entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse a JSON array of cells or records.
pub fn parse_json_sources(content: &str, field: &str) -> std::result::Result<Vec<SourceEntry>, String> {
    let data: Value = serde_json::from_str(content).map_err(|e| format!("Invalid JSON: {e}"))?;
    let items = data
        .as_array()
        .ok_or_else(|| "Expected a JSON array of sources".to_string())?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let value = match item {
                Value::Object(record) => record.get(field).cloned().unwrap_or_else(|| {
                    tracing::warn!("Record {} has no '{field}' field", idx + 1);
                    Value::Null
                }),
                other => other.clone(),
            };
            SourceEntry { position: idx + 1, value }
        })
        .collect())
}

/// Parse newline-separated source values.
///
/// Blank lines stay in the list as nothing-to-render entries so positions
/// line up with the file.
pub fn parse_text_sources(content: &str) -> Vec<SourceEntry> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
        .map(|(idx, line)| SourceEntry {
            position: idx + 1,
            value: Value::String(line.to_string()),
        })
        .collect()
}

/// Resolve every entry with `resolver`.
pub fn resolve_entries(resolver: &Resolver, entries: &[SourceEntry]) -> Vec<SourceReport> {
    entries
        .iter()
        .map(|entry| SourceReport {
            position: entry.position,
            raw: entry.value.as_str().map(String::from),
            resolved: resolve_value(resolver, &entry.value),
        })
        .collect()
}
