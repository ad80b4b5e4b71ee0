//! JSON serialization of a project collection.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ScrapeError;
use crate::types::ProjectCollection;

/// Renders `collection` as UTF-8 JSON with four-space indentation.
pub fn to_json_pretty(collection: &ProjectCollection) -> Result<String, ScrapeError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    collection.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ScrapeError::InvalidInput(e.to_string()))
}

/// Writes `collection` to `path`, replacing any existing file.
pub fn write_json(path: &Path, collection: &ProjectCollection) -> Result<(), ScrapeError> {
    let json = to_json_pretty(collection)?;
    std::fs::write(path, json)?;
    Ok(())
}
