//! Lookup map reading

use std::fs;
use std::path::Path;

use super::document::LookupMap;
use crate::error::Result;

/// Read a lookup map file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_map<P: AsRef<Path>>(path: P) -> Result<LookupMap> {
    let content = fs::read_to_string(path)?;
    parse_map(&content)
}

/// Parse a lookup map from a JSON string, preserving key order
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_map(content: &str) -> Result<LookupMap> {
    let map: LookupMap = serde_json::from_str(content)?;
    Ok(map)
}
