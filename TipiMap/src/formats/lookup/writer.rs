//! Lookup map writing

use std::fs;
use std::path::Path;

use super::document::LookupMap;
use crate::error::Result;

/// Write a lookup map to disk, pretty-printed
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_map<P: AsRef<Path>>(map: &LookupMap, path: P) -> Result<()> {
    let json = serialize_map(map)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a lookup map to pretty-printed JSON (2-space indentation)
///
/// Keys serialize in insertion order.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_map(map: &LookupMap) -> Result<String> {
    let json = serde_json::to_string_pretty(map)?;
    Ok(json)
}
