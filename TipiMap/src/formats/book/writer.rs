//! Catalogue file writing

use std::fs;
use std::path::Path;

use super::document::Book;
use crate::error::Result;

/// Write catalogue records to disk, pretty-printed
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_books<P: AsRef<Path>>(books: &[Book], path: P) -> Result<()> {
    let json = serialize_books(books)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize catalogue records to pretty-printed JSON (2-space indentation)
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_books(books: &[Book]) -> Result<String> {
    let json = serde_json::to_string_pretty(books)?;
    Ok(json)
}
