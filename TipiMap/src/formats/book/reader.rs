//! Catalogue file reading

use std::fs;
use std::path::Path;

use super::document::{Book, IndexedBook};
use crate::error::Result;

/// Read a resolved catalogue file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_books<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let content = fs::read_to_string(path)?;
    parse_books(&content)
}

/// Parse resolved catalogue records from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_books(content: &str) -> Result<Vec<Book>> {
    let books: Vec<Book> = serde_json::from_str(content)?;
    Ok(books)
}

/// Read a catalogue file whose cross-references are numeric record indices
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_indexed_books<P: AsRef<Path>>(path: P) -> Result<Vec<IndexedBook>> {
    let content = fs::read_to_string(path)?;
    parse_indexed_books(&content)
}

/// Parse indexed catalogue records from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_indexed_books(content: &str) -> Result<Vec<IndexedBook>> {
    let books: Vec<IndexedBook> = serde_json::from_str(content)?;
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::book::{CommentaryLevel, Pitaka};

    #[test]
    fn test_parse_indexed_record() {
        let json = r#"[{
            "Index": 0,
            "FileName": "s0101m.mul.xml",
            "LongNavPath": "tipiṭaka (mūla)/sutta piṭaka/dīgha nikāya/sīlakkhandhavaggapāḷi",
            "ShortNavPath": "su. pi./dī. ni./sīlakkhandhavaggapāḷi",
            "Matn": "Mula",
            "Pitaka": "Sutta",
            "BookType": "Whole",
            "MulaIndex": null,
            "AtthakathaIndex": 61,
            "TikaIndex": 108,
            "ChapterListTypes": "book,sutta"
        }]"#;

        let books = parse_indexed_books(json).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].file_name, "s0101m.mul.xml");
        assert_eq!(books[0].matn, Some(CommentaryLevel::Mula));
        assert_eq!(books[0].pitaka, Some(Pitaka::Sutta));
        assert_eq!(books[0].mula_index, None);
        assert_eq!(books[0].atthakatha_index, Some(61));
        assert_eq!(books[0].tika_index, Some(108));
    }

    #[test]
    fn test_missing_optional_fields_parse_as_none() {
        let json = r#"[{
            "Index": 41,
            "FileName": "s0518m.nrf.xml",
            "LongNavPath": "a/b",
            "ShortNavPath": "a/b",
            "Matn": "Mula",
            "Pitaka": "Sutta"
        }]"#;

        let books = parse_books(json).unwrap();
        assert_eq!(books[0].book_type, None);
        assert_eq!(books[0].atthakatha_index, None);
        assert_eq!(books[0].chapter_list_types, None);
    }
}
