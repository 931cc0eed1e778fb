//! Numeric cross-reference resolution
//!
//! The catalogue generator emits `MulaIndex`/`AtthakathaIndex`/`TikaIndex`
//! as record indices. Downstream consumers need filenames, so this pass
//! rewrites each reference to the `FileName` of the record it points at.

use std::collections::HashMap;

use crate::formats::book::{Book, IndexedBook};

/// `TikaIndex` placeholder for texts whose tika exists but is not linked.
pub const UNLINKED_TIKA: u32 = 99999;

/// Resolve numeric cross-references to filenames.
///
/// Unknown indices and the [`UNLINKED_TIKA`] sentinel resolve to absent.
#[must_use]
pub fn resolve_indices(books: &[IndexedBook]) -> Vec<Book> {
    let by_index: HashMap<u32, &str> = books
        .iter()
        .map(|book| (book.index, book.file_name.as_str()))
        .collect();

    books
        .iter()
        .map(|book| Book {
            index: book.index,
            file_name: book.file_name.clone(),
            long_nav_path: book.long_nav_path.clone(),
            short_nav_path: book.short_nav_path.clone(),
            matn: book.matn,
            pitaka: book.pitaka,
            book_type: book.book_type,
            mula_index: file_name_for(&by_index, book.mula_index),
            atthakatha_index: file_name_for(&by_index, book.atthakatha_index),
            tika_index: file_name_for(&by_index, book.tika_index.filter(|&i| i != UNLINKED_TIKA)),
            chapter_list_types: book.chapter_list_types.clone(),
        })
        .collect()
}

fn file_name_for(by_index: &HashMap<u32, &str>, index: Option<u32>) -> Option<String> {
    index.and_then(|i| by_index.get(&i).map(|&name| name.to_owned()))
}
