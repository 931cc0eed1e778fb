//! Book record structures
//!
//! Wire field names are the catalogue's own (`FileName`, `LongNavPath`, ...),
//! so records round-trip byte-compatible with the upstream generator.

use serde::{Deserialize, Serialize};

/// Commentary level of a catalogue text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentaryLevel {
    /// Root text.
    Mula,
    /// Commentary.
    Atthakatha,
    /// Sub-commentary.
    Tika,
    /// Anything outside the three-level hierarchy.
    Other,
}

/// Pitaka (basket) a text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pitaka {
    /// Discipline.
    Vinaya,
    /// Discourses.
    Sutta,
    /// Analytical doctrine.
    Abhidhamma,
    /// Para-canonical and later works.
    Other,
}

/// How a text maps onto physical volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookType {
    /// One text, one volume.
    Whole,
    /// One volume covering several texts.
    Multi,
    /// One text split across several volumes.
    Split,
    /// Not recorded.
    Unknown,
}

/// A catalogue record whose cross-references are resolved filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Position of the record in the catalogue.
    pub index: u32,
    /// Unique key; the XML filename of the text.
    pub file_name: String,
    /// Full breadcrumb path of the text in the catalogue hierarchy.
    pub long_nav_path: String,
    /// Abbreviated breadcrumb path.
    pub short_nav_path: String,
    /// Commentary level.
    pub matn: Option<CommentaryLevel>,
    /// Pitaka the text belongs to.
    pub pitaka: Option<Pitaka>,
    /// Volume layout.
    pub book_type: Option<BookType>,
    /// Filename of the companion root text.
    pub mula_index: Option<String>,
    /// Filename of the companion commentary.
    pub atthakatha_index: Option<String>,
    /// Filename of the companion sub-commentary.
    pub tika_index: Option<String>,
    /// Comma-separated chapter kinds used for the table of contents.
    pub chapter_list_types: Option<String>,
}

/// A catalogue record as the generator emits it: cross-references are
/// numeric record indices rather than filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexedBook {
    /// Position of the record in the catalogue.
    pub index: u32,
    /// Unique key; the XML filename of the text.
    pub file_name: String,
    /// Full breadcrumb path of the text in the catalogue hierarchy.
    pub long_nav_path: String,
    /// Abbreviated breadcrumb path.
    pub short_nav_path: String,
    /// Commentary level.
    pub matn: Option<CommentaryLevel>,
    /// Pitaka the text belongs to.
    pub pitaka: Option<Pitaka>,
    /// Volume layout.
    pub book_type: Option<BookType>,
    /// Record index of the companion root text.
    pub mula_index: Option<u32>,
    /// Record index of the companion commentary.
    pub atthakatha_index: Option<u32>,
    /// Record index of the companion sub-commentary.
    pub tika_index: Option<u32>,
    /// Comma-separated chapter kinds used for the table of contents.
    pub chapter_list_types: Option<String>,
}
