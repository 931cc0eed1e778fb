//! Book record (catalogue) format module

mod document;
mod reader;
mod writer;

pub use document::{Book, BookType, CommentaryLevel, IndexedBook, Pitaka};
pub use reader::{parse_books, parse_indexed_books, read_books, read_indexed_books};
pub use writer::{serialize_books, write_books};
