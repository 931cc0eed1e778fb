//! Lookup map format module

mod document;
mod reader;
mod writer;

pub use document::{JumpKind, LookupEntry, LookupMap};
pub use reader::{parse_map, read_map};
pub use writer::{serialize_map, write_map};
