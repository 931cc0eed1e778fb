//! Catalogue file formats
//!
//! This module handles the JSON artifacts the pipeline consumes and emits:
//! - Book records - the VRI/CST catalogue entries (indexed and resolved)
//! - Lookup map - the filename-keyed jump map

pub mod book;
pub mod lookup;
