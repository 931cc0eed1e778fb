//! Catalogue conversion utilities
//!
//! This module handles the stages between the raw catalogue and the
//! published artifacts:
//! - Index resolution - numeric cross-references → filenames
//! - Nav-path transliteration and title-casing
//! - Lookup-map construction with manual link overrides

pub mod map;
pub mod navpath;
pub mod pipeline;
pub mod resolve;

pub use map::{apply_manual_links, build_lookup_map};
pub use navpath::{to_title_case, transliterate_nav_path};
pub use pipeline::{
    MapOptions, convert_catalogue_to_map, resolve_indices_to_filenames, transliterate_books,
};
pub use resolve::{UNLINKED_TIKA, resolve_indices};
