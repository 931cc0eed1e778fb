//! # TipiMap
//!
//! A pure-Rust library for converting the VRI/CST Tipitaka catalogue into
//! the compact filename-keyed lookup map published on tipitakapali.org.
//!
//! ## Pipeline
//!
//! - **Resolve** - rewrite the catalogue's numeric cross-references
//!   (`MulaIndex`/`AtthakathaIndex`/`TikaIndex`) to filenames
//! - **Map** - transliterate nav paths for display, emit the display
//!   catalogue (`books.json`) and the jump map (`tpo_map.json`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use tipimap::converter::{MapOptions, convert_catalogue_to_map};
//! use tipimap::script::PassthroughProcessor;
//!
//! convert_catalogue_to_map(
//!     "output/temp2_filename.json",
//!     "output",
//!     &PassthroughProcessor,
//!     &MapOptions::default(),
//! )?;
//! # Ok::<(), tipimap::Error>(())
//! ```
//!
//! ## Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use tipimap::prelude::*;
//!
//! // Now you have access to:
//! // - Book, IndexedBook, LookupEntry, LookupMap
//! // - Script, TextProcessor, PassthroughProcessor
//! // - Error, Result, and the conversion functions
//! ```

pub mod converter;
pub mod error;
pub mod formats;
pub mod script;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        MapOptions, apply_manual_links, build_lookup_map, convert_catalogue_to_map,
        resolve_indices, resolve_indices_to_filenames, to_title_case, transliterate_nav_path,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::book::{Book, BookType, CommentaryLevel, IndexedBook, Pitaka};
    pub use crate::formats::lookup::{JumpKind, LookupEntry, LookupMap};
    pub use crate::script::{PassthroughProcessor, Script, TextProcessor};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
