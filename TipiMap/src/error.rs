//! Error types for `TipiMap`

use thiserror::Error;

/// The error type for `TipiMap` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalogue records share the same `FileName`.
    #[error("duplicate FileName: {file_name}")]
    DuplicateFileName {
        /// The filename that appeared more than once.
        file_name: String,
    },

    /// A manual override references a filename missing from the map.
    #[error("manual override references missing map entry: {file_name}")]
    OverrideEntryMissing {
        /// The filename the override expected to find.
        file_name: String,
    },

    /// A script code the converter seam does not recognize.
    #[error("unknown script code: {code}")]
    UnknownScript {
        /// The unrecognized code.
        code: String,
    },
}

/// A specialized Result type for `TipiMap` operations.
pub type Result<T> = std::result::Result<T, Error>;
