use std::path::PathBuf;
use thiserror::Error;

use crate::types::SectionKey;

/// Errors that can occur while editing or loading resume data.
#[derive(Debug, Error)]
pub enum Error {
    /// Field name does not exist on the entry type
    #[error("unknown field '{field}' in {section}")]
    UnknownField {
        /// Section the entry belongs to
        section: SectionKey,
        /// Field name that was requested
        field: String,
    },

    /// Value has the wrong kind for the field, or is out of range
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Field name being written
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Entry index outside the current draft
    #[error("entry {index} out of range ({len} entries)")]
    EntryOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the draft
        len: usize,
    },

    /// Required fields are empty
    #[error("{} required field(s) missing", missing.len())]
    MissingRequired {
        /// The fields that block submission
        missing: Vec<MissingField>,
    },

    /// Could not read a photo or resume file
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path involved in the error
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Resume JSON could not be parsed
    #[error("invalid resume data: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the error only blocks forward navigation
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::MissingRequired { .. })
    }
}

/// A required field left empty, located by entry index and field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    /// Entry index within the section (0 for personal info)
    pub index: usize,
    /// Field name
    pub field: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Result type for resume operations
pub type Result<T> = std::result::Result<T, Error>;
