//! Error types for document export.

use std::path::PathBuf;

/// Result type alias for exports.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}")]
    CreateDir {
        /// Directory path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed.
    #[error("failed to write {path}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File name is empty or contains a path separator.
    #[error("invalid file name '{0}'")]
    InvalidFileName(String),

    /// Unknown page size or format name.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownName {
        /// What was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
        /// Accepted names
        expected: &'static str,
    },

    /// The PDF library rejected the document.
    #[error("failed to build PDF: {0}")]
    Pdf(String),

    /// Simulated failure from [`MockExporter`](crate::MockExporter).
    #[error("export failed: {0}")]
    Simulated(String),
}

impl Error {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::write(
            "/tmp/out/resume.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /tmp/out/resume.html");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_name_message() {
        let err = Error::UnknownName {
            kind: "page size",
            value: "b5".to_string(),
            expected: "a4, letter",
        };
        assert_eq!(
            err.to_string(),
            "unknown page size 'b5' (expected one of: a4, letter)"
        );
    }
}
