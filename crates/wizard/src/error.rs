//! Error types for the wizard session.

use resume::SectionKey;
use thiserror::Error;

/// Errors raised by the sequencer and the coordinator.
#[derive(Debug, Error)]
pub enum Error {
    /// Editing or validation error from the mounted editor
    #[error(transparent)]
    Resume(#[from] resume::Error),

    /// Step list is empty or repeats a step
    #[error("invalid step order: {0}")]
    InvalidSteps(String),

    /// Operation needs a repeatable section
    #[error("{0} holds a single record; entries cannot be added or removed")]
    NotRepeatable(SectionKey),

    /// Operation belongs to a different step than the mounted one
    #[error("{operation} is only available on the {expected} step (current: {mounted})")]
    WrongStep {
        /// What was attempted
        operation: &'static str,
        /// Step the operation belongs to
        expected: SectionKey,
        /// Step currently mounted
        mounted: SectionKey,
    },
}

impl Error {
    /// Returns true if the error only blocks forward navigation
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::Resume(e) if e.is_advisory())
    }

    /// Missing required fields, if this is a validation error
    pub fn missing_fields(&self) -> &[resume::MissingField] {
        match self {
            Error::Resume(resume::Error::MissingRequired { missing }) => missing,
            _ => &[],
        }
    }
}

/// Result type for wizard operations
pub type Result<T> = std::result::Result<T, Error>;
