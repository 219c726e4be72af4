//! The [`Exporter`] trait and its implementations.
//!
//! # Testing
//!
//! [`MockExporter`] records every surface it is handed and can be told to
//! fail or to take its time:
//!
//! ```
//! use export::{Exporter, MockExporter};
//! use layout::{LayoutId, render};
//! use resume::ResumeAggregate;
//!
//! let mock = MockExporter::new();
//! let surface = render(&ResumeAggregate::new(), &LayoutId::Simple.descriptor());
//! let path = mock.export(&surface).unwrap();
//! assert_eq!(path.file_name().unwrap(), "resume.mock");
//! assert_eq!(mock.exported().len(), 1);
//! ```

pub mod html;
pub mod pdf;
pub mod text;

use crate::error::{Error, Result};
use crate::types::{ExportFormat, ExportOptions};
use layout::Surface;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub use html::HtmlExporter;
pub use pdf::PdfExporter;
pub use text::TextExporter;

/// Turns a rendered surface into a file on disk.
///
/// Implementations block and must not mutate anything but the target file.
pub trait Exporter: Send + Sync {
    /// Write `surface` and return the path of the finished document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be written; no partial file
    /// is left at the target path.
    fn export(&self, surface: &Surface) -> Result<PathBuf>;
}

/// Build the exporter for `format`.
#[must_use]
pub fn for_format(format: ExportFormat, options: ExportOptions) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Pdf => Box::new(PdfExporter::new(options)),
        ExportFormat::Html => Box::new(HtmlExporter::new(options)),
        ExportFormat::Text => Box::new(TextExporter::new(options)),
    }
}

/// In-memory exporter for tests.
///
/// Clones share their state.
#[derive(Debug, Clone, Default)]
pub struct MockExporter {
    exported: Arc<Mutex<Vec<Surface>>>,
    calls: Arc<AtomicUsize>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockExporter {
    /// A mock that succeeds immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that fails every export with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Sleep for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of export calls so far, failed ones included.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Surfaces successfully exported, oldest first.
    #[must_use]
    pub fn exported(&self) -> Vec<Surface> {
        self.exported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Exporter for MockExporter {
    fn export(&self, surface: &Surface) -> Result<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if let Some(message) = &self.failure {
            return Err(Error::Simulated(message.clone()));
        }
        self.exported
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(surface.clone());
        Ok(PathBuf::from("resume.mock"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{LayoutId, render};
    use resume::ResumeAggregate;

    fn surface() -> Surface {
        render(&ResumeAggregate::new(), &LayoutId::TwoColumn.descriptor())
    }

    #[test]
    fn test_mock_records_surfaces() {
        let mock = MockExporter::new();
        let shared = mock.clone();
        shared.export(&surface()).unwrap();
        shared.export(&surface()).unwrap();
        assert_eq!(mock.calls(), 2);
        assert_eq!(mock.exported().len(), 2);
        assert_eq!(mock.exported()[0].layout, LayoutId::TwoColumn);
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockExporter::failing("disk full");
        let err = mock.export(&surface()).unwrap_err();
        assert_eq!(err.to_string(), "export failed: disk full");
        assert_eq!(mock.calls(), 1);
        assert!(mock.exported().is_empty());
    }

    #[test]
    fn test_for_format_picks_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let options = ExportOptions::new(dir.path());

        let html = for_format(ExportFormat::Html, options.clone())
            .export(&surface())
            .unwrap();
        assert_eq!(html.extension().unwrap(), "html");

        let text = for_format(ExportFormat::Text, options.clone())
            .export(&surface())
            .unwrap();
        assert_eq!(text.extension().unwrap(), "txt");

        let pdf = for_format(ExportFormat::Pdf, options).export(&surface()).unwrap();
        assert_eq!(pdf.extension().unwrap(), "pdf");
    }
}
