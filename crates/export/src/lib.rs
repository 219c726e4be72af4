//! # export
//!
//! Document export for vitae.
//!
//! An [`Exporter`] takes a rendered [`layout::Surface`] (a snapshot of the
//! preview) and writes it to disk. Three formats ship:
//!
//! - **PDF** (default): the preview scaled to the width of an A4 or US Letter
//!   page and split into as many pages as its height needs
//! - **HTML**: a standalone page sized to A4 or US Letter width, ready to
//!   print or "save as PDF" from any browser
//! - **Text**: the same rendering the terminal preview shows
//!
//! Every write goes through a temp file in the target directory followed by
//! an atomic rename, so a failed export never leaves a partial document.
//!
//! ## Example
//!
//! ```no_run
//! use export::{ExportFormat, ExportOptions, PageSize};
//! use layout::{LayoutId, render};
//! use resume::ResumeAggregate;
//! use std::path::Path;
//!
//! let resume = ResumeAggregate::load(Path::new("resume.json")).unwrap();
//! let surface = render(&resume, &LayoutId::TwoColumn.descriptor());
//!
//! let options = ExportOptions::new("out").page(PageSize::Letter);
//! let path = export::for_format(ExportFormat::Pdf, options)
//!     .export(&surface)
//!     .unwrap();
//! println!("Saved {}", path.display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atomic;
pub mod error;
pub mod exporter;
pub mod types;

pub use error::{Error, Result};
pub use exporter::{Exporter, HtmlExporter, MockExporter, PdfExporter, TextExporter, for_format};
pub use types::{ExportFormat, ExportOptions, PageSize};
