//! Printable HTML exporter.

use crate::atomic;
use crate::error::Result;
use crate::exporter::Exporter;
use crate::types::{ExportFormat, ExportOptions};
use layout::{HtmlOptions, Surface, html};
use std::path::PathBuf;

/// Writes a standalone HTML page sized to the configured paper width.
///
/// Opening the file in a browser and printing it yields one page per
/// physical page; the photo is embedded, so the file travels alone.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    options: ExportOptions,
}

impl HtmlExporter {
    /// Create an HTML exporter.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn page_options(&self, surface: &Surface) -> HtmlOptions {
        let name = surface.header.full_name.trim();
        let title = if name.is_empty() {
            "Resume".to_string()
        } else {
            format!("{name} - Resume")
        };

        HtmlOptions {
            title,
            page_width: self.options.page.css_width().to_string(),
            page_size: self.options.page.css_size().to_string(),
            generator: Some(format!(
                "vitae {} ({})",
                env!("CARGO_PKG_VERSION"),
                chrono::Local::now().format("%Y-%m-%d %H:%M")
            )),
        }
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, surface: &Surface) -> Result<PathBuf> {
        let path = self.options.target(ExportFormat::Html)?;
        let document = html::write(surface, &self.page_options(surface));

        atomic::write(&path, document.as_bytes())?;
        log::info!("Exported {} layout to {}", surface.layout, path.display());
        Ok(path)
    }
}
