//! PDF exporter.
//!
//! The preview is laid out with the plain-text writer and scaled so its width
//! fills the printable width of the page. Lines that do not fit spill onto
//! further pages. Text uses the built-in Courier faces.

use crate::atomic;
use crate::error::{Error, Result};
use crate::exporter::Exporter;
use crate::types::{ExportFormat, ExportOptions, PageSize};
use layout::{Surface, text};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::PathBuf;

/// Page margin on every side
const MARGIN_MM: f32 = 15.0;

/// Advance width of a Courier glyph, in em
const COURIER_ADVANCE: f32 = 0.6;

/// Baseline-to-baseline distance, in em
const LINE_SPACING: f32 = 1.25;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Where text goes on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width_mm: f32,
    /// Page height
    pub height_mm: f32,
    /// Font size that makes `columns` characters fill the printable width
    pub font_pt: f32,
    /// Lines that fit on one page
    pub lines_per_page: usize,
}

impl PageGeometry {
    /// Fit `columns` characters across `page`.
    #[must_use]
    pub fn fit(page: PageSize, columns: usize) -> Self {
        let (width_mm, height_mm) = page.dimensions_mm();
        let columns = columns.max(text::MIN_WIDTH) as f32;

        let font_pt = (width_mm - 2.0 * MARGIN_MM) * PT_PER_MM / (columns * COURIER_ADVANCE);
        let line_mm = font_pt * LINE_SPACING / PT_PER_MM;
        let lines_per_page = ((height_mm - 2.0 * MARGIN_MM) / line_mm).floor().max(1.0) as usize;

        Self {
            width_mm,
            height_mm,
            font_pt,
            lines_per_page,
        }
    }

    fn line_mm(&self) -> f32 {
        self.font_pt * LINE_SPACING / PT_PER_MM
    }
}

/// Split `lines` into pages of at most `per_page` lines; always at least one page.
pub fn paginate<T>(lines: &[T], per_page: usize) -> Vec<&[T]> {
    if lines.is_empty() {
        return vec![lines];
    }
    lines.chunks(per_page.max(1)).collect()
}

/// Map text onto what the built-in PDF fonts can show.
fn printable(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '→' => "->".to_string(),
            '─' | '–' | '—' => "-".to_string(),
            c if u32::from(c) <= 0xFF => c.to_string(),
            _ => "?".to_string(),
        })
        .collect()
}

/// Writes the preview as a paginated PDF at A4 or Letter size.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    /// Create a PDF exporter.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Build the document in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pdf`] when the PDF library rejects the document.
    pub fn render(&self, surface: &Surface) -> Result<Vec<u8>> {
        let geometry = PageGeometry::fit(self.options.page, self.options.text_width);
        let rendered = text::write(surface, self.options.text_width);
        let lines: Vec<&str> = rendered.lines().collect();
        let pages = paginate(&lines, geometry.lines_per_page);

        let name = surface.header.full_name.trim();
        let title = if name.is_empty() {
            "Resume".to_string()
        } else {
            format!("{name} - Resume")
        };

        let width = Mm(geometry.width_mm);
        let height = Mm(geometry.height_mm);
        let (doc, first_page, first_layer) = PdfDocument::new(&title, width, height, "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::CourierBold)
            .map_err(|e| Error::Pdf(e.to_string()))?;

        for (number, page_lines) in pages.iter().enumerate() {
            let layer = if number == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(width, height, "Layer 1");
                doc.get_page(page).get_layer(layer)
            };

            let mut y = geometry.height_mm - MARGIN_MM - geometry.line_mm();
            for (i, line) in page_lines.iter().enumerate() {
                if !line.trim().is_empty() {
                    let font = if number == 0 && i == 0 { &bold } else { &regular };
                    layer.use_text(printable(line), geometry.font_pt, Mm(MARGIN_MM), Mm(y), font);
                }
                y -= geometry.line_mm();
            }
        }

        log::debug!(
            "PDF layout: {} lines over {} page(s) at {:.1}pt",
            lines.len(),
            pages.len(),
            geometry.font_pt
        );
        doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
    }
}

impl Exporter for PdfExporter {
    fn export(&self, surface: &Surface) -> Result<PathBuf> {
        let path = self.options.target(ExportFormat::Pdf)?;
        let document = self.render(surface)?;

        atomic::write(&path, &document)?;
        log::info!("Exported {} layout to {}", surface.layout, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{LayoutId, render};
    use resume::{Experience, ResumeAggregate};
    use tempfile::TempDir;

    #[test]
    fn test_geometry_fills_page_width() {
        let a4 = PageGeometry::fit(PageSize::A4, 80);
        let used_mm = 80.0 * COURIER_ADVANCE * a4.font_pt / PT_PER_MM;
        assert!((used_mm - (210.0 - 2.0 * MARGIN_MM)).abs() < 0.01);

        // Same column count on a wider page means larger text
        let letter = PageGeometry::fit(PageSize::Letter, 80);
        assert!(letter.font_pt > a4.font_pt);
        assert!(a4.lines_per_page > 40);
    }

    #[test]
    fn test_paginate_by_height() {
        let lines: Vec<u32> = (0..125).collect();
        let pages = paginate(&lines, 50);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2], &lines[100..]);

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, 50).len(), 1);
    }

    #[test]
    fn test_printable_replaces_unsupported_glyphs() {
        assert_eq!(printable("View Project →"), "View Project ->");
        assert_eq!(printable("──"), "--");
        assert_eq!(printable("São Paulo · Brazil"), "São Paulo · Brazil");
        assert_eq!(printable("東京"), "??");
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = TempDir::new().unwrap();
        let mut resume = ResumeAggregate::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        for i in 0..40 {
            resume.experience.push(Experience {
                company: format!("Company {i}"),
                position: "Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: "2021".to_string(),
                responsibilities: "Built things that mattered to people".to_string(),
            });
        }
        let surface = render(&resume, &LayoutId::Simple.descriptor());

        let exporter = PdfExporter::new(ExportOptions::new(dir.path()));
        let path = exporter.export(&surface).unwrap();

        assert_eq!(path, dir.path().join("resume.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let geometry = PageGeometry::fit(PageSize::A4, 80);
        let rendered = text::write(&surface, 80);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(paginate(&lines, geometry.lines_per_page).len() > 1);
    }
}
