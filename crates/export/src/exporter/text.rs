//! Plain-text exporter.

use crate::atomic;
use crate::error::Result;
use crate::exporter::Exporter;
use crate::types::{ExportFormat, ExportOptions};
use layout::{Surface, text};
use std::path::PathBuf;

/// Writes the terminal rendering to a `.txt` file.
#[derive(Debug, Clone)]
pub struct TextExporter {
    options: ExportOptions,
}

impl TextExporter {
    /// Create a text exporter.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl Exporter for TextExporter {
    fn export(&self, surface: &Surface) -> Result<PathBuf> {
        let path = self.options.target(ExportFormat::Text)?;
        let document = text::write(surface, self.options.text_width);

        atomic::write(&path, document.as_bytes())?;
        log::info!("Exported {} layout to {}", surface.layout, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{LayoutId, render};
    use resume::{ResumeAggregate, Skill};
    use tempfile::TempDir;

    #[test]
    fn test_export_matches_terminal_rendering() {
        let dir = TempDir::new().unwrap();
        let mut resume = ResumeAggregate::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.skills.push(Skill::new("Rust", 4));
        let surface = render(&resume, &LayoutId::Comprehensive.descriptor());

        let options = ExportOptions::new(dir.path()).file_name("jane");
        let path = TextExporter::new(options).export(&surface).unwrap();

        assert_eq!(path, dir.path().join("jane.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text::write(&surface, 80));
    }
}
