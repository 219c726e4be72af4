//! Export options.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Printed page geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4, 210 mm wide
    #[default]
    A4,
    /// US Letter, 8.5 in wide
    Letter,
}

impl PageSize {
    /// Config/CLI name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }

    /// Page width and height in millimetres.
    #[must_use]
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
        }
    }

    /// CSS width of the printable page.
    #[must_use]
    pub fn css_width(&self) -> &'static str {
        match self {
            Self::A4 => "210mm",
            Self::Letter => "8.5in",
        }
    }

    /// CSS `@page` size keyword.
    #[must_use]
    pub fn css_size(&self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::Letter => "letter",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "letter" | "us-letter" => Ok(Self::Letter),
            _ => Err(Error::UnknownName {
                kind: "page size",
                value: s.to_string(),
                expected: "a4, letter",
            }),
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Paginated PDF at the configured page size
    #[default]
    Pdf,
    /// Standalone printable HTML page
    Html,
    /// Plain text, as shown in the terminal
    Text,
}

impl ExportFormat {
    /// Config/CLI name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Text => "text",
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(Error::UnknownName {
                kind: "format",
                value: s.to_string(),
                expected: "pdf, html, text",
            }),
        }
    }
}

/// Where and how to write an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory the document is written into (created if missing)
    pub output_dir: PathBuf,
    /// File stem; the format's extension is appended
    pub file_name: String,
    /// Page geometry (PDF and HTML)
    pub page: PageSize,
    /// Wrap width in characters (text and PDF)
    pub text_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: "resume".to_string(),
            page: PageSize::default(),
            text_width: 80,
        }
    }
}

impl ExportOptions {
    /// Create options writing `resume.<ext>` into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the file stem.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn page(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }

    /// Full target path for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFileName`] for an empty stem or one containing
    /// a path separator.
    pub fn target(&self, format: ExportFormat) -> Result<PathBuf> {
        let stem = self.file_name.trim();
        if stem.is_empty() || stem.contains(['/', '\\']) || stem == "." || stem == ".." {
            return Err(Error::InvalidFileName(self.file_name.clone()));
        }
        Ok(self
            .output_dir
            .join(format!("{stem}.{}", format.extension())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_page_size_parse() {
        assert_eq!("A4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!("letter".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert!("legal".parse::<PageSize>().is_err());
        assert_eq!(PageSize::Letter.css_width(), "8.5in");
        assert_eq!(PageSize::A4.dimensions_mm(), (210.0, 297.0));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("docx".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
    }

    #[test]
    fn test_target_path() {
        let options = ExportOptions::new("/tmp/cv").file_name("jane-doe");
        assert_eq!(
            options.target(ExportFormat::Html).unwrap(),
            Path::new("/tmp/cv/jane-doe.html")
        );
        assert_eq!(
            options.target(ExportFormat::Text).unwrap(),
            Path::new("/tmp/cv/jane-doe.txt")
        );
        assert_eq!(
            options.target(ExportFormat::Pdf).unwrap(),
            Path::new("/tmp/cv/jane-doe.pdf")
        );
    }

    #[test]
    fn test_target_rejects_bad_names() {
        for bad in ["", "  ", "../escape", "a/b", ".."] {
            let options = ExportOptions::default().file_name(bad);
            assert!(
                matches!(options.target(ExportFormat::Html), Err(Error::InvalidFileName(_))),
                "{bad:?}"
            );
        }
    }
}
